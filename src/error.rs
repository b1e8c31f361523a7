use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Invalid invocation of field type '{method}': {reason}")]
    InvalidInvocation { method: String, reason: String },

    #[error("Schema error: {0}")]
    Config(String),

    #[error("Schema file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Schema parse error: {0}")]
    Toml(#[from] toml::de::Error),
}
