//! In-memory builders for Elasticsearch create-index request bodies:
//! mappings, settings, and a declarative TOML schema that drives both.

pub mod error;
pub mod mapping;
pub mod schema;
pub mod settings;
pub mod util;

pub use error::SchemaError;
pub use mapping::Mapping;
pub use settings::Settings;
