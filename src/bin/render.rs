//! Schema Rendering Tool
//!
//! Loads an index schema from a TOML file and prints the assembled
//! create-index request body as JSON, ready to be sent to the
//! Elasticsearch indices API.

use anyhow::{Context, Result};
use es_schema_rs::schema::IndexSchema;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("es_schema_rs=info".parse()?),
        )
        .init();

    // .env may carry ELASTICSEARCH_INDEX for the name override
    let _ = dotenvy::dotenv();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "schema.toml".to_string());

    let schema = IndexSchema::load(&path)
        .with_context(|| format!("failed to load schema from {path}"))?;
    tracing::info!("Rendering create-index body for '{}'", schema.index.name);

    let body = schema.create_index_body()?;
    println!("{}", serde_json::to_string_pretty(&body)?);

    Ok(())
}
