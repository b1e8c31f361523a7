use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::Path;

use crate::error::SchemaError;
use crate::mapping::Mapping;
use crate::settings::Settings;

/// Declarative description of an index, loaded from a TOML file.
///
/// Field declarations are positional `[type, name, options?]` entries, e.g.
///
/// ```toml
/// [index]
/// name = "messages"
///
/// [settings]
/// number_of_shards = 1
///
/// [mapping]
/// source = true
/// fields = [
///     ["text", "body", { analyzer = "standard" }],
///     ["keyword", "tag"],
/// ]
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct IndexSchema {
    pub index: IndexConfig,
    #[serde(default)]
    pub settings: Map<String, Value>,
    #[serde(default)]
    pub mapping: MappingSpec,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IndexConfig {
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MappingSpec {
    pub field_names: Option<bool>,
    pub source: Option<bool>,
    /// `true`, `false` or `"strict"`, passed through to the mapping.
    pub dynamic: Option<Value>,
    #[serde(default)]
    pub fields: Vec<Vec<Value>>,
}

impl IndexSchema {
    /// Parses a schema from TOML text.
    pub fn parse(content: &str) -> Result<Self, SchemaError> {
        let schema: IndexSchema = toml::from_str(content)?;
        if schema.index.name.is_empty() {
            return Err(SchemaError::Config("index name must not be empty".into()));
        }
        Ok(schema)
    }

    /// Loads a schema file. `ELASTICSEARCH_INDEX` overrides the index name
    /// from the file, so one schema can serve several deployments.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let content = std::fs::read_to_string(path)?;
        let mut schema = Self::parse(&content)?;

        if let Ok(name) = std::env::var("ELASTICSEARCH_INDEX")
            && !name.is_empty()
        {
            tracing::info!("Index name overridden by ELASTICSEARCH_INDEX: {name}");
            schema.index.name = name;
        }

        tracing::debug!(
            "Loaded schema for index '{}' ({} fields)",
            schema.index.name,
            schema.mapping.fields.len()
        );
        Ok(schema)
    }

    /// Folds the mapping toggles and field declarations into a [`Mapping`].
    pub fn build_mapping(&self) -> Result<Mapping, SchemaError> {
        let mut mapping = Mapping::new();

        if let Some(enabled) = self.mapping.field_names {
            mapping = if enabled {
                mapping.enable_field_names()
            } else {
                mapping.disable_field_names()
            };
        }
        if let Some(enabled) = self.mapping.source {
            mapping = if enabled {
                mapping.enable_source()
            } else {
                mapping.disable_source()
            };
        }
        if let Some(mode) = &self.mapping.dynamic {
            mapping = mapping.dynamic(mode.clone());
        }

        for entry in &self.mapping.fields {
            let Some((method, args)) = entry.split_first() else {
                return Err(SchemaError::Config(
                    "empty field entry in mapping.fields".into(),
                ));
            };
            let Some(method) = method.as_str() else {
                return Err(SchemaError::Config(format!(
                    "field entry must start with a type name, got {method}"
                )));
            };
            mapping = mapping.call(method, args)?;
        }

        Ok(mapping)
    }

    pub fn build_settings(&self) -> Settings {
        Settings::new().merge(&self.settings)
    }

    /// Assembles the full create-index request body. Sections with nothing
    /// configured are omitted, so a bare schema renders as `{}`.
    pub fn create_index_body(&self) -> Result<Value, SchemaError> {
        let settings = self.build_settings();
        let mapping = self.build_mapping()?;

        let mut body = Map::new();
        if !settings.is_empty() {
            body.insert("settings".into(), settings.to_value());
        }
        if !mapping.is_empty() {
            body.insert("mappings".into(), mapping.to_value());
        }
        Ok(Value::Object(body))
    }
}
