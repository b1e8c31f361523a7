use serde_json::{Map, Value, json};

/// Builder for the `settings` section of a create-index body.
///
/// Same projection contract as [`Mapping`](crate::Mapping): nothing
/// configured means `{}` is emitted, and last write wins per key.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    options: Map<String, Value>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shards(self, count: u32) -> Self {
        self.option("number_of_shards", json!(count))
    }

    pub fn replicas(self, count: u32) -> Self {
        self.option("number_of_replicas", json!(count))
    }

    pub fn refresh_interval(self, interval: &str) -> Self {
        self.option("refresh_interval", json!(interval))
    }

    /// Custom analyzers, tokenizers and filters, passed through verbatim.
    pub fn analysis(self, analysis: Value) -> Self {
        self.option("analysis", analysis)
    }

    /// Escape hatch for any index setting without a named setter.
    pub fn option(mut self, key: impl Into<String>, value: Value) -> Self {
        self.options.insert(key.into(), value);
        self
    }

    /// Bulk-applies raw settings, e.g. the `[settings]` table of a schema
    /// file. Entries overwrite earlier ones with the same key.
    pub fn merge(mut self, entries: &Map<String, Value>) -> Self {
        for (key, value) in entries {
            self.options.insert(key.clone(), value.clone());
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.options.clone())
    }
}
