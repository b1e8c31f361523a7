use serde_json::{Map, Value, json};

use crate::error::SchemaError;
use crate::util::to_snake_case;

/// Builder for the `mappings` section of an Elasticsearch create-index body.
///
/// Keys that were never configured are not emitted, so a fresh builder
/// projects to `{}`. Field definitions keep their declaration order;
/// redeclaring a field replaces its definition in place.
#[derive(Debug, Clone, Default)]
pub struct Mapping {
    field_names: Option<bool>,
    source: Option<bool>,
    dynamic: Option<Value>,
    properties: Map<String, Value>,
}

macro_rules! field_type_methods {
    ($($method:ident / $method_with:ident),* $(,)?) => {
        $(
            pub fn $method(self, name: impl Into<String>) -> Self {
                self.field(stringify!($method), name)
            }

            pub fn $method_with(self, name: impl Into<String>, options: Value) -> Self {
                self.field_with(stringify!($method), name, options)
            }
        )*
    };
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enable_field_names(mut self) -> Self {
        self.field_names = Some(true);
        self
    }

    pub fn disable_field_names(mut self) -> Self {
        self.field_names = Some(false);
        self
    }

    pub fn enable_source(mut self) -> Self {
        self.source = Some(true);
        self
    }

    pub fn disable_source(mut self) -> Self {
        self.source = Some(false);
        self
    }

    /// Sets the top-level `dynamic` mapping parameter. Elasticsearch accepts
    /// `true`, `false` and `"strict"`; the value is passed through unchecked.
    pub fn dynamic(mut self, mode: impl Into<Value>) -> Self {
        self.dynamic = Some(mode.into());
        self
    }

    /// Registers a field of the given type under `properties`.
    ///
    /// The type identifier may be camel-case (`geoPoint`) or already
    /// snake-case (`geo_point`); it is normalized either way. No check is
    /// made that the result is a type Elasticsearch knows about.
    pub fn field(self, field_type: &str, name: impl Into<String>) -> Self {
        self.field_with(field_type, name, Value::Object(Map::new()))
    }

    /// Like [`field`](Self::field), with extra mapping options merged into
    /// the definition. The derived `type` always wins over a `type` entry
    /// in `options`.
    pub fn field_with(mut self, field_type: &str, name: impl Into<String>, options: Value) -> Self {
        let name = name.into();
        let mut definition = Map::new();
        definition.insert("type".into(), Value::String(to_snake_case(field_type)));

        match options.as_object() {
            Some(extra) => {
                for (key, value) in extra {
                    if key != "type" {
                        definition.insert(key.clone(), value.clone());
                    }
                }
            }
            None => {
                tracing::warn!("Ignoring non-object options for field '{name}'");
            }
        }

        if self
            .properties
            .insert(name.clone(), Value::Object(definition))
            .is_some()
        {
            tracing::debug!("Field '{name}' redeclared, previous definition replaced");
        }
        self
    }

    field_type_methods! {
        text / text_with,
        keyword / keyword_with,
        boolean / boolean_with,
        long / long_with,
        integer / integer_with,
        short / short_with,
        double / double_with,
        float / float_with,
        date / date_with,
        ip / ip_with,
        geo_point / geo_point_with,
        nested / nested_with,
        object / object_with,
    }

    /// Dynamic field declaration for callers whose field specs are runtime
    /// data: `method` is the type identifier, `args` is `[name, options?]`.
    ///
    /// Argument count and shape are validated before any state changes, so a
    /// failed call never leaves a partial mutation behind.
    pub fn call(self, method: &str, args: &[Value]) -> Result<Self, SchemaError> {
        let invalid = |reason: String| SchemaError::InvalidInvocation {
            method: method.to_string(),
            reason,
        };

        let (name, options) = match args {
            [name] => (name, None),
            [name, options] => (name, Some(options)),
            _ => {
                return Err(invalid(format!(
                    "expected 1 or 2 arguments, got {}",
                    args.len()
                )));
            }
        };

        let Some(name) = name.as_str() else {
            return Err(invalid("field name must be a string".into()));
        };
        if let Some(options) = options
            && !options.is_object()
        {
            return Err(invalid("field options must be an object".into()));
        }

        let options = options.cloned().unwrap_or_else(|| json!({}));
        Ok(self.field_with(method, name, options))
    }

    pub fn is_empty(&self) -> bool {
        self.field_names.is_none()
            && self.source.is_none()
            && self.dynamic.is_none()
            && self.properties.is_empty()
    }

    /// Projects the accumulated state to the nested structure the mapping
    /// API expects. Unset keys are omitted entirely.
    pub fn to_value(&self) -> Value {
        let mut mapping = Map::new();
        if let Some(enabled) = self.field_names {
            mapping.insert("_field_names".into(), json!({ "enabled": enabled }));
        }
        if let Some(enabled) = self.source {
            mapping.insert("_source".into(), json!({ "enabled": enabled }));
        }
        if let Some(mode) = &self.dynamic {
            mapping.insert("dynamic".into(), mode.clone());
        }
        if !self.properties.is_empty() {
            mapping.insert("properties".into(), Value::Object(self.properties.clone()));
        }
        Value::Object(mapping)
    }
}
