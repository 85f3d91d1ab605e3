//! Resource data bag shared by all resource operations

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::diag::{Diagnostic, Diagnostics};
use super::schema::Schema;

/// State of one resource instance: its id plus attribute values keyed by
/// schema field name.
///
/// An empty id means the resource does not exist (or no longer exists).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceData {
    #[serde(default)]
    id: String,

    #[serde(default)]
    attributes: Map<String, Value>,
}

impl ResourceData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build resource data from a configuration mapping.
    ///
    /// Arguments the schema does not declare are rejected. A nested block
    /// written as a single mapping is normalized to a one-element list, and
    /// `null` values are dropped.
    pub fn from_config(schema: &Schema, config: Value) -> Result<Self, Diagnostics> {
        let object = match config {
            Value::Object(object) => object,
            Value::Null => Map::new(),
            other => {
                return Err(Diagnostic::error("Invalid resource configuration")
                    .with_detail(format!("expected a mapping of arguments, got {}", other))
                    .into());
            }
        };

        let mut diags = Diagnostics::new();
        let mut attributes = Map::new();

        for (name, value) in object {
            let Some(attribute) = schema.attribute(&name) else {
                diags.push(
                    Diagnostic::error("Unsupported argument").with_detail(format!(
                        "An argument named \"{}\" is not expected here.",
                        name
                    )),
                );
                continue;
            };

            let value = match value {
                Value::Null => continue,
                Value::Object(block) if attribute.is_block() => {
                    Value::Array(vec![Value::Object(block)])
                }
                other => other,
            };
            if !attribute.kind.accepts(&value) {
                debug!(
                    "Argument \"{}\" is not a {} and will be ignored",
                    name,
                    attribute.kind.display_name()
                );
            }
            attributes.insert(name, value);
        }

        if !diags.is_empty() {
            return Err(diags);
        }

        Ok(Self {
            id: String::new(),
            attributes,
        })
    }

    /// Resource id; empty when the resource is absent
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    /// Look up a value by dotted path; list elements are addressed by
    /// index (`filter.0.query`).
    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let mut current = self.attributes.get(segments.next()?)?;

        for segment in segments {
            current = match current {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }

        Some(current)
    }

    /// Like [`get`](Self::get), but only returns values that are set to
    /// something other than their type's zero value.
    pub fn get_ok(&self, path: &str) -> Option<&Value> {
        self.get(path).filter(|value| !is_zero(value))
    }

    pub fn set(&mut self, key: &str, value: Value) {
        self.attributes.insert(key.to_string(), value);
    }

    pub fn remove(&mut self, key: &str) {
        self.attributes.remove(key);
    }
}

/// Zero values: null, empty string, `false`, `0`, empty list or mapping
fn is_zero(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}
