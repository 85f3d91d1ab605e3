//! Declarative resource schemas

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

/// Type of a schema attribute
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AttributeType {
    String,
    Bool,
    Int,
    List { elem: Box<AttributeType> },
    /// Nested block stored as a list of objects
    Block {
        #[serde(skip_serializing_if = "Option::is_none")]
        max_items: Option<usize>,
        schema: Schema,
    },
}

impl AttributeType {
    /// Whether a configuration value has this type
    pub fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (AttributeType::String, Value::String(_)) => true,
            (AttributeType::Bool, Value::Bool(_)) => true,
            (AttributeType::Int, Value::Number(n)) => n.is_i64(),
            (AttributeType::List { elem }, Value::Array(items)) => {
                items.iter().all(|item| elem.accepts(item))
            }
            (AttributeType::Block { max_items, .. }, Value::Array(items)) => {
                max_items.is_none_or(|max| items.len() <= max)
                    && items.iter().all(Value::is_object)
            }
            _ => false,
        }
    }

    /// Human readable type name used in schema listings
    pub fn display_name(&self) -> String {
        match self {
            AttributeType::String => "string".to_string(),
            AttributeType::Bool => "bool".to_string(),
            AttributeType::Int => "int".to_string(),
            AttributeType::List { elem } => format!("list({})", elem.display_name()),
            AttributeType::Block { max_items: Some(n), .. } => format!("block(max {})", n),
            AttributeType::Block { max_items: None, .. } => "block".to_string(),
        }
    }
}

/// One attribute of a schema
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attribute {
    #[serde(flatten)]
    pub kind: AttributeType,
    pub optional: bool,
    pub required: bool,
    pub computed: bool,
    pub description: String,
}

impl Attribute {
    fn new(kind: AttributeType, description: &str) -> Self {
        Self {
            kind,
            optional: true,
            required: false,
            computed: false,
            description: description.to_string(),
        }
    }

    pub fn optional_string(description: &str) -> Self {
        Self::new(AttributeType::String, description)
    }

    pub fn optional_bool(description: &str) -> Self {
        Self::new(AttributeType::Bool, description)
    }

    pub fn optional_int(description: &str) -> Self {
        Self::new(AttributeType::Int, description)
    }

    pub fn optional_list(elem: AttributeType, description: &str) -> Self {
        Self::new(
            AttributeType::List {
                elem: Box::new(elem),
            },
            description,
        )
    }

    pub fn optional_block(schema: Schema, max_items: Option<usize>, description: &str) -> Self {
        Self::new(AttributeType::Block { max_items, schema }, description)
    }

    pub fn is_block(&self) -> bool {
        matches!(self.kind, AttributeType::Block { .. })
    }
}

/// Schema of a resource or nested block, attributes sorted by name
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Schema {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub attributes: BTreeMap<String, Attribute>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn with_attribute(mut self, name: &str, attribute: Attribute) -> Self {
        self.attributes.insert(name.to_string(), attribute);
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }
}
