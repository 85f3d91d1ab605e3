//! Output formatting for CLI results

use serde::Serialize;
use serde_json::Value;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::provider::{AttributeType, ResourceData, Schema};

pub mod json;
pub mod pretty;
pub mod table;

/// Trait for types that can be formatted for output
pub trait Formattable {
    /// Format the data according to the specified format
    fn format(&self, format: OutputFormat) -> Result<String>;

    /// Format and print to stdout
    fn print(&self, format: OutputFormat) -> Result<()> {
        println!("{}", self.format(format)?);
        Ok(())
    }
}

/// A managed group as shown to the user
#[derive(Debug, Clone, Serialize)]
pub struct GroupView {
    pub id: String,
    pub attributes: serde_json::Map<String, Value>,
}

impl From<&ResourceData> for GroupView {
    fn from(data: &ResourceData) -> Self {
        Self {
            id: data.id().to_string(),
            attributes: data.attributes().clone(),
        }
    }
}

/// One attribute row in table output
#[derive(Debug, Clone, Tabled)]
pub struct AttributeRow {
    #[tabled(rename = "ATTRIBUTE")]
    pub name: String,
    #[tabled(rename = "VALUE")]
    pub value: String,
}

impl GroupView {
    fn rows(&self) -> Vec<AttributeRow> {
        let mut rows = vec![AttributeRow {
            name: "id".to_string(),
            value: self.id.clone(),
        }];
        rows.extend(self.attributes.iter().map(|(name, value)| AttributeRow {
            name: name.clone(),
            value: display_value(value),
        }));
        rows
    }
}

impl Formattable for GroupView {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Pretty => Ok(pretty::format_group(self)),
            OutputFormat::Table => Ok(table::format_table(&self.rows())),
            OutputFormat::Json => Ok(json::format_json(self)?),
        }
    }
}

/// One schema attribute row; nested block attributes use dotted names
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct SchemaRow {
    #[tabled(rename = "NAME")]
    pub name: String,
    #[tabled(rename = "TYPE")]
    #[serde(rename = "type")]
    pub kind: String,
    #[tabled(rename = "MODE")]
    pub mode: String,
    #[tabled(rename = "DESCRIPTION")]
    pub description: String,
}

/// Flatten a schema into rows, descending into nested blocks
pub fn schema_rows(schema: &Schema) -> Vec<SchemaRow> {
    let mut rows = Vec::new();
    collect_schema_rows(schema, "", &mut rows);
    rows
}

fn collect_schema_rows(schema: &Schema, prefix: &str, rows: &mut Vec<SchemaRow>) {
    for (name, attribute) in &schema.attributes {
        let full_name = format!("{}{}", prefix, name);
        let mode = if attribute.required {
            "required"
        } else if attribute.computed {
            "optional, computed"
        } else {
            "optional"
        };

        rows.push(SchemaRow {
            name: full_name.clone(),
            kind: attribute.kind.display_name(),
            mode: mode.to_string(),
            description: attribute.description.clone(),
        });

        if let AttributeType::Block { schema, .. } = &attribute.kind {
            collect_schema_rows(schema, &format!("{}.", full_name), rows);
        }
    }
}

/// Schema listing for a resource type
#[derive(Debug, Clone, Serialize)]
pub struct SchemaView {
    pub resource_type: String,
    pub schema: Schema,
}

impl Formattable for SchemaView {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Pretty => Ok(pretty::format_schema(self)),
            OutputFormat::Table => Ok(table::format_table(&schema_rows(&self.schema))),
            OutputFormat::Json => Ok(json::format_json(self)?),
        }
    }
}

/// Render a JSON value on one line; strings without quotes
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Array(items) if items.len() == 1 && items[0].is_object() => {
            display_value(&items[0])
        }
        Value::Object(map) => map
            .iter()
            .map(|(k, v)| format!("{}={}", k, display_value(v)))
            .collect::<Vec<_>>()
            .join(" "),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::sds_group::group_schema;
    use serde_json::json;

    fn view() -> GroupView {
        let mut data = ResourceData::new();
        data.set_id("grp-1");
        data.set("name", json!("pii"));
        data.set("filter", json!([{"query": "service:web"}]));
        data.set("product_list", json!(["logs", "apm"]));
        GroupView::from(&data)
    }

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(&json!("x")), "x");
        assert_eq!(display_value(&json!(true)), "true");
        assert_eq!(display_value(&json!(["logs", "rum"])), "logs, rum");
        assert_eq!(display_value(&json!([{"query": "a:b"}])), "query=a:b");
    }

    #[test]
    fn test_group_rows_start_with_id() {
        let rows = view().rows();
        assert_eq!(rows[0].name, "id");
        assert_eq!(rows[0].value, "grp-1");
        assert!(rows.iter().any(|r| r.name == "filter" && r.value == "query=service:web"));
    }

    #[test]
    fn test_group_json_format() {
        let out = view().format(OutputFormat::Json).unwrap();
        let parsed: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["data"]["id"], "grp-1");
        assert_eq!(parsed["data"]["attributes"]["product_list"][1], "apm");
    }

    #[test]
    fn test_schema_rows_include_nested_block() {
        let rows = schema_rows(&group_schema());
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();

        assert!(names.contains(&"filter"));
        assert!(names.contains(&"filter.query"));
        assert!(names.contains(&"product_list"));
        let product_list = rows.iter().find(|r| r.name == "product_list").unwrap();
        assert_eq!(product_list.kind, "list(string)");
    }
}
