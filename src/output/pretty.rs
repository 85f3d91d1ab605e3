//! Human-oriented output with color

use colored::Colorize;

use super::{GroupView, SchemaView, display_value, schema_rows};

pub fn format_group(view: &GroupView) -> String {
    let mut lines = vec![format!("{} {}", "Group".bold(), view.id.cyan())];

    let width = view.attributes.keys().map(String::len).max().unwrap_or(0);
    for (name, value) in &view.attributes {
        lines.push(format!(
            "  {:width$}  {}",
            name.dimmed(),
            display_value(value),
            width = width
        ));
    }

    if view.attributes.is_empty() {
        lines.push(format!("  {}", "(no attributes set)".dimmed()));
    }

    lines.join("\n")
}

pub fn format_schema(view: &SchemaView) -> String {
    let mut lines = vec![view.resource_type.bold().to_string()];
    if !view.schema.description.is_empty() {
        lines.push(view.schema.description.clone());
    }
    lines.push(String::new());

    for row in schema_rows(&view.schema) {
        lines.push(format!(
            "  {} {} ({})",
            row.name.cyan(),
            row.kind.yellow(),
            row.mode
        ));
        if !row.description.is_empty() {
            lines.push(format!("      {}", row.description.dimmed()));
        }
    }

    lines.join("\n")
}
