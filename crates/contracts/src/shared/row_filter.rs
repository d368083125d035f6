use serde_json::Value;

use super::data_path::{value_at_path, value_to_text};
use super::page_config::DisplayField;

/// Client-side text filter over the filterable fields of each row.
///
/// Blank text keeps every row. Otherwise a row stays when any filterable
/// field contains the text, case-insensitively. Row order is preserved.
pub fn filter_rows(rows: &[Value], filterable_fields: &[DisplayField], text: &str) -> Vec<Value> {
    let needle = text.trim().to_lowercase();
    if needle.is_empty() {
        return rows.to_vec();
    }

    rows.iter()
        .filter(|row| row_matches(row, filterable_fields, &needle))
        .cloned()
        .collect()
}

fn row_matches(row: &Value, fields: &[DisplayField], needle_lower: &str) -> bool {
    fields.iter().any(|field| match value_at_path(&field.name, row) {
        None | Some(Value::Null) => false,
        Some(value) => value_to_text(value).to_lowercase().contains(needle_lower),
    })
}
