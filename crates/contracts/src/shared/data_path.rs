//! Navigation inside API responses by dotted paths like `data.items`.

use serde_json::Value;

/// Walk `path` (dot separated) inside `value`.
///
/// Object keys are matched literally, numeric segments index arrays.
/// An empty path returns the value itself.
pub fn value_at_path<'a>(path: &str, value: &'a Value) -> Option<&'a Value> {
    let path = path.trim();
    if path.is_empty() {
        return Some(value);
    }

    path.split('.').try_fold(value, |current, segment| match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

/// Rows of a list response located at `data_path`.
///
/// - array  → its elements
/// - object → a single row
/// - anything else (including a missing path) → no rows
pub fn extract_data(response: &Value, data_path: Option<&str>) -> Vec<Value> {
    let target = match data_path {
        Some(path) => value_at_path(path, response),
        None => Some(response),
    };

    match target {
        Some(Value::Array(items)) => items.clone(),
        Some(obj @ Value::Object(_)) => vec![obj.clone()],
        _ => Vec::new(),
    }
}

/// Textual form of a cell value: strings without quotes, `null` as empty
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Value of a row field addressed by a (possibly dotted) field name
pub fn field_text(row: &Value, field_name: &str) -> String {
    value_at_path(field_name, row)
        .map(value_to_text)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_at_path() {
        let v = json!({ "data": { "items": [ { "id": 1 }, { "id": 2 } ] } });
        assert_eq!(value_at_path("data.items.1.id", &v), Some(&json!(2)));
        assert_eq!(value_at_path("", &v), Some(&v));
        assert_eq!(value_at_path("data.missing", &v), None);
        assert_eq!(value_at_path("data.items.x", &v), None);
    }

    #[test]
    fn test_extract_array_by_path() {
        let v = json!({ "data": { "items": [ { "id": 1 }, { "id": 2 } ] } });
        let rows = extract_data(&v, Some("data.items"));
        assert_eq!(rows, vec![json!({ "id": 1 }), json!({ "id": 2 })]);
    }

    #[test]
    fn test_extract_without_path() {
        let v = json!([ { "id": 1 } ]);
        assert_eq!(extract_data(&v, None).len(), 1);
        assert_eq!(extract_data(&v, Some("")).len(), 1);
    }

    #[test]
    fn test_extract_object_and_scalars() {
        let v = json!({ "user": { "id": 7 }, "count": 3, "nothing": null });
        assert_eq!(extract_data(&v, Some("user")), vec![json!({ "id": 7 })]);
        assert!(extract_data(&v, Some("count")).is_empty());
        assert!(extract_data(&v, Some("nothing")).is_empty());
        assert!(extract_data(&v, Some("absent.deeper")).is_empty());
    }

    #[test]
    fn test_field_text() {
        let row = json!({ "name": "Ann", "age": 31, "address": { "city": "Oslo" }, "x": null });
        assert_eq!(field_text(&row, "name"), "Ann");
        assert_eq!(field_text(&row, "age"), "31");
        assert_eq!(field_text(&row, "address.city"), "Oslo");
        assert_eq!(field_text(&row, "x"), "");
        assert_eq!(field_text(&row, "missing"), "");
    }
}
