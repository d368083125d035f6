use contracts::shared::color::invert_hex_color;
use contracts::shared::data_path::{value_at_path, value_to_text};
use contracts::shared::page_config::{DisplayField, FieldType};
use contracts::shared::sanitize::{safe_color, safe_url};
use contracts::shared::url_template::field_url;
use leptos::prelude::*;
use serde_json::Value;
use thaw::*;

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => matches!(s.to_lowercase().as_str(), "true" | "1" | "yes"),
        _ => false,
    }
}

/// Table cell for one display field of a row
#[component]
pub fn FieldCell(field: DisplayField, row: Value) -> impl IntoView {
    let value = value_at_path(&field.name, &row).cloned().unwrap_or(Value::Null);
    let text = value_to_text(&value);

    let content = match field.field_type {
        FieldType::Text => view! { <span>{text}</span> }.into_any(),
        FieldType::Url => match safe_url(&field_url(&field, &value)) {
            Some(href) => view! {
                <a href=href target="_blank" rel="noopener noreferrer">{text}</a>
            }
            .into_any(),
            None => view! { <span>{text}</span> }.into_any(),
        },
        FieldType::Image => match safe_url(&text) {
            Some(src) => view! { <img class="table__image" src=src alt=field.title().to_string() /> }
                .into_any(),
            None => view! { <span>{text}</span> }.into_any(),
        },
        FieldType::Colorbox => match safe_color(&text) {
            Some(color) => {
                let foreground = invert_hex_color(&color).unwrap_or_else(|| "inherit".to_string());
                let style = format!("background-color: {}; color: {};", color, foreground);
                view! { <span class="table__colorbox" style=style>{text}</span> }.into_any()
            }
            None => view! { <span class="table__colorbox">{text}</span> }.into_any(),
        },
        FieldType::Boolean => {
            if is_truthy(&value) {
                view! { <span class="table__bool table__bool--true">"✓"</span> }.into_any()
            } else {
                view! { <span class="table__bool table__bool--false">"✗"</span> }.into_any()
            }
        }
    };

    view! {
        <TableCell>
            <TableCellLayout truncate=true>{content}</TableCellLayout>
        </TableCell>
    }
}
