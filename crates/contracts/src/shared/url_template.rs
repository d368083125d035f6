//! `:placeholder` substitution in configured urls.

use serde_json::Value;

use super::data_path::{field_text, value_to_text};
use super::page_config::DisplayField;

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Piece of a url template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    Literal(&'a str),
    /// `:name`, the name without the colon
    Placeholder(&'a str),
}

/// Split `url` into literal text and `:identifier` placeholders.
///
/// A colon not followed by an identifier character (as in `http://`) is
/// literal, as is a purely numeric one (a port).
pub fn segments(url: &str) -> Vec<Segment<'_>> {
    let mut result = Vec::new();
    let mut literal_start = 0;
    let mut pos = 0;

    while let Some(offset) = url[pos..].find(':') {
        let colon = pos + offset;
        let name_start = colon + 1;
        let name_end = url[name_start..]
            .find(|c: char| !is_ident_char(c))
            .map_or(url.len(), |i| name_start + i);
        let name = &url[name_start..name_end];

        if name.is_empty() || name.chars().all(|c| c.is_ascii_digit()) {
            pos = name_start;
            continue;
        }
        if literal_start < colon {
            result.push(Segment::Literal(&url[literal_start..colon]));
        }
        result.push(Segment::Placeholder(name));
        literal_start = name_end;
        pos = name_end;
    }

    if literal_start < url.len() {
        result.push(Segment::Literal(&url[literal_start..]));
    }
    result
}

/// Names of all `:identifier` placeholders in order of appearance
pub fn placeholders(url: &str) -> Vec<String> {
    segments(url)
        .into_iter()
        .filter_map(|s| match s {
            Segment::Placeholder(name) => Some(name.to_string()),
            Segment::Literal(_) => None,
        })
        .collect()
}

/// Render a template, asking `fill` for the value of each placeholder.
///
/// Values are inserted as is and never scanned again; a placeholder for
/// which `fill` returns `None` stays in the output.
pub fn render_template<F>(url: &str, mut fill: F) -> String
where
    F: FnMut(&str) -> Option<String>,
{
    let mut out = String::with_capacity(url.len());
    for segment in segments(url) {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Placeholder(name) => match fill(name) {
                Some(value) => out.push_str(&value),
                None => {
                    out.push(':');
                    out.push_str(name);
                }
            },
        }
    }
    out
}

/// Replace the first `:name` placeholder whose identifier matches exactly.
///
/// `:id` must not match the start of `:identity`.
pub fn replace_placeholder(url: &str, name: &str, value: &str) -> Option<String> {
    let mut replaced = false;
    let out = render_template(url, |placeholder| {
        if !replaced && placeholder == name {
            replaced = true;
            Some(value.to_string())
        } else {
            None
        }
    });
    replaced.then_some(out)
}

/// Link for a display field: the field url with `:<field name>` replaced by
/// the cell value, or the value itself when the field has no url.
pub fn field_url(field: &DisplayField, value: &Value) -> String {
    let text = value_to_text(value);
    match &field.url {
        Some(url) => replace_placeholder(url, &field.name, &text)
            // dotted names are not identifiers, match them literally once
            .unwrap_or_else(|| url.replacen(&format!(":{}", field.name), &text, 1)),
        None => text,
    }
}

/// Fill every `:identifier` in `url` from the row.
///
/// With a `data_path` the value is looked up at `data_path.identifier`.
/// Missing values become empty strings.
pub fn parse_url(url: &str, row: &Value, data_path: Option<&str>) -> String {
    let prefix = data_path.map(str::trim).filter(|p| !p.is_empty());
    render_template(url, |name| {
        let path = match prefix {
            Some(prefix) => format!("{prefix}.{name}"),
            None => name.to_string(),
        };
        Some(field_text(row, &path))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_placeholders() {
        assert_eq!(placeholders("/users/:id/posts/:post_id"), vec!["id", "post_id"]);
        assert!(placeholders("http://example.com/users").is_empty());
        assert_eq!(placeholders("http://example.com:8080/x/:id"), vec!["id"]);
    }

    #[test]
    fn test_replace_placeholder_boundary() {
        assert_eq!(
            replace_placeholder("/a/:identity/:id", "id", "5").as_deref(),
            Some("/a/:identity/5")
        );
        assert_eq!(replace_placeholder("/a/b", "id", "5"), None);
    }

    #[test]
    fn test_field_url() {
        let field = DisplayField {
            name: "id".into(),
            url: Some("https://example.com/users/:id".into()),
            ..Default::default()
        };
        assert_eq!(field_url(&field, &json!(42)), "https://example.com/users/42");

        let nested = DisplayField {
            name: "owner.id".into(),
            url: Some("/owners/:owner.id".into()),
            ..Default::default()
        };
        assert_eq!(field_url(&nested, &json!(7)), "/owners/7");

        let plain = DisplayField { name: "site".into(), ..Default::default() };
        assert_eq!(field_url(&plain, &json!("https://x.org")), "https://x.org");
    }

    #[test]
    fn test_parse_url_from_row() {
        let row = json!({ "id": 3, "team": "core" });
        assert_eq!(parse_url("/teams/:team/members/:id", &row, None), "/teams/core/members/3");
    }

    #[test]
    fn test_parse_url_with_data_path() {
        let row = json!({ "user": { "id": "abc" } });
        assert_eq!(parse_url("/users/:id", &row, Some("user")), "/users/abc");
    }

    #[test]
    fn test_parse_url_keeps_port() {
        let row = json!({ "id": 9 });
        assert_eq!(
            parse_url("http://localhost:3000/items/:id", &row, None),
            "http://localhost:3000/items/9"
        );
    }

    #[test]
    fn test_segments() {
        assert_eq!(
            segments("http://h:80/a/:id?x=:q"),
            vec![
                Segment::Literal("http://h:80/a/"),
                Segment::Placeholder("id"),
                Segment::Literal("?x="),
                Segment::Placeholder("q"),
            ]
        );
        assert_eq!(segments(":id"), vec![Segment::Placeholder("id")]);
        assert!(segments("").is_empty());
    }

    #[test]
    fn test_parse_url_value_with_colon() {
        let row = json!({ "a": "x:b", "b": "2" });
        assert_eq!(parse_url("/items/:a/:b", &row, None), "/items/x:b/2");
    }

    #[test]
    fn test_parse_url_repeated_placeholder() {
        let row = json!({ "id": 4 });
        assert_eq!(parse_url("/a/:id/b/:id", &row, None), "/a/4/b/4");
    }

    #[test]
    fn test_parse_url_missing_value() {
        let row = json!({ "name": "x" });
        assert_eq!(parse_url("/items/:id", &row, None), "/items/");
    }
}
