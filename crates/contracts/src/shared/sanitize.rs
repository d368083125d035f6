//! Проверка значений из ответа API перед вставкой в `href`, `src` и `style`.

const SAFE_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// Url usable as a link or image source.
///
/// Relative and protocol-relative urls pass, absolute ones only with an
/// http(s) or mailto scheme. Tabs and newlines are ignored when looking for
/// the scheme, as browsers do.
pub fn safe_url(url: &str) -> Option<String> {
    let cleaned: String = url
        .chars()
        .filter(|c| !matches!(c, '\t' | '\n' | '\r'))
        .collect();
    let cleaned = cleaned.trim_matches(|c: char| c <= ' ');
    if cleaned.is_empty() {
        return None;
    }

    match cleaned.find([':', '/', '?', '#']) {
        Some(i) if cleaned[i..].starts_with(':') => {
            let scheme = cleaned[..i].to_ascii_lowercase();
            SAFE_SCHEMES
                .contains(&scheme.as_str())
                .then(|| cleaned.to_string())
        }
        _ => Some(cleaned.to_string()),
    }
}

/// CSS colour token: `#hex`, a colour name or an `rgb()/rgba()/hsl()/hsla()` call
pub fn safe_color(color: &str) -> Option<String> {
    let color = color.trim();
    if color.is_empty() {
        return None;
    }

    if let Some(hex) = color.strip_prefix('#') {
        let valid = matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit());
        return valid.then(|| color.to_string());
    }

    if color.chars().all(|c| c.is_ascii_alphabetic()) {
        return Some(color.to_string());
    }

    let lower = color.to_ascii_lowercase();
    let args = ["rgb(", "rgba(", "hsl(", "hsla("]
        .iter()
        .find_map(|f| lower.strip_prefix(f))
        .and_then(|rest| rest.strip_suffix(')'))?;
    args.chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '%' | ' ' | '/' | '-'))
        .then(|| color.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_url_allows_web_links() {
        assert_eq!(safe_url("https://x.org/a?b=1").as_deref(), Some("https://x.org/a?b=1"));
        assert_eq!(safe_url("HTTP://x.org").as_deref(), Some("HTTP://x.org"));
        assert_eq!(safe_url("mailto:a@b.c").as_deref(), Some("mailto:a@b.c"));
        assert_eq!(safe_url("/users/1").as_deref(), Some("/users/1"));
        assert_eq!(safe_url("//cdn.test/i.png").as_deref(), Some("//cdn.test/i.png"));
        assert_eq!(safe_url("img/a:b.png").as_deref(), Some("img/a:b.png"));
        assert_eq!(safe_url("?page=2").as_deref(), Some("?page=2"));
    }

    #[test]
    fn test_safe_url_rejects_scripts() {
        assert_eq!(safe_url("javascript:alert(1)"), None);
        assert_eq!(safe_url("  JavaScript:alert(1)"), None);
        assert_eq!(safe_url("java\tscript:alert(1)"), None);
        assert_eq!(safe_url("data:text/html;base64,AAAA"), None);
        assert_eq!(safe_url("vbscript:x"), None);
        assert_eq!(safe_url("   "), None);
    }

    #[test]
    fn test_safe_color() {
        assert_eq!(safe_color("#ff0000").as_deref(), Some("#ff0000"));
        assert_eq!(safe_color("#abc").as_deref(), Some("#abc"));
        assert_eq!(safe_color("red").as_deref(), Some("red"));
        assert_eq!(safe_color("rgb(1, 2, 3)").as_deref(), Some("rgb(1, 2, 3)"));
        assert_eq!(safe_color("hsla(120, 50%, 50%, 0.3)").as_deref(), Some("hsla(120, 50%, 50%, 0.3)"));
    }

    #[test]
    fn test_safe_color_rejects_injection() {
        assert_eq!(safe_color("red; background-image:url(//evil)"), None);
        assert_eq!(safe_color("rgb(1,2,3); color: red"), None);
        assert_eq!(safe_color("#12345"), None);
        assert_eq!(safe_color("url(x)"), None);
        assert_eq!(safe_color(""), None);
    }
}
