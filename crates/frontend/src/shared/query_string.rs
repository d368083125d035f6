//! Чтение и замена параметров строки запроса без перезагрузки страницы.

use std::collections::BTreeMap;
use web_sys::window;

pub type QueryParams = BTreeMap<String, String>;

/// Parse a `?a=1&b=2` search string
pub fn parse_search(search: &str) -> QueryParams {
    serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default()
}

/// Render params back to `?a=1&b=2`, or an empty string when there are none
pub fn render_search(params: &QueryParams) -> String {
    if params.is_empty() {
        return String::new();
    }
    let query_string = serde_qs::to_string(params).unwrap_or_default();
    format!("?{}", query_string)
}

/// `params` with `key` set to `value`, or removed when `value` is empty
pub fn with_param(mut params: QueryParams, key: &str, value: &str) -> QueryParams {
    if value.is_empty() {
        params.remove(key);
    } else {
        params.insert(key.to_string(), value.to_string());
    }
    params
}

fn current_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

pub fn current_params() -> QueryParams {
    parse_search(&current_search())
}

/// Value of one query parameter of the current location
pub fn get_param(key: &str) -> Option<String> {
    current_params().get(key).cloned()
}

/// Replace one parameter in the address bar (history.replaceState, no new entry)
pub fn replace_param(key: &str, value: &str) {
    replace_search(&with_param(current_params(), key, value));
}

/// Replace the whole query string in the address bar
pub fn replace_search(params: &QueryParams) {
    let new_search = render_search(params);
    if new_search == current_search() {
        return;
    }

    let Some(w) = window() else {
        return;
    };
    let pathname = w.location().pathname().unwrap_or_default();
    let hash = w.location().hash().unwrap_or_default();
    let new_url = format!("{}{}{}", pathname, new_search, hash);
    if let Ok(history) = w.history() {
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&new_url));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search() {
        let params = parse_search("?filter=bob&page=users");
        assert_eq!(params.get("filter").map(String::as_str), Some("bob"));
        assert_eq!(params.get("page").map(String::as_str), Some("users"));
        assert!(parse_search("").is_empty());
    }

    #[test]
    fn test_with_param_and_render() {
        let params = parse_search("?page=users");
        let params = with_param(params, "filter", "ann");
        assert_eq!(render_search(&params), "?filter=ann&page=users");
        let params = with_param(params, "filter", "");
        assert_eq!(render_search(&params), "?page=users");
        let params = with_param(params, "page", "");
        assert_eq!(render_search(&params), "");
    }

    #[test]
    fn test_round_trip_of_encoded_text() {
        let params = with_param(QueryParams::new(), "filter", "a b&c");
        let rendered = render_search(&params);
        assert_eq!(parse_search(&rendered).get("filter").map(String::as_str), Some("a b&c"));
    }
}
