//! Query form of the list view and construction of the request url.

use serde::{Deserialize, Serialize};

use super::page_config::QueryParam;
use super::url_template::{placeholders, render_template};

pub const ENCODE_PARAM_TYPE: &str = "encode";

/// Value sent for one configured query param
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParamValue {
    pub name: String,
    pub value: String,
    /// Already percent-encoded, must be sent verbatim
    #[serde(default)]
    pub encoded: bool,
}

/// Form controls bound to the configured query params (declaration order kept)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryForm {
    controls: Vec<(String, String)>,
}

impl QueryForm {
    pub fn from_params(params: &[QueryParam]) -> Self {
        Self {
            controls: params
                .iter()
                .map(|p| (p.name.clone(), p.initial_value()))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.controls
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set a control value; unknown names are ignored
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        if let Some((_, v)) = self.controls.iter_mut().find(|(n, _)| n == name) {
            *v = value.into();
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.controls.iter().map(|(n, _)| n.as_str())
    }

    /// Declared `type` of the param named `name`
    pub fn param_type<'a>(params: &'a [QueryParam], name: &str) -> Option<&'a str> {
        if name.is_empty() || params.is_empty() {
            return None;
        }
        params
            .iter()
            .find(|p| p.name == name)
            .and_then(|p| p.param_type.as_deref())
    }

    /// Current values ready to be sent, `encode` params percent-encoded
    pub fn values(&self, params: &[QueryParam]) -> Vec<QueryParamValue> {
        self.controls
            .iter()
            .map(|(name, value)| {
                let encode = Self::param_type(params, name) == Some(ENCODE_PARAM_TYPE);
                QueryParamValue {
                    name: name.clone(),
                    value: if encode {
                        urlencoding::encode(value).into_owned()
                    } else {
                        value.clone()
                    },
                    encoded: encode,
                }
            })
            .collect()
    }
}

/// Put query param values into `url`.
///
/// A value whose `:name` placeholder occurs in the url is substituted there,
/// the rest are appended as a query string.
pub fn build_request_url(url: &str, values: &[QueryParamValue]) -> String {
    let names = placeholders(url);
    let (in_path, rest): (Vec<&QueryParamValue>, Vec<&QueryParamValue>) =
        values.iter().partition(|v| names.iter().any(|n| *n == v.name));

    let mut used = vec![false; in_path.len()];
    let result = render_template(url, |name| {
        let index = in_path
            .iter()
            .enumerate()
            .position(|(i, v)| !used[i] && v.name == name)?;
        used[index] = true;
        Some(in_path[index].value.clone())
    });

    let query: Vec<String> = rest
        .iter()
        .map(|param| {
            let value = if param.encoded {
                param.value.clone()
            } else {
                urlencoding::encode(&param.value).into_owned()
            };
            format!("{}={}", urlencoding::encode(&param.name), value)
        })
        .collect();

    if query.is_empty() {
        return result;
    }
    let separator = if result.contains('?') { '&' } else { '?' };
    format!("{}{}{}", result, separator, query.join("&"))
}

/// Join a relative method url onto the panel's base url
pub fn resolve_url(base_url: Option<&str>, url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") || url.starts_with("//") {
        return url.to_string();
    }
    match base_url.map(str::trim).filter(|b| !b.is_empty()) {
        Some(base) => format!(
            "{}/{}",
            base.trim_end_matches('/'),
            url.trim_start_matches('/')
        ),
        None => url.to_string(),
    }
}
