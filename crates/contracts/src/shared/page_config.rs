use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Заголовки запроса в том виде, в котором они заданы в конфигурации
pub type RequestHeaders = BTreeMap<String, String>;

/// Ошибки описания страницы
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("No GET method found in configuration file")]
    MissingGetAll,

    #[error("No display defined in configuration file")]
    MissingDisplay,

    #[error("No delete URL found")]
    MissingDeleteUrl,

    #[error("Page not found: {0}")]
    PageNotFound(String),
}

/// Root of the admin-panel descriptor served as `/config.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminConfig {
    #[serde(default)]
    pub name: String,
    /// Prefix for relative method urls
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub pages: Vec<PageConfig>,
}

impl AdminConfig {
    pub fn page(&self, id: &str) -> Result<&PageConfig, ConfigError> {
        self.pages
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| ConfigError::PageNotFound(id.to_string()))
    }

    pub fn first_page_id(&self) -> Option<String> {
        self.pages.first().map(|p| p.id.clone())
    }
}

/// One page of the admin panel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageConfig {
    pub name: String,
    pub id: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub request_headers: Option<RequestHeaders>,
    #[serde(default)]
    pub methods: PageMethods,
}

impl PageConfig {
    pub fn get_all_method(&self) -> Result<&GetAllMethod, ConfigError> {
        self.methods.get_all.as_ref().ok_or(ConfigError::MissingGetAll)
    }

    /// Headers of the method if it defines any, otherwise the page headers.
    /// The two levels are never merged.
    pub fn request_headers_for(&self, method_headers: Option<&RequestHeaders>) -> RequestHeaders {
        method_headers
            .or(self.request_headers.as_ref())
            .cloned()
            .unwrap_or_default()
    }

    /// Headers used by every request of the list view
    pub fn list_request_headers(&self) -> RequestHeaders {
        let method_headers = self
            .methods
            .get_all
            .as_ref()
            .and_then(|m| m.request_headers.as_ref());
        self.request_headers_for(method_headers)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMethods {
    #[serde(default)]
    pub get_all: Option<GetAllMethod>,
    #[serde(default)]
    pub post: Option<MethodConfig>,
    #[serde(default)]
    pub put: Option<MethodConfig>,
    #[serde(default)]
    pub delete: Option<DeleteMethod>,
    #[serde(default)]
    pub custom_actions: Vec<CustomAction>,
}

impl PageMethods {
    /// The actions column is rendered only when a row can be edited or deleted
    pub fn show_actions(&self) -> bool {
        self.delete.is_some() || self.put.is_some()
    }

    pub fn has_custom_actions(&self) -> bool {
        !self.custom_actions.is_empty()
    }

    /// Custom actions live in the same column as edit and delete
    pub fn show_actions_column(&self) -> bool {
        self.show_actions() || self.has_custom_actions()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAllMethod {
    pub url: String,
    #[serde(default)]
    pub data_path: Option<String>,
    #[serde(default)]
    pub query_params: Vec<QueryParam>,
    #[serde(default)]
    pub display: Option<DisplayConfig>,
    #[serde(default)]
    pub request_headers: Option<RequestHeaders>,
}

impl GetAllMethod {
    pub fn display_fields(&self) -> Result<&[DisplayField], ConfigError> {
        match &self.display {
            Some(display) if !display.fields.is_empty() => Ok(&display.fields),
            _ => Err(ConfigError::MissingDisplay),
        }
    }

    pub fn sort_by(&self) -> Option<&SortBy> {
        self.display.as_ref().and_then(|d| d.sort_by.as_ref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayConfig {
    #[serde(default, rename = "type")]
    pub display_type: Option<String>,
    #[serde(default)]
    pub fields: Vec<DisplayField>,
    #[serde(default)]
    pub sort_by: Option<SortBy>,
}

/// `sortBy` accepts either one identifier or a list of them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SortBy {
    One(String),
    Many(Vec<String>),
}

impl SortBy {
    pub fn identifiers(&self) -> Vec<&str> {
        match self {
            SortBy::One(id) => vec![id.as_str()],
            SortBy::Many(ids) => ids.iter().map(String::as_str).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[default]
    Text,
    Url,
    Image,
    Colorbox,
    Boolean,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayField {
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default, rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub filterable: bool,
    /// Link template, `:<name>` is replaced with the cell value
    #[serde(default)]
    pub url: Option<String>,
}

impl DisplayField {
    pub fn title(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }
}

pub fn filterable_fields(fields: &[DisplayField]) -> Vec<DisplayField> {
    fields.iter().filter(|f| f.filterable).cloned().collect()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryParam {
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub value: Option<String>,
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub default: Option<String>,
    /// `"encode"` makes the value percent-encoded before sending
    #[serde(default, rename = "type")]
    pub param_type: Option<String>,
}

impl QueryParam {
    pub fn initial_value(&self) -> String {
        self.default
            .clone()
            .or_else(|| self.value.clone())
            .unwrap_or_default()
    }
}

/// Query param values may be written as numbers or booleans in the JSON file
fn scalar_as_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    #[default]
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl HttpMethod {
    /// Case-insensitive verb name; anything unknown is `None`
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "get" => Some(HttpMethod::Get),
            "post" => Some(HttpMethod::Post),
            "put" => Some(HttpMethod::Put),
            "patch" => Some(HttpMethod::Patch),
            "delete" => Some(HttpMethod::Delete),
            _ => None,
        }
    }
}

/// `actualMethod` never rejects the descriptor: unknown verbs or non-strings
/// leave the method unset
fn lenient_http_method<'de, D>(deserializer: D) -> Result<Option<HttpMethod>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(name)) => HttpMethod::parse(&name),
        _ => None,
    })
}

/// Create/update method. Only its presence matters for the list view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodConfig {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub data_path: Option<String>,
    #[serde(default)]
    pub request_headers: Option<RequestHeaders>,
    #[serde(default, deserialize_with = "lenient_http_method")]
    pub actual_method: Option<HttpMethod>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteMethod {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub data_path: Option<String>,
    /// Verb actually sent, DELETE when absent
    #[serde(default, deserialize_with = "lenient_http_method")]
    pub actual_method: Option<HttpMethod>,
}

impl DeleteMethod {
    pub fn http_method(&self) -> HttpMethod {
        self.actual_method.unwrap_or(HttpMethod::Delete)
    }

    pub fn url(&self) -> Result<&str, ConfigError> {
        self.url
            .as_deref()
            .filter(|u| !u.trim().is_empty())
            .ok_or(ConfigError::MissingDeleteUrl)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomAction {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient_http_method")]
    pub actual_method: Option<HttpMethod>,
    #[serde(default)]
    pub request_headers: Option<RequestHeaders>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_page() -> PageConfig {
        serde_json::from_value(json!({
            "name": "Employees",
            "id": "employees",
            "requestHeaders": { "X-Page": "1" },
            "methods": {
                "getAll": {
                    "url": "/employees",
                    "dataPath": "data.items",
                    "queryParams": [
                        { "name": "search", "default": "bob", "type": "encode" }
                    ],
                    "display": {
                        "type": "table",
                        "sortBy": ["name", "id"],
                        "fields": [
                            { "name": "id", "label": "ID" },
                            { "name": "name", "label": "Name", "filterable": true },
                            { "name": "color", "type": "colorbox" }
                        ]
                    }
                },
                "delete": { "url": "/employees/:id", "actualMethod": "post" }
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_parse_page_descriptor() {
        let page = sample_page();
        let get_all = page.get_all_method().unwrap();
        assert_eq!(get_all.url, "/employees");
        assert_eq!(get_all.data_path.as_deref(), Some("data.items"));
        assert_eq!(get_all.query_params[0].param_type.as_deref(), Some("encode"));
        assert_eq!(get_all.display_fields().unwrap().len(), 3);
        assert_eq!(get_all.display_fields().unwrap()[2].field_type, FieldType::Colorbox);
        assert_eq!(get_all.sort_by().unwrap().identifiers(), vec!["name", "id"]);
        assert_eq!(
            page.methods.delete.as_ref().unwrap().http_method(),
            HttpMethod::Post
        );
    }

    #[test]
    fn test_actual_method_is_lenient() {
        let delete: DeleteMethod =
            serde_json::from_value(json!({ "url": "/x/:id", "actualMethod": "DELETE" })).unwrap();
        assert_eq!(delete.actual_method, Some(HttpMethod::Delete));

        let delete: DeleteMethod =
            serde_json::from_value(json!({ "url": "/x/:id", "actualMethod": "Post" })).unwrap();
        assert_eq!(delete.http_method(), HttpMethod::Post);

        for unknown in [json!("head"), json!(5), json!(null)] {
            let delete: DeleteMethod =
                serde_json::from_value(json!({ "url": "/x", "actualMethod": unknown })).unwrap();
            assert_eq!(delete.actual_method, None);
            assert_eq!(delete.http_method(), HttpMethod::Delete);
        }

        let action: CustomAction =
            serde_json::from_value(json!({ "name": "Run", "actualMethod": "PATCH" })).unwrap();
        assert_eq!(action.actual_method, Some(HttpMethod::Patch));
    }

    #[test]
    fn test_delete_url() {
        let delete = DeleteMethod { url: Some("/x/:id".into()), ..Default::default() };
        assert_eq!(delete.url(), Ok("/x/:id"));
        assert_eq!(delete.http_method(), HttpMethod::Delete);
        let blank = DeleteMethod { url: Some(" ".into()), ..Default::default() };
        assert_eq!(blank.url(), Err(ConfigError::MissingDeleteUrl));
        assert_eq!(DeleteMethod::default().url(), Err(ConfigError::MissingDeleteUrl));
    }

    #[test]
    fn test_missing_get_all() {
        let page: PageConfig =
            serde_json::from_value(json!({ "name": "Empty", "id": "empty" })).unwrap();
        assert_eq!(page.get_all_method(), Err(ConfigError::MissingGetAll));
        assert_eq!(
            ConfigError::MissingGetAll.to_string(),
            "No GET method found in configuration file"
        );
    }

    #[test]
    fn test_missing_or_empty_display() {
        let no_display = GetAllMethod { url: "/x".into(), ..Default::default() };
        assert_eq!(no_display.display_fields(), Err(ConfigError::MissingDisplay));

        let empty = GetAllMethod {
            url: "/x".into(),
            display: Some(DisplayConfig::default()),
            ..Default::default()
        };
        assert_eq!(empty.display_fields(), Err(ConfigError::MissingDisplay));
    }

    #[test]
    fn test_filterable_fields() {
        let page = sample_page();
        let fields = page.get_all_method().unwrap().display_fields().unwrap();
        let filterable = filterable_fields(fields);
        assert_eq!(filterable.len(), 1);
        assert_eq!(filterable[0].name, "name");
    }

    #[test]
    fn test_request_headers_resolution() {
        let mut page = sample_page();
        assert_eq!(page.list_request_headers().get("X-Page").map(String::as_str), Some("1"));

        let mut own = RequestHeaders::new();
        own.insert("Authorization".into(), "Bearer t".into());
        page.methods.get_all.as_mut().unwrap().request_headers = Some(own);
        let headers = page.list_request_headers();
        assert_eq!(headers.len(), 1);
        assert!(headers.contains_key("Authorization"));

        page.request_headers = None;
        page.methods.get_all.as_mut().unwrap().request_headers = None;
        assert!(page.list_request_headers().is_empty());
    }

    #[test]
    fn test_show_actions() {
        let mut methods = PageMethods::default();
        assert!(!methods.show_actions());
        methods.put = Some(MethodConfig::default());
        assert!(methods.show_actions());
        methods.put = None;
        methods.delete = Some(DeleteMethod::default());
        assert!(methods.show_actions());
    }

    #[test]
    fn test_actions_column_with_custom_actions_only() {
        let mut methods = PageMethods::default();
        assert!(!methods.show_actions_column());
        methods.custom_actions.push(CustomAction::default());
        assert!(!methods.show_actions());
        assert!(methods.show_actions_column());
    }

    #[test]
    fn test_query_param_initial_value() {
        let p = QueryParam {
            name: "q".into(),
            value: Some("v".into()),
            default: Some("d".into()),
            ..Default::default()
        };
        assert_eq!(p.initial_value(), "d");
        let p = QueryParam { name: "q".into(), value: Some("v".into()), ..Default::default() };
        assert_eq!(p.initial_value(), "v");
        let p = QueryParam { name: "q".into(), ..Default::default() };
        assert_eq!(p.initial_value(), "");
    }

    #[test]
    fn test_query_param_numeric_default() {
        let p: QueryParam =
            serde_json::from_value(json!({ "name": "limit", "default": 20 })).unwrap();
        assert_eq!(p.initial_value(), "20");
        let p: QueryParam =
            serde_json::from_value(json!({ "name": "active", "value": true })).unwrap();
        assert_eq!(p.initial_value(), "true");
    }

    #[test]
    fn test_admin_config_page_lookup() {
        let config = AdminConfig {
            name: "Admin".into(),
            pages: vec![sample_page()],
            ..Default::default()
        };
        assert_eq!(config.page("employees").unwrap().name, "Employees");
        assert_eq!(
            config.page("nope"),
            Err(ConfigError::PageNotFound("nope".into()))
        );
        assert_eq!(config.first_page_id().as_deref(), Some("employees"));
    }
}
