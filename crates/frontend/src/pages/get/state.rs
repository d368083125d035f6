use contracts::shared::data_path::extract_data;
use contracts::shared::natural_order::order_by;
use contracts::shared::page_config::{
    filterable_fields, ConfigError, DisplayField, HttpMethod, PageConfig, QueryParam,
    RequestHeaders, SortBy,
};
use contracts::shared::query::{build_request_url, resolve_url, QueryForm};
use contracts::shared::row_filter::filter_rows;
use contracts::shared::url_template::parse_url;
use leptos::prelude::*;
use serde_json::Value;

use crate::shared::generation::Generation;

/// Everything needed to issue the list request and post-process its response
#[derive(Clone, Debug, PartialEq)]
pub struct ListRequest {
    pub url: String,
    pub headers: RequestHeaders,
    pub data_path: Option<String>,
    pub sort_by: Option<SortBy>,
}

/// What `reload` decided
#[derive(Clone, Debug, PartialEq)]
pub enum ReloadPlan {
    /// No page bound yet
    Skip,
    /// The page cannot be listed at all
    Fail(ConfigError),
    /// Issue the request; `display_error` is reported but does not stop loading
    Fetch {
        request: ListRequest,
        display_error: Option<ConfigError>,
    },
}

/// Request for a row action such as delete
#[derive(Clone, Debug, PartialEq)]
pub struct ActionRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: RequestHeaders,
}

/// Delete request for `row`: url placeholders filled from the row, verb from
/// `actualMethod`, headers as for the list request
pub fn delete_request(
    page: &PageConfig,
    row: &Value,
    base_url: Option<&str>,
) -> Result<ActionRequest, ConfigError> {
    let delete = page
        .methods
        .delete
        .as_ref()
        .ok_or(ConfigError::MissingDeleteUrl)?;
    let url = parse_url(delete.url()?, row, delete.data_path.as_deref());

    Ok(ActionRequest {
        method: delete.http_method(),
        url: resolve_url(base_url, &url),
        headers: page.list_request_headers(),
    })
}

/// Where a new filter text came from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterSource {
    /// Typed or cleared by the user, written back to `?filter=`
    Input,
    /// Read from the address bar (mount, popstate), never written back
    Url,
}

#[derive(Clone, Debug, Default)]
pub struct GetViewState {
    pub loading: bool,
    /// Rows after `dataPath` and `sortBy`
    pub data: Vec<Value>,
    pub filtered_data: Vec<Value>,
    pub fields: Vec<DisplayField>,
    pub filterable_fields: Vec<DisplayField>,
    pub query_params: Vec<QueryParam>,
    pub query_form: QueryForm,
    pub filter_text: String,
    /// Ticket of the list request in flight
    request: Generation,
}

impl GetViewState {
    /// Re-read the page descriptor and plan the list request.
    ///
    /// `set_query_form` rebuilds the query form from the configured defaults
    /// (used when a new page is bound).
    pub fn reload(
        &mut self,
        page: Option<&PageConfig>,
        base_url: Option<&str>,
        set_query_form: bool,
    ) -> ReloadPlan {
        let Some(page) = page else {
            return ReloadPlan::Skip;
        };
        let get_all = match page.get_all_method() {
            Ok(m) => m,
            Err(e) => return ReloadPlan::Fail(e),
        };

        let display_error = match get_all.display_fields() {
            Ok(fields) => {
                self.fields = fields.to_vec();
                None
            }
            Err(e) => {
                self.fields = Vec::new();
                Some(e)
            }
        };
        self.filterable_fields = filterable_fields(&self.fields);
        self.query_params = get_all.query_params.clone();

        if set_query_form {
            self.query_form = QueryForm::from_params(&self.query_params);
        }

        match self.list_request(page, base_url) {
            Some(request) => ReloadPlan::Fetch { request, display_error },
            None => ReloadPlan::Fail(ConfigError::MissingGetAll),
        }
    }

    /// Request built from the current query form values
    pub fn list_request(&self, page: &PageConfig, base_url: Option<&str>) -> Option<ListRequest> {
        let get_all = page.get_all_method().ok()?;
        let values = if self.query_params.is_empty() {
            Vec::new()
        } else {
            self.query_form.values(&self.query_params)
        };

        Some(ListRequest {
            url: build_request_url(&resolve_url(base_url, &get_all.url), &values),
            headers: page.list_request_headers(),
            data_path: get_all.data_path.clone(),
            sort_by: get_all.sort_by().cloned(),
        })
    }

    /// Mark a new list request as started; older ones become stale
    pub fn start_loading(&mut self) -> u64 {
        self.loading = true;
        self.request.next()
    }

    /// Response of a successful list request; `false` if it was stale
    pub fn apply_response(&mut self, ticket: u64, response: &Value, request: &ListRequest) -> bool {
        if !self.request.is_current(ticket) {
            return false;
        }
        self.loading = false;
        let rows = extract_data(response, request.data_path.as_deref());
        self.data = match &request.sort_by {
            Some(sort_by) => order_by(rows, sort_by),
            None => rows,
        };
        self.filter_rows();
        true
    }

    /// Failed list request; `false` if it was stale
    pub fn apply_failure(&mut self, ticket: u64) -> bool {
        if !self.request.is_current(ticket) {
            return false;
        }
        self.loading = false;
        true
    }

    /// Apply a new filter text.
    ///
    /// Returns the value to write into `?filter=`: only for user input, and
    /// only when the text actually changed.
    pub fn set_filter_text(&mut self, text: String, source: FilterSource) -> Option<String> {
        if text == self.filter_text {
            return None;
        }
        self.filter_text = text;
        self.filter_rows();
        match source {
            FilterSource::Input => Some(self.filter_text.clone()),
            FilterSource::Url => None,
        }
    }

    pub fn filter_rows(&mut self) {
        self.filtered_data = filter_rows(&self.data, &self.filterable_fields, &self.filter_text);
    }
}

pub fn create_state() -> RwSignal<GetViewState> {
    RwSignal::new(GetViewState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn page() -> PageConfig {
        serde_json::from_value(json!({
            "name": "Users",
            "id": "users",
            "requestHeaders": { "X-Token": "t" },
            "methods": {
                "getAll": {
                    "url": "/teams/:team/users",
                    "dataPath": "result",
                    "queryParams": [
                        { "name": "team", "default": "core" },
                        { "name": "q", "type": "encode" }
                    ],
                    "display": {
                        "sortBy": "name",
                        "fields": [
                            { "name": "id" },
                            { "name": "name", "filterable": true }
                        ]
                    }
                }
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_reload_without_page_is_skipped() {
        let mut state = GetViewState::default();
        assert_eq!(state.reload(None, None, true), ReloadPlan::Skip);
    }

    #[test]
    fn test_reload_without_get_all_fails() {
        let mut state = GetViewState::default();
        let empty = PageConfig { name: "x".into(), id: "x".into(), ..Default::default() };
        assert_eq!(
            state.reload(Some(&empty), None, true),
            ReloadPlan::Fail(ConfigError::MissingGetAll)
        );
    }

    #[test]
    fn test_reload_builds_request() {
        let mut state = GetViewState::default();
        let plan = state.reload(Some(&page()), Some("https://api.test"), true);
        let ReloadPlan::Fetch { request, display_error } = plan else {
            panic!("expected fetch");
        };
        assert!(display_error.is_none());
        assert_eq!(request.url, "https://api.test/teams/core/users?q=");
        assert_eq!(request.headers.get("X-Token").map(String::as_str), Some("t"));
        assert_eq!(state.fields.len(), 2);
        assert_eq!(state.filterable_fields.len(), 1);
    }

    #[test]
    fn test_reload_keeps_form_unless_asked() {
        let mut state = GetViewState::default();
        state.reload(Some(&page()), None, true);
        state.query_form.set("team", "ops");

        let ReloadPlan::Fetch { request, .. } = state.reload(Some(&page()), None, false) else {
            panic!("expected fetch");
        };
        assert_eq!(request.url, "/teams/ops/users?q=");

        let ReloadPlan::Fetch { request, .. } = state.reload(Some(&page()), None, true) else {
            panic!("expected fetch");
        };
        assert_eq!(request.url, "/teams/core/users?q=");
    }

    #[test]
    fn test_missing_display_still_fetches() {
        let mut page = page();
        page.methods.get_all.as_mut().unwrap().display = None;
        let mut state = GetViewState::default();
        match state.reload(Some(&page), None, true) {
            ReloadPlan::Fetch { display_error, .. } => {
                assert_eq!(display_error, Some(ConfigError::MissingDisplay));
            }
            other => panic!("unexpected plan: {:?}", other),
        }
        assert!(state.fields.is_empty());
    }

    #[test]
    fn test_apply_response_sorts_and_filters() {
        let mut state = GetViewState::default();
        let ReloadPlan::Fetch { request, .. } = state.reload(Some(&page()), None, true) else {
            panic!("expected fetch");
        };
        let ticket = state.start_loading();
        state.set_filter_text("an".into(), FilterSource::Input);
        let response = json!({ "result": [
            { "id": 1, "name": "Zane" },
            { "id": 2, "name": "Anna" },
            { "id": 3, "name": "Bob" }
        ]});
        assert!(state.apply_response(ticket, &response, &request));

        assert!(!state.loading);
        let names: Vec<_> = state.data.iter().map(|r| r["name"].as_str().unwrap()).collect();
        assert_eq!(names, vec!["Anna", "Bob", "Zane"]);
        let filtered: Vec<_> = state
            .filtered_data
            .iter()
            .map(|r| r["name"].as_str().unwrap())
            .collect();
        assert_eq!(filtered, vec!["Anna", "Zane"]);

        state.set_filter_text(String::new(), FilterSource::Input);
        assert_eq!(state.filtered_data.len(), 3);
    }

    #[test]
    fn test_delete_request() {
        let mut page = page();
        page.methods.delete = Some(
            serde_json::from_value(json!({ "url": "/users/:id", "actualMethod": "put" })).unwrap(),
        );
        let request = delete_request(&page, &json!({ "id": 5 }), Some("https://api.test")).unwrap();
        assert_eq!(request.url, "https://api.test/users/5");
        assert_eq!(request.method, HttpMethod::Put);
        assert_eq!(request.headers.get("X-Token").map(String::as_str), Some("t"));
    }

    #[test]
    fn test_delete_request_without_url() {
        let mut page = page();
        assert_eq!(
            delete_request(&page, &json!({}), None),
            Err(ConfigError::MissingDeleteUrl)
        );
        page.methods.delete = Some(Default::default());
        assert_eq!(
            delete_request(&page, &json!({}), None),
            Err(ConfigError::MissingDeleteUrl)
        );
    }

    #[test]
    fn test_failure_stops_loading() {
        let mut state = GetViewState::default();
        let ticket = state.start_loading();
        assert!(state.apply_failure(ticket));
        assert!(!state.loading);
    }

    #[test]
    fn test_stale_response_is_ignored() {
        let mut state = GetViewState::default();
        let ReloadPlan::Fetch { request, .. } = state.reload(Some(&page()), None, true) else {
            panic!("expected fetch");
        };
        let page_a = state.start_loading();
        let page_b = state.start_loading();

        let late = json!({ "result": [{ "id": 1, "name": "From A" }] });
        assert!(!state.apply_response(page_a, &late, &request));
        assert!(state.loading);
        assert!(state.data.is_empty());
        assert!(!state.apply_failure(page_a));
        assert!(state.loading);

        let fresh = json!({ "result": [{ "id": 2, "name": "From B" }] });
        assert!(state.apply_response(page_b, &fresh, &request));
        assert!(!state.loading);
        assert_eq!(state.data[0]["name"], "From B");
    }

    #[test]
    fn test_filter_from_url_is_not_written_back() {
        let mut state = GetViewState::default();
        assert_eq!(state.set_filter_text("bob".into(), FilterSource::Url), None);
        assert_eq!(state.filter_text, "bob");

        assert_eq!(state.set_filter_text("bob".into(), FilterSource::Input), None);
        assert_eq!(
            state.set_filter_text("ann".into(), FilterSource::Input).as_deref(),
            Some("ann")
        );
        assert_eq!(
            state.set_filter_text(String::new(), FilterSource::Input).as_deref(),
            Some("")
        );
    }
}
