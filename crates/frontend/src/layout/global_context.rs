use contracts::shared::page_config::{AdminConfig, PageConfig};
use contracts::shared::ui_state::StateChange;
use leptos::prelude::Effect;
use leptos::prelude::*;

use crate::shared::query_string::{self, QueryParams};

const PAGE_PARAM: &str = "page";
const FILTER_PARAM: &str = "filter";

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// Descriptor loaded from `/config.json`
    pub config: RwSignal<Option<AdminConfig>>,
    pub config_error: RwSignal<Option<String>>,
    pub active: RwSignal<Option<String>>,
    /// Last transition emitted by the list view of the active page
    pub view_state: RwSignal<StateChange>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            config: RwSignal::new(None),
            config_error: RwSignal::new(None),
            active: RwSignal::new(None),
            view_state: RwSignal::new(StateChange::default()),
            left_open: RwSignal::new(true),
        }
    }

    pub fn set_config(&self, config: AdminConfig) {
        let requested = self.active.get_untracked();
        let active = requested
            .filter(|id| config.page(id).is_ok())
            .or_else(|| config.first_page_id());
        self.config.set(Some(config));
        self.active.set(active);
    }

    pub fn active_page(&self) -> Option<PageConfig> {
        let active = self.active.get()?;
        self.config
            .with(|c| c.as_ref().and_then(|c| c.page(&active).ok().cloned()))
    }

    pub fn open_page(&self, id: &str) {
        log::debug!("open_page: id='{}'", id);
        let active = self.active.get_untracked();
        query_string::replace_search(&switch_search(
            query_string::current_params(),
            active.as_deref(),
            id,
        ));
        self.view_state.set(StateChange::back_to_list());
        if active.as_deref() != Some(id) {
            self.active.set(Some(id.to_string()));
        }
    }

    /// Restore the active page from `?page=` and keep the URL in sync afterwards
    pub fn init_router_integration(&self) {
        if let Some(page_id) = query_string::get_param(PAGE_PARAM) {
            self.active.set(Some(page_id));
        }

        let this = *self;
        Effect::new(move |_| {
            if let Some(active_key) = this.active.get() {
                query_string::replace_param(PAGE_PARAM, &active_key);
            }
        });
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Query string after switching from `active` to `target`
///
/// The filter belongs to one page, so a switch drops it.
fn switch_search(params: QueryParams, active: Option<&str>, target: &str) -> QueryParams {
    if active == Some(target) {
        return params;
    }
    let params = query_string::with_param(params, FILTER_PARAM, "");
    query_string::with_param(params, PAGE_PARAM, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::query_string::{parse_search, render_search};

    #[test]
    fn test_switch_page_clears_filter() {
        let params = parse_search("?filter=ann&page=users&q=1");
        let switched = switch_search(params, Some("users"), "posts");
        assert_eq!(render_search(&switched), "?page=posts&q=1");
    }

    #[test]
    fn test_same_page_keeps_filter() {
        let params = parse_search("?filter=ann&page=users");
        let kept = switch_search(params.clone(), Some("users"), "users");
        assert_eq!(kept, params);
    }

    #[test]
    fn test_first_page_open_sets_page() {
        let switched = switch_search(QueryParams::new(), None, "users");
        assert_eq!(render_search(&switched), "?page=users");
    }
}
