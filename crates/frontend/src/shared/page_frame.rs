//! PageFrame: корневая обёртка страницы в центральной области.

use super::page_standard::{is_known_category, is_valid_page_id, page_class};
use leptos::prelude::*;

/// Root wrapper carrying `id` and `data-page-category` of a page.
#[component]
pub fn PageFrame(
    /// `{view}--{category}`, e.g. `"get_view--list"`
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants
    category: &'static str,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    if !is_valid_page_id(page_id) || !is_known_category(category) {
        log::warn!("PageFrame: unexpected page metadata {page_id} / {category}");
    }

    let base_class = page_class(category);
    let full_class = if class.is_empty() {
        base_class.to_string()
    } else {
        format!("{base_class} {class}")
    };

    view! {
        <div id=page_id class=full_class data-page-category=category>
            {children()}
        </div>
    }
}
