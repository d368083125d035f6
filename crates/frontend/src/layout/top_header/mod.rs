//! TopHeader component - application top navigation bar.
//!
//! Contains the sidebar toggle and the panel title from the descriptor.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };

    let is_sidebar_visible = move || ctx.left_open.get();
    let title = move || {
        ctx.config
            .with(|c| c.as_ref().map(|c| c.name.clone()))
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| "Admin panel".to_string())
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">{title}</span>
            </div>
        </div>
    }
}
