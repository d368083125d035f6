//! Sidebar with one entry per page of the loaded descriptor

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuItem {
    id: String,
    label: String,
    description: String,
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let items = move || {
        ctx.config.with(|c| {
            c.as_ref()
                .map(|c| {
                    c.pages
                        .iter()
                        .map(|p| MenuItem {
                            id: p.id.clone(),
                            label: p.name.clone(),
                            description: p.description.clone().unwrap_or_default(),
                        })
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default()
        })
    };

    view! {
        <nav class="sidebar">
            <div class="sidebar__group-title">
                {icon("list")}
                <span>"Pages"</span>
            </div>
            <For
                each=items
                key=|item| item.id.clone()
                children=move |item: MenuItem| {
                    let id = item.id.clone();
                    let id_for_click = item.id.clone();
                    let is_active = move || ctx.active.with(|a| a.as_deref() == Some(id.as_str()));
                    view! {
                        <button
                            class=move || if is_active() {
                                "sidebar__item sidebar__item--active"
                            } else {
                                "sidebar__item"
                            }
                            title=item.description.clone()
                            on:click=move |_| ctx.open_page(&id_for_click)
                        >
                            {icon("table")}
                            <span class="sidebar__label">{item.label.clone()}</span>
                        </button>
                    }
                }
            />
        </nav>
    }
}
