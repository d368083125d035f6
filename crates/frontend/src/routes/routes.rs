use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::notification_service::use_notifications;
use crate::layout::Shell;
use crate::pages::page_view::PageView;
use crate::shared::config_loader::fetch_admin_config;
use crate::shared::requests::use_requests;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <PageView /> }.into_any()
        />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let requests = use_requests();
    let notifications = use_notifications();

    spawn_local(async move {
        match fetch_admin_config(requests).await {
            Ok(config) => {
                log::info!("Loaded configuration with {} pages", config.pages.len());
                ctx.set_config(config);
            }
            Err(e) => {
                notifications.error("Error", &e);
                ctx.config_error.set(Some(e));
            }
        }
    });

    view! {
        <Show
            when=move || ctx.config_error.get().is_none()
            fallback=move || view! {
                <div class="alert alert--error">
                    "Could not load configuration: "
                    {move || ctx.config_error.get().unwrap_or_default()}
                </div>
            }
        >
            <MainLayout />
        </Show>
    }
}
