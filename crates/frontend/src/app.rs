use crate::layout::global_context::AppGlobalContext;
use crate::layout::NotificationService;
use crate::routes::routes::AppRoutes;
use crate::shared::requests::RequestsService;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    // Collaborators of the generated pages
    provide_context(RequestsService::new());
    provide_context(NotificationService::new());

    view! {
        <AppRoutes />
    }
}
