use contracts::shared::page_config::PageConfig;
use contracts::shared::ui_state::{StateChange, ViewState};
use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;
use crate::shared::json_viewer::JsonViewer;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;

/// Shown by the shell for every transition other than `get`: names the
/// requested screen and the row it was requested for.
#[component]
pub fn StatePanel(
    change: StateChange,
    page: Option<PageConfig>,
    on_back: Callback<()>,
) -> impl IntoView {
    let page_name = page.as_ref().map(|p| p.name.clone()).unwrap_or_default();
    let custom_actions: Vec<String> = match change.state {
        ViewState::CustomActions => page
            .map(|p| p.methods.custom_actions.iter().map(|a| a.name.clone()).collect())
            .unwrap_or_default(),
        _ => Vec::new(),
    };

    view! {
        <PageFrame page_id="get_view--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{format!("{}: {}", page_name, change.state.title())}</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_back.run(())
                    >
                        {icon("arrow-left")}
                        " Back to list"
                    </Button>
                </div>
            </div>
            <div class="page__content">
                {(!custom_actions.is_empty()).then(|| view! {
                    <ul class="state-panel__actions">
                        {custom_actions.into_iter().map(|name| view! { <li>{name}</li> }).collect_view()}
                    </ul>
                })}
                {change.data.map(|row| view! { <JsonViewer value=row title="Row".to_string() /> })}
            </div>
        </PageFrame>
    }
}
