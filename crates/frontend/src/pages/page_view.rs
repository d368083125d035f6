use contracts::shared::ui_state::{StateChange, ViewState};
use leptos::prelude::*;

use super::get::GetView;
use super::state_panel::StatePanel;
use crate::layout::global_context::AppGlobalContext;

/// Hosts the active page: the list view, or the panel for a requested transition
#[component]
pub fn PageView() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let page = Memo::new(move |_| ctx.active_page());
    let base_url = Memo::new(move |_| ctx.config.with(|c| c.as_ref().and_then(|c| c.base_url.clone())));
    let on_state_change = Callback::new(move |change: StateChange| {
        log::debug!("state changed: {:?}", change.state);
        ctx.view_state.set(change);
    });

    view! {
        <Show
            when=move || ctx.view_state.with(|c| c.state == ViewState::Get)
            fallback=move || {
                view! {
                    <StatePanel
                        change=ctx.view_state.get_untracked()
                        page=page.get_untracked()
                        on_back=Callback::new(move |_| on_state_change.run(StateChange::back_to_list()))
                    />
                }
            }
        >
            <GetView page=page base_url=base_url on_state_change=on_state_change />
        </Show>
    }
}
