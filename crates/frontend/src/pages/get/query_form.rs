use contracts::shared::page_config::QueryParam;
use leptos::prelude::*;
use thaw::*;

use super::state::GetViewState;
use crate::shared::icons::icon;

/// Form with one input per configured query param.
///
/// Values live in `GetViewState::query_form`; submitting re-runs the list request.
#[component]
pub fn QueryParamsForm(
    state: RwSignal<GetViewState>,
    on_submit: Callback<()>,
    #[prop(into)] loading: Signal<bool>,
) -> impl IntoView {
    let params = move || state.with(|s| s.query_params.clone());

    view! {
        <form
            class="filter-panel-content query-form"
            on:submit=move |ev| {
                ev.prevent_default();
                on_submit.run(());
            }
        >
            <Flex gap=FlexGap::Small align=FlexAlign::End>
                <For
                    each=params
                    key=|p: &QueryParam| p.name.clone()
                    children=move |param: QueryParam| {
                        let name = param.name.clone();
                        let name_for_input = param.name.clone();
                        let input_id = format!("qp-{}", param.name);
                        let label = param.label.clone().unwrap_or_else(|| param.name.clone());
                        view! {
                            <div class="form__group">
                                <label class="form__label" for=input_id.clone()>{label}</label>
                                <input
                                    id=input_id
                                    class="form__input"
                                    type="text"
                                    prop:value=move || {
                                        state.with(|s| s.query_form.get(&name).unwrap_or_default().to_string())
                                    }
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        state.update(|s| s.query_form.set(&name_for_input, value));
                                    }
                                />
                            </div>
                        }
                    }
                />
                <button
                    type="submit"
                    class="button button--primary"
                    disabled=move || loading.get()
                >
                    {icon("search")}
                    " Submit"
                </button>
            </Flex>
        </form>
    }
}
