mod field_cell;
mod query_form;
mod state;

use contracts::shared::page_config::PageConfig;
use contracts::shared::ui_state::StateChange;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;
use thaw::*;

use crate::layout::notification_service::use_notifications;
use crate::shared::components::debounced_input::DebouncedInput;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::query_string;
use crate::shared::requests::use_requests;
use field_cell::FieldCell;
use query_form::QueryParamsForm;
use state::{create_state, delete_request, FilterSource, ListRequest, ReloadPlan};

const TABLE_ID: &str = "get-view-table";
const FILTER_PARAM: &str = "filter";
const FILTER_DEBOUNCE_MS: u32 = 350;
const DELETE_CONFIRM: &str = "Are you sure you want to delete this item?";

/// List view of a configured page.
///
/// Fetches `methods.getAll`, applies `dataPath` and `sortBy`, filters rows on
/// the client and reports row actions to the shell through `on_state_change`.
#[component]
pub fn GetView(
    #[prop(into)] page: Signal<Option<PageConfig>>,
    #[prop(into)] base_url: Signal<Option<String>>,
    on_state_change: Callback<StateChange>,
) -> impl IntoView {
    let state = create_state();
    let requests = use_requests();
    let notifications = use_notifications();

    let run_request = move |request: ListRequest| {
        let ticket = state.try_update(|s| s.start_loading()).unwrap_or_default();
        spawn_local(async move {
            match requests.get(&request.url, &request.headers).await {
                Ok(response) => {
                    let applied = state
                        .try_update(|s| s.apply_response(ticket, &response, &request))
                        .unwrap_or(false);
                    if applied {
                        log::debug!(
                            "Got data after dataPath: {} rows",
                            state.with_untracked(|s| s.data.len())
                        );
                    } else {
                        log::debug!("Dropped stale response of {}", request.url);
                    }
                }
                Err(e) => {
                    if state.try_update(|s| s.apply_failure(ticket)).unwrap_or(false) {
                        notifications.error("Error", &e);
                    }
                }
            }
        });
    };

    let reload = move |set_query_form: bool| {
        let page_config = page.get_untracked();
        let base = base_url.get_untracked();
        let mut plan = ReloadPlan::Skip;
        state.update(|s| plan = s.reload(page_config.as_ref(), base.as_deref(), set_query_form));

        match plan {
            ReloadPlan::Skip => {}
            ReloadPlan::Fail(e) => notifications.error("Error", &e.to_string()),
            ReloadPlan::Fetch { request, display_error } => {
                if let Some(e) = display_error {
                    notifications.error("Error", &e.to_string());
                }
                run_request(request);
            }
        }
    };

    // Re-read query form values and fetch again
    let get_results = move || {
        let Some(page_config) = page.get_untracked() else {
            return;
        };
        let base = base_url.get_untracked();
        if let Some(request) = state.with_untracked(|s| s.list_request(&page_config, base.as_deref())) {
            run_request(request);
        }
    };

    let apply_filter_text = move |text: String, source: FilterSource| {
        let write_back = state
            .try_update(|s| s.set_filter_text(text, source))
            .flatten();
        if let Some(value) = write_back {
            query_string::replace_param(FILTER_PARAM, &value);
        }
    };

    let sync_filter_from_url = move || {
        let from_url = query_string::get_param(FILTER_PARAM).unwrap_or_default();
        apply_filter_text(from_url, FilterSource::Url);
    };
    // Новая страница: заново строим форму параметров и загружаем данные
    Effect::new(move |_| {
        page.track();
        sync_filter_from_url();
        reload(true);
    });

    let popstate_handle = window_event_listener(leptos::ev::popstate, move |_| sync_filter_from_url());
    on_cleanup(move || popstate_handle.remove());

    let delete_row = move |row: Value| {
        let confirmed = web_sys::window()
            .map(|w| w.confirm_with_message(DELETE_CONFIRM).unwrap_or(false))
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        let Some(page_config) = page.get_untracked() else {
            return;
        };
        let base = base_url.get_untracked();
        let request = match delete_request(&page_config, &row, base.as_deref()) {
            Ok(r) => r,
            Err(e) => {
                notifications.error("Error", &e.to_string());
                return;
            }
        };
        log::debug!("Delete url {}", request.url);

        spawn_local(async move {
            match requests.send(request.method, &request.url, &request.headers).await {
                Ok(_) => {
                    notifications.success("Success", "Successfully deleted item");
                    get_results();
                }
                Err(e) => notifications.error("Error", &e),
            }
        });
    };

    let loading = Signal::derive(move || state.with(|s| s.loading));
    let methods = Memo::new(move |_| {
        page.with(|p| p.as_ref().map(|p| p.methods.clone()).unwrap_or_default())
    });
    let title = move || page.with(|p| p.as_ref().map(|p| p.name.clone()).unwrap_or_default());
    let description = move || page.with(|p| p.as_ref().and_then(|p| p.description.clone()));
    let has_filter = move || state.with(|s| !s.filterable_fields.is_empty());
    let has_query_params = move || state.with(|s| !s.query_params.is_empty());

    view! {
        <PageFrame page_id="get_view--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{title}</h1>
                    <Badge>
                        {move || state.with(|s| s.filtered_data.len().to_string())}
                    </Badge>
                    {move || description().map(|d| view! { <span class="page__subtitle">{d}</span> })}
                </div>
                <div class="page__header-right">
                    <Show when=move || methods.with(|m| m.post.is_some())>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| on_state_change.run(StateChange::new_item())
                        >
                            {icon("plus")}
                            " New"
                        </Button>
                    </Show>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| get_results()
                        disabled=loading
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <Show when=move || has_filter() || has_query_params()>
                    <div class="filter-panel">
                        <Show when=has_filter>
                            <div class="filter-panel-header">
                                <div class="filter-panel-header__left">
                                    {icon("filter")}
                                    <DebouncedInput
                                        value=Signal::derive(move || state.with(|s| s.filter_text.clone()))
                                        on_change=Callback::new(move |text: String| apply_filter_text(text, FilterSource::Input))
                                        delay_ms=FILTER_DEBOUNCE_MS
                                        placeholder="Filter..."
                                    />
                                </div>
                            </div>
                        </Show>
                        <Show when=has_query_params>
                            <QueryParamsForm
                                state=state
                                on_submit=Callback::new(move |_| get_results())
                                loading=loading
                            />
                        </Show>
                    </div>
                </Show>

                <Show when=move || loading.get()>
                    <div class="page__loading">
                        <Spinner />
                    </div>
                </Show>

                <div class="table-wrapper">
                    <Table attr:id=TABLE_ID attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                {move || {
                                    state
                                        .with(|s| s.fields.clone())
                                        .into_iter()
                                        .map(|field| view! {
                                            <TableHeaderCell resizable=false min_width=100.0>
                                                {field.title().to_string()}
                                            </TableHeaderCell>
                                        })
                                        .collect_view()
                                }}
                                <Show when=move || methods.with(|m| m.show_actions_column())>
                                    <TableHeaderCell resizable=false min_width=90.0>
                                        "Actions"
                                    </TableHeaderCell>
                                </Show>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            {move || {
                                let (fields, rows) = state.with(|s| (s.fields.clone(), s.filtered_data.clone()));
                                let methods = methods.get();
                                let show_actions = methods.show_actions_column();
                                let can_edit = methods.put.is_some();
                                let can_delete = methods.delete.is_some();
                                let has_custom = methods.has_custom_actions();

                                rows.into_iter()
                                    .map(|row| {
                                        let cells = fields
                                            .iter()
                                            .map(|field| view! { <FieldCell field=field.clone() row=row.clone() /> })
                                            .collect_view();
                                        let row_for_edit = row.clone();
                                        let row_for_custom = row.clone();
                                        let row_for_delete = row.clone();

                                        view! {
                                            <TableRow>
                                                {cells}
                                                {show_actions.then(|| view! {
                                                    <TableCell>
                                                        <div class="table__actions">
                                                            {can_edit.then(|| view! {
                                                                <Button
                                                                    appearance=ButtonAppearance::Subtle
                                                                    on_click=move |_| on_state_change.run(StateChange::edit(row_for_edit.clone()))
                                                                    attr:title="Edit"
                                                                >
                                                                    {icon("edit")}
                                                                </Button>
                                                            })}
                                                            {has_custom.then(|| view! {
                                                                <Button
                                                                    appearance=ButtonAppearance::Subtle
                                                                    on_click=move |_| on_state_change.run(StateChange::custom_actions(row_for_custom.clone()))
                                                                    attr:title="Custom actions"
                                                                >
                                                                    {icon("more")}
                                                                </Button>
                                                            })}
                                                            {can_delete.then(|| view! {
                                                                <Button
                                                                    appearance=ButtonAppearance::Subtle
                                                                    on_click=move |_| delete_row(row_for_delete.clone())
                                                                    attr:title="Delete"
                                                                >
                                                                    {icon("delete")}
                                                                </Button>
                                                            })}
                                                        </div>
                                                    </TableCell>
                                                })}
                                            </TableRow>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </TableBody>
                    </Table>

                    <Show when=move || !loading.get() && state.with(|s| s.filtered_data.is_empty())>
                        <div class="table__empty">
                            {move || if state.with(|s| s.filter_text.is_empty()) {
                                "No items"
                            } else {
                                "No items match the filter"
                            }}
                        </div>
                    </Show>
                </div>
            </div>
        </PageFrame>
    }
}
