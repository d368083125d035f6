use crate::shared::icons::icon;
use leptos::prelude::*;
use serde_json::Value;

/// Pretty-printed JSON with a copy-to-clipboard button
#[component]
pub fn JsonViewer(
    value: Value,
    #[prop(optional)]
    title: Option<String>,
) -> impl IntoView {
    let (copied, set_copied) = signal(false);
    let json_content = serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string());
    let line_count = json_content.lines().count();
    let json_content_for_copy = json_content.clone();

    // Копирование в буфер обмена
    let handle_copy = move |_| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let clipboard = window.navigator().clipboard();
        let content = json_content_for_copy.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let promise = clipboard.write_text(&content);
            let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
        });
        set_copied.set(true);

        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(2000).await;
            set_copied.set(false);
        });
    };

    view! {
        <div class="json-viewer">
            <div class="modal-header modal-header--compact">
                <h3 class="modal-title">
                    {title.unwrap_or_else(|| "JSON".to_string())}
                </h3>
                <div class="modal-header-actions">
                    <button
                        class="button button--secondary"
                        on:click=handle_copy
                        title="Copy to clipboard"
                    >
                        {move || if copied.get() {
                            view! { <>{icon("check")}" Copied"</> }.into_any()
                        } else {
                            view! { <>{icon("copy")}" Copy"</> }.into_any()
                        }}
                    </button>
                </div>
            </div>

            <div class="json-viewer__body">
                <pre class="json-viewer__content">{json_content}</pre>
            </div>

            <div class="json-viewer__footer">
                "Lines: "
                <strong>{line_count}</strong>
            </div>
        </div>
    }
}
