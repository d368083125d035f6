//! Текстовое поле с debounce и кнопкой очистки
//!
//! ```ignore
//! <DebouncedInput
//!     value=Signal::derive(move || filter_text.get())
//!     on_change=Callback::new(move |text| apply_filter(text))
//!     delay_ms=350
//! />
//! ```

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::generation::Generation;
use crate::shared::icons::icon;

/// Input whose `on_change` fires `delay_ms` after the last keystroke.
///
/// Each keystroke takes a new [`Generation`] ticket; a pending timer only
/// fires if its ticket is still current.
#[component]
pub fn DebouncedInput(
    /// Externally applied value (e.g. restored from the URL)
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    #[prop(default = 350)]
    delay_ms: u32,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Filter...".to_string()
    } else {
        placeholder
    };

    let input_value = RwSignal::new(value.get_untracked());
    let generation = StoredValue::new(Generation::default());

    // Внешние изменения (например, из URL) переносим в поле ввода
    Effect::new(move |_| {
        let external = value.get();
        if input_value.get_untracked() != external {
            input_value.set(external);
        }
    });

    let handle_input = move |new_value: String| {
        input_value.set(new_value.clone());
        let ticket = generation.try_update_value(|g| g.next()).unwrap_or_default();

        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            if generation.with_value(|g| g.is_current(ticket)) {
                on_change.run(new_value);
            }
        });
    };

    let clear = move |_| {
        generation.update_value(|g| g.cancel());
        input_value.set(String::new());
        on_change.run(String::new());
    };

    let is_active = move || !value.get().is_empty();

    view! {
        <div class="debounced-input">
            <input
                type="text"
                class=move || if is_active() {
                    "debounced-input__field debounced-input__field--active"
                } else {
                    "debounced-input__field"
                }
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="debounced-input__clear" title="Clear" on:click=clear>
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}
