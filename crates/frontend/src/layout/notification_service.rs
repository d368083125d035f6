use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::icons::icon;

/// Через сколько миллисекунд уведомление исчезает само
const AUTO_DISMISS_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    fn class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "toast toast--success",
            NotificationKind::Error => "toast toast--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

/// Сервис всплывающих уведомлений (toast), доступен через context
#[derive(Clone, Copy)]
pub struct NotificationService {
    items: RwSignal<Vec<Notification>>,
    next_id: StoredValue<u64>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(1),
        }
    }

    pub fn success(&self, title: &str, message: &str) {
        self.push(NotificationKind::Success, title, message);
    }

    pub fn error(&self, title: &str, message: &str) {
        log::error!("{}: {}", title, message);
        self.push(NotificationKind::Error, title, message);
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|n| n.id != id));
    }

    fn push(&self, kind: NotificationKind, title: &str, message: &str) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.items.update(|items| {
            items.push(Notification {
                id,
                kind,
                title: title.to_string(),
                message: message.to_string(),
            })
        });

        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            this.dismiss(id);
        });
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided in context")
}

/// Стек уведомлений в правом верхнем углу
#[component]
pub fn Notifications() -> impl IntoView {
    let service = use_notifications();

    view! {
        <div class="toast-stack">
            <For
                each=move || service.items.get()
                key=|n| n.id
                children=move |n| {
                    let id = n.id;
                    view! {
                        <div class=n.kind.class() role="alert">
                            <div class="toast__body">
                                <div class="toast__title">{n.title.clone()}</div>
                                <div class="toast__message">{n.message.clone()}</div>
                            </div>
                            <button
                                class="toast__close"
                                title="Close"
                                on:click=move |_| service.dismiss(id)
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
