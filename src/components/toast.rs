use crate::error::AppError;
use crate::icons::{CircleAlert, CircleCheck, Info};
use dioxus::prelude::*;
use futures_util::StreamExt;
use std::time::Duration;

const VISIBLE_FOR: Duration = Duration::from_millis(3000);
const CLOSE_ANIMATION: Duration = Duration::from_millis(300);

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ToastType {
    Info,
    Success,
    Error,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Toast {
    pub id: usize,
    pub title: String,
    pub description: String,
    pub type_: ToastType,
    pub is_closing: bool,
}

#[derive(Clone, PartialEq, Debug, Default)]
struct ToastQueue {
    issued: usize,
    items: Vec<Toast>,
}

impl ToastQueue {
    fn push(&mut self, title: &str, description: &str, type_: ToastType) -> usize {
        let id = self.issued;
        self.issued += 1;
        self.items.push(Toast {
            id,
            title: title.to_string(),
            description: description.to_string(),
            type_,
            is_closing: false,
        });
        id
    }

    fn start_closing(&mut self, id: usize) {
        if let Some(toast) = self.items.iter_mut().find(|t| t.id == id) {
            toast.is_closing = true;
        }
    }

    fn remove(&mut self, id: usize) {
        self.items.retain(|t| t.id != id);
    }
}

/// Handle to the notice stack rendered by [`ToastProvider`].
///
/// Dismissal timers run on the provider's coroutine, so a toast still
/// expires after the component that raised it has unmounted.
#[derive(Clone, Copy)]
pub struct ToastManager {
    queue: Signal<ToastQueue>,
    expiry: Coroutine<usize>,
}

impl ToastManager {
    pub fn show(&mut self, title: &str, description: &str, type_: ToastType) {
        let id = self.queue.write().push(title, description, type_);
        self.expiry.send(id);
    }

    pub fn show_error(&mut self, err: &AppError) {
        self.show(err.title(), &err.user_friendly_message(), ToastType::Error);
    }

    /// Toasts currently on screen, oldest first.
    pub fn visible(&self) -> Vec<Toast> {
        self.queue.read().items.clone()
    }
}

pub fn use_toast() -> ToastManager {
    use_context::<ToastManager>()
}

#[component]
pub fn ToastProvider(children: Element) -> Element {
    let queue = use_signal(ToastQueue::default);

    let expiry = use_coroutine(move |mut rx: UnboundedReceiver<usize>| async move {
        while let Some(id) = rx.next().await {
            let mut queue = queue;
            spawn(async move {
                crate::services::sleep(VISIBLE_FOR).await;
                queue.write().start_closing(id);
                crate::services::sleep(CLOSE_ANIMATION).await;
                queue.write().remove(id);
            });
        }
    });

    let manager = use_context_provider(|| ToastManager { queue, expiry });

    rsx! {
        div { class: "contents",
            {children}

            div { class: "toast-stack",
                for toast in manager.visible() {
                    ToastItem { key: "{toast.id}", toast }
                }
            }
        }
    }
}

#[component]
fn ToastItem(toast: Toast) -> Element {
    let icon = match toast.type_ {
        ToastType::Info => rsx! {
            Info { size: 18, class: Some("text-info".to_string()) }
        },
        ToastType::Success => rsx! {
            CircleCheck { size: 18, class: Some("text-success".to_string()) }
        },
        ToastType::Error => rsx! {
            CircleAlert { size: 18, class: Some("text-destructive".to_string()) }
        },
    };

    rsx! {
        div {
            class: "toast",
            class: if toast.type_ == ToastType::Error { "toast-destructive" },
            class: if toast.is_closing { "toast-closing" } else { "toast-open" },
            {icon}
            div { class: "toast-body",
                span { class: "toast-title", "{toast.title}" }
                span { class: "toast-description", "{toast.description}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_ids_are_unique_and_ordered() {
        let mut queue = ToastQueue::default();
        let first = queue.push("a", "first", ToastType::Info);
        let second = queue.push("b", "second", ToastType::Error);
        assert_ne!(first, second);
        assert_eq!(
            queue.items.iter().map(|t| t.title.as_str()).collect::<Vec<_>>(),
            vec!["a", "b"]
        );
    }

    #[test]
    fn test_queue_close_then_remove() {
        let mut queue = ToastQueue::default();
        let id = queue.push("title", "body", ToastType::Success);
        queue.start_closing(id);
        assert!(queue.items[0].is_closing);
        queue.remove(id);
        assert!(queue.items.is_empty());
        queue.start_closing(id);
    }
}
