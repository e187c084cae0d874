use dioxus::prelude::*;
use crate::state::{NotificationType, UI_STATE};

#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div { class: "spinner-wrap",
            div { class: "spinner" }
        }
    }
}

#[component]
pub fn Card(children: Element, #[props(default = "".to_string())] class: String) -> Element {
    rsx! {
        div { class: "card {class}",
            {children}
        }
    }
}

#[component]
pub fn Notification() -> Element {
    let notification = UI_STATE.read().notification.clone();

    // Auto-dismiss notification after 4 seconds
    {
        let has_notification = notification.is_some();
        use_effect(move || {
            if has_notification {
                spawn(async move {
                    #[cfg(target_arch = "wasm32")]
                    {
                        gloo_timers::future::TimeoutFuture::new(4000).await;
                    }
                    #[cfg(not(target_arch = "wasm32"))]
                    {
                        tokio::time::sleep(std::time::Duration::from_millis(4000)).await;
                    }
                    crate::state::clear_notification();
                });
            }
        });
    }

    if let Some(notif) = notification {
        let color_class = notif.notification_type.color_class();
        let icon = match notif.notification_type {
            NotificationType::Success => "\u{2705}",
            NotificationType::Error => "\u{274C}",
            NotificationType::Info => "\u{2139}",
        };
        rsx! {
            div { class: "notification {color_class}",
                span { class: "notification-icon", "{icon}" }
                p { class: "notification-message", "{notif.message}" }
                button {
                    class: "notification-close",
                    onclick: move |_| {
                        crate::state::clear_notification();
                    },
                    "\u{2715}"
                }
            }
        }
    } else {
        rsx! {}
    }
}
