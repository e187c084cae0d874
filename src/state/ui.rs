use dioxus::prelude::*;

/// Global UI state
pub static UI_STATE: GlobalSignal<UiState> = Signal::global(UiState::default);

#[derive(Clone, Default)]
pub struct UiState {
    pub notification: Option<Notification>,
}

#[derive(Clone)]
pub struct Notification {
    pub message: String,
    pub notification_type: NotificationType,
}

#[derive(Clone, PartialEq)]
pub enum NotificationType {
    Success,
    Error,
    Info,
}

impl NotificationType {
    pub fn color_class(&self) -> &str {
        match self {
            NotificationType::Success => "notification-success",
            NotificationType::Error => "notification-error",
            NotificationType::Info => "notification-info",
        }
    }
}

pub fn show_notification(message: &str, notification_type: NotificationType) {
    UI_STATE.write().notification = Some(Notification {
        message: message.to_string(),
        notification_type,
    });
}

pub fn clear_notification() {
    UI_STATE.write().notification = None;
}
