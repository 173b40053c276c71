use std::time::Duration;

use api::ApiError;
use dioxus::prelude::*;

const NOTIFICATIONS_CSS: Asset = asset!("/assets/styling/notifications.css");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
    Info,
}

impl NoticeLevel {
    fn class(&self) -> &'static str {
        match self {
            NoticeLevel::Success => "notification success",
            NoticeLevel::Error => "notification error",
            NoticeLevel::Info => "notification info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
}

/// Toasts currently on screen, oldest first.
#[derive(Clone, Debug)]
pub struct Notifications {
    pub entries: Vec<Notice>,
    pub timeout: Duration,
    next_id: u64,
}

impl Default for Notifications {
    fn default() -> Self {
        Self::with_timeout(Duration::from_secs(5))
    }
}

impl Notifications {
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            entries: Vec::new(),
            timeout,
            next_id: 0,
        }
    }

    pub fn push(&mut self, level: NoticeLevel, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Notice {
            id,
            level,
            message: message.into(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|n| n.id != id);
    }
}

pub fn use_notifications() -> Signal<Notifications> {
    use_context::<Signal<Notifications>>()
}

/// Show a toast and schedule its removal.
pub fn notify(notices: &mut Signal<Notifications>, level: NoticeLevel, message: impl Into<String>) {
    let message = message.into();
    match level {
        NoticeLevel::Error => tracing::warn!("{message}"),
        _ => tracing::debug!("{message}"),
    }
    let id = notices.write().push(level, message);
    let timeout = notices.peek().timeout;
    let mut notices = *notices;
    // outlives the component that raised it
    spawn_forever(async move {
        pause(timeout).await;
        notices.write().dismiss(id);
    });
}

pub fn notify_success(notices: &mut Signal<Notifications>, message: impl Into<String>) {
    notify(notices, NoticeLevel::Success, message);
}

pub fn notify_error(notices: &mut Signal<Notifications>, message: impl Into<String>) {
    notify(notices, NoticeLevel::Error, message);
}

pub fn notify_info(notices: &mut Signal<Notifications>, message: impl Into<String>) {
    notify(notices, NoticeLevel::Info, message);
}

/// Text shown to the user for a failed call. The server's own message wins;
/// otherwise the caller's fallback, with transport details appended.
pub fn describe_failure(err: &ApiError, fallback: &str) -> String {
    match err {
        ApiError::Rejected { .. } => err.server_message().unwrap_or(fallback).to_string(),
        other => format!("{fallback}: {other}"),
    }
}

/// Like [`describe_failure`], but a rejection always shows `fallback`
/// whatever the server sent. Used by list loads, logout and friend removal.
pub fn fixed_failure(err: &ApiError, fallback: &str) -> String {
    match err {
        ApiError::Rejected { .. } => fallback.to_string(),
        other => format!("{fallback}: {other}"),
    }
}

pub(crate) async fn pause(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

#[component]
pub fn NotificationStack() -> Element {
    let mut notices = use_notifications();
    let entries = notices().entries.clone();

    rsx! {
        document::Stylesheet { href: NOTIFICATIONS_CSS }

        div {
            class: "notification-stack",
            for notice in entries {
                div {
                    key: "{notice.id}",
                    class: notice.level.class(),
                    role: "status",
                    span { class: "notification-message", "{notice.message}" }
                    button {
                        class: "notification-close",
                        "aria-label": "Dismiss",
                        onclick: move |_| notices.write().dismiss(notice.id),
                        "×"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut notices = Notifications::default();
        let first = notices.push(NoticeLevel::Success, "Friend added successfully!");
        let second = notices.push(NoticeLevel::Error, "Failed to add friend");
        assert_ne!(first, second);
        assert_eq!(notices.entries.len(), 2);

        notices.dismiss(first);
        assert_eq!(notices.entries.len(), 1);
        assert_eq!(notices.entries[0].level, NoticeLevel::Error);

        // unknown ids are ignored
        notices.dismiss(42);
        assert_eq!(notices.entries.len(), 1);
    }

    #[test]
    fn test_default_timeout() {
        assert_eq!(Notifications::default().timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_describe_failure_prefers_server_message() {
        let err = ApiError::Rejected {
            status: 409,
            message: Some("Already friends".to_string()),
        };
        assert_eq!(describe_failure(&err, "Failed to add friend"), "Already friends");
    }

    #[test]
    fn test_describe_failure_without_message_uses_fallback() {
        let err = ApiError::Rejected {
            status: 500,
            message: None,
        };
        assert_eq!(describe_failure(&err, "login failed"), "login failed");
    }

    #[test]
    fn test_fixed_failure_ignores_server_message() {
        let err = ApiError::Rejected {
            status: 404,
            message: Some("User not found".to_string()),
        };
        assert_eq!(fixed_failure(&err, "Failed to remove friend"), "Failed to remove friend");
        let err = ApiError::Rejected {
            status: 500,
            message: None,
        };
        assert_eq!(fixed_failure(&err, "Logout failed"), "Logout failed");

        let err = ApiError::Rejected {
            status: 500,
            message: Some("NullPointerException".to_string()),
        };
        assert_eq!(fixed_failure(&err, "Failed to load groups"), "Failed to load groups");
        let err = ApiError::InvalidUrl("x".to_string());
        assert!(fixed_failure(&err, "Failed to load groups").starts_with("Failed to load groups: "));
    }

    #[test]
    fn test_describe_failure_other_errors_append_detail() {
        let err = ApiError::InvalidUrl("ftp://nope".to_string());
        let text = describe_failure(&err, "Failed to load friends");
        assert!(text.starts_with("Failed to load friends: "));
        assert!(text.contains("ftp://nope"));
    }
}
