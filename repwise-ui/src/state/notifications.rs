//! Notification State
//!
//! Transient status messages shown as toasts. Each notification lives in
//! the global list until its toast expires or a caller dismisses it;
//! removal is idempotent so a late timer and an explicit dismissal can
//! never double-remove.

use leptos::*;
use serde::{Deserialize, Serialize};

use crate::utils::generate_entry_id;

/// Severity of a notification; selects the icon/color presentation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    #[default]
    Success,
    Error,
}

impl NotificationKind {
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Success => "✓",
            NotificationKind::Error => "✕",
        }
    }

    pub fn container_class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "bg-green-600",
            NotificationKind::Error => "bg-red-600",
        }
    }
}

/// A transient status message
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub message: String,
    #[serde(default)]
    pub kind: NotificationKind,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            id: generate_entry_id(),
            message: message.into(),
            kind,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Error)
    }
}

/// Remove a notification by id
///
/// Idempotent: returns whether anything was removed, and a second attempt
/// with the same id is a no-op.
pub fn dismiss_from(list: &mut Vec<Notification>, id: &str) -> bool {
    let before = list.len();
    list.retain(|n| n.id != id);
    list.len() != before
}

/// Global state provided to all dashboard widgets
#[derive(Clone)]
pub struct GlobalState {
    /// Live notifications, newest last
    pub notifications: RwSignal<Vec<Notification>>,
}

impl GlobalState {
    pub fn new() -> Self {
        Self {
            notifications: create_rw_signal(Vec::new()),
        }
    }

    /// Queue a success toast; returns its id
    pub fn notify_success(&self, message: &str) -> String {
        self.push(Notification::success(message))
    }

    /// Queue an error toast; returns its id
    pub fn notify_error(&self, message: &str) -> String {
        self.push(Notification::error(message))
    }

    fn push(&self, notification: Notification) -> String {
        let id = notification.id.clone();
        self.notifications.update(|list| list.push(notification));
        id
    }

    /// Remove a notification; safe to call more than once per id
    pub fn dismiss_notification(&self, id: &str) {
        self.notifications.update(|list| {
            dismiss_from(list, id);
        });
    }
}

impl Default for GlobalState {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    provide_context(GlobalState::new());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_presentation() {
        assert_eq!(NotificationKind::Success.icon(), "✓");
        assert_eq!(NotificationKind::Error.icon(), "✕");
        assert_eq!(NotificationKind::Success.container_class(), "bg-green-600");
        assert_eq!(NotificationKind::Error.container_class(), "bg-red-600");
    }

    #[test]
    fn test_default_kind_is_success() {
        assert_eq!(NotificationKind::default(), NotificationKind::Success);
    }

    #[test]
    fn test_constructors_set_kind() {
        let a = Notification::success("saved");
        assert_eq!(a.kind, NotificationKind::Success);
        assert!(!a.id.is_empty());

        let b = Notification::error("sync failed");
        assert_eq!(b.kind, NotificationKind::Error);
    }

    fn note(id: &str, message: &str, kind: NotificationKind) -> Notification {
        Notification {
            id: id.to_string(),
            message: message.to_string(),
            kind,
        }
    }

    #[test]
    fn test_dismiss_from_is_idempotent() {
        let mut list = vec![
            note("a1", "workout saved", NotificationKind::Success),
            note("b2", "sync failed", NotificationKind::Error),
        ];

        assert!(dismiss_from(&mut list, "a1"));
        assert_eq!(list.len(), 1);

        // Second attempt is a no-op
        assert!(!dismiss_from(&mut list, "a1"));
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id, "b2");
    }

    #[test]
    fn test_dismiss_unknown_id_is_noop() {
        let mut list = vec![note("a1", "workout saved", NotificationKind::Success)];
        assert!(!dismiss_from(&mut list, "no-such-id"));
        assert_eq!(list.len(), 1);
    }
}
