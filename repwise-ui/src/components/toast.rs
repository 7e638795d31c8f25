//! Toast Notification Component
//!
//! Shows success and error messages that remove themselves after a fixed
//! delay. The pending timer is cancelled whenever a toast is torn down
//! early, so the removal callback fires at most once per toast and never
//! after the toast is gone.

use gloo_timers::callback::Timeout;
use leptos::*;
use std::cell::Cell;
use std::rc::Rc;

use crate::state::{GlobalState, Notification};

/// How long a toast stays visible (ms)
pub const TOAST_DURATION_MS: u32 = 3_000;

/// Where a toast is in its life
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastPhase {
    Visible,
    Removed,
}

/// Tracks the single removal transition of a toast
///
/// Expiry (the timer) and dismissal (a caller) race for the same
/// transition; whichever wins gets `true` and the removal callback. Every
/// later attempt is a no-op, and `teardown` reaches the terminal state
/// without the callback ever firing.
#[derive(Debug)]
pub struct ToastLifecycle {
    phase: Cell<ToastPhase>,
}

impl ToastLifecycle {
    pub fn new() -> Self {
        Self {
            phase: Cell::new(ToastPhase::Visible),
        }
    }

    pub fn phase(&self) -> ToastPhase {
        self.phase.get()
    }

    /// Timer expiry path; true exactly on the first transition
    pub fn expire(&self) -> bool {
        self.transition()
    }

    /// Caller-driven dismissal; same terminal state as expiry
    pub fn dismiss(&self) -> bool {
        self.transition()
    }

    /// Teardown: reach `Removed` without firing the removal callback
    pub fn teardown(&self) {
        self.phase.set(ToastPhase::Removed);
    }

    fn transition(&self) -> bool {
        if self.phase.get() == ToastPhase::Visible {
            self.phase.set(ToastPhase::Removed);
            true
        } else {
            false
        }
    }
}

impl Default for ToastLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

/// A single toast message
#[component]
pub fn Toast(
    notification: Notification,
    #[prop(into)] on_remove: Callback<String>,
) -> impl IntoView {
    let lifecycle = Rc::new(ToastLifecycle::new());
    let id = notification.id.clone();

    let timer_lifecycle = Rc::clone(&lifecycle);
    let timer_id = id.clone();
    let timeout = Timeout::new(TOAST_DURATION_MS, move || {
        if timer_lifecycle.expire() {
            on_remove.call(timer_id);
        }
    });

    // Dropping the handle cancels the pending timer; an unmounted toast
    // must never fire its removal late.
    let cleanup_lifecycle = Rc::clone(&lifecycle);
    on_cleanup(move || {
        cleanup_lifecycle.teardown();
        timeout.cancel();
    });

    let dismiss_lifecycle = Rc::clone(&lifecycle);
    let dismiss = move |_| {
        if dismiss_lifecycle.dismiss() {
            on_remove.call(id.clone());
        }
    };

    let icon = notification.kind.icon();
    let container = notification.kind.container_class();

    view! {
        <div class=format!(
            "flex items-center space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg \
             transform transition-all duration-300 ease-out animate-slide-in",
            container
        )>
            <span class="text-lg">{icon}</span>
            <span class="text-sm font-medium">{notification.message}</span>
            <button
                on:click=dismiss
                class="ml-2 text-white/70 hover:text-white"
            >
                "✕"
            </button>
        </div>
    }
}

/// Renders the global notification list
#[component]
pub fn ToastStack() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let remove_state = state.clone();
    let on_remove = Callback::new(move |id: String| remove_state.dismiss_notification(&id));

    view! {
        <div class="fixed bottom-20 right-4 z-50 space-y-2">
            <For
                each=move || state.notifications.get()
                key=|n| n.id.clone()
                children=move |n| view! { <Toast notification=n on_remove=on_remove /> }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry_fires_exactly_once() {
        let lifecycle = ToastLifecycle::new();
        assert_eq!(lifecycle.phase(), ToastPhase::Visible);

        assert!(lifecycle.expire());
        assert_eq!(lifecycle.phase(), ToastPhase::Removed);

        // A late second expiry is a no-op
        assert!(!lifecycle.expire());
    }

    #[test]
    fn test_dismiss_then_expire_does_not_double_fire() {
        let lifecycle = ToastLifecycle::new();

        assert!(lifecycle.dismiss());
        assert!(!lifecycle.expire());
        assert!(!lifecycle.dismiss());
    }

    #[test]
    fn test_teardown_before_expiry_suppresses_callback() {
        let lifecycle = ToastLifecycle::new();

        lifecycle.teardown();
        assert_eq!(lifecycle.phase(), ToastPhase::Removed);

        // The timer losing the race must not fire the callback
        assert!(!lifecycle.expire());
        assert!(!lifecycle.dismiss());
    }

    #[test]
    fn test_teardown_is_idempotent() {
        let lifecycle = ToastLifecycle::new();
        lifecycle.teardown();
        lifecycle.teardown();
        assert_eq!(lifecycle.phase(), ToastPhase::Removed);
    }
}
