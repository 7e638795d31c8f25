//! Application State
//!
//! Reactive state shared across dashboard widgets.

pub mod notifications;

pub use notifications::{
    dismiss_from, provide_global_state, GlobalState, Notification, NotificationKind,
};
