//! # Repwise Dashboard Widgets
//!
//! Reusable Leptos components for the Repwise workout tracker dashboard:
//! toast notifications with a guaranteed-cancel auto-dismiss timer, a
//! modal overlay with backdrop dismissal, the brand logo, and small pure
//! view helpers. Routing and page composition belong to the app shell,
//! not this crate.

pub mod components;
pub mod state;
pub mod utils;

pub use components::{Logo, LogoSize, Modal, Toast, ToastStack};
pub use state::{
    provide_global_state, GlobalState, Notification, NotificationKind,
};
pub use utils::{format_date, generate_entry_id};
