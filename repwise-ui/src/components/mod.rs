//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod logo;
pub mod modal;
pub mod toast;

pub use logo::{Logo, LogoSize};
pub use modal::Modal;
pub use toast::{Toast, ToastLifecycle, ToastPhase, ToastStack, TOAST_DURATION_MS};
