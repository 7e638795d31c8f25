//! Logo Component
//!
//! Brand mark image wrapper.

use leptos::*;

/// Rendered height of the logo
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogoSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl LogoSize {
    fn height_class(&self) -> &'static str {
        match self {
            LogoSize::Small => "h-6",
            LogoSize::Medium => "h-8",
            LogoSize::Large => "h-12",
        }
    }
}

/// Repwise brand mark
#[component]
pub fn Logo(#[prop(optional)] size: LogoSize) -> impl IntoView {
    view! {
        <img
            src="/assets/repwise-mark.svg"
            alt="Repwise"
            class=format!("w-auto {}", size.height_class())
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_classes() {
        assert_eq!(LogoSize::Small.height_class(), "h-6");
        assert_eq!(LogoSize::default().height_class(), "h-8");
        assert_eq!(LogoSize::Large.height_class(), "h-12");
    }
}
