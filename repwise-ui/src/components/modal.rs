//! Modal Overlay Component
//!
//! Blocking dialog above the page. Closing happens through the close
//! control or by clicking the dimmed backdrop; clicks inside the panel
//! bubble up with a different target and never close.

use leptos::*;
use wasm_bindgen::JsValue;

/// Modal dialog with a dimmed backdrop
///
/// Stateless: everything it shows comes from its props, and dismissal
/// always goes through `on_close`.
#[component]
pub fn Modal(
    #[prop(into)] title: String,
    #[prop(optional, into)] footer: Option<View>,
    on_close: impl Fn() + 'static + Clone,
    children: Children,
) -> impl IntoView {
    let on_close_for_backdrop = on_close.clone();
    let on_close_for_x = on_close;

    let backdrop_click = move |ev: web_sys::MouseEvent| {
        // Panel clicks bubble here with the inner element as target; only
        // a click on the backdrop itself (target == current_target) closes.
        let target = ev.target().map(JsValue::from);
        let current = ev.current_target().map(JsValue::from);
        if target.is_some() && target == current {
            on_close_for_backdrop();
        }
    };

    view! {
        <div
            class="fixed inset-0 bg-black/50 flex items-center justify-center z-50"
            on:click=backdrop_click
        >
            <div class="bg-gray-800 rounded-xl w-full max-w-md mx-4">
                <div class="flex items-center justify-between px-6 py-4 border-b border-gray-700">
                    <h2 class="text-xl font-semibold">{title}</h2>
                    <button
                        on:click=move |_| on_close_for_x()
                        class="text-gray-400 hover:text-white"
                    >
                        "✕"
                    </button>
                </div>

                <div class="px-6 py-4">{children()}</div>

                {footer.map(|f| view! {
                    <div class="px-6 py-4 border-t border-gray-700">{f}</div>
                })}
            </div>
        </div>
    }
}
