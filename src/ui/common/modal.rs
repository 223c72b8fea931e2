use leptos::prelude::*;

use crate::core::content::IconKind;
use crate::ui::icon::Icon;

#[cfg(not(feature = "ssr"))]
use leptos::wasm_bindgen::JsCast;

/// Dialog shell shared by the lead modals.
///
/// Escape, the backdrop and the close button all call `on_close`; the caller
/// decides whether closing is allowed (e.g. not while a request is running).
#[component]
pub fn BaseModal(
    /// Modal title
    #[prop(into)]
    title: Signal<String>,
    /// Icon shown before the title
    #[prop(into)]
    icon: Signal<IconKind>,
    /// Whether modal is open
    #[prop(into)]
    is_open: Signal<bool>,
    /// Close request
    on_close: Callback<()>,
    /// Modal content
    children: Children,
    /// Maximum width class
    #[prop(default = "max-w-md")]
    max_width: &'static str,
) -> impl IntoView {
    // Close on Escape key
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::keydown;

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" && is_open.get_untracked() {
                on_close.run(());
            }
        });

        on_cleanup(move || drop(handle_keydown));
    }

    view! {
        <div
            class=move || {
                if is_open.get() {
                    "modal-backdrop fixed inset-0 z-[60] flex items-center justify-center p-4 bg-black/50 transition-opacity duration-200"
                } else {
                    "modal-backdrop fixed inset-0 z-[60] flex items-center justify-center p-4 bg-black/50 opacity-0 pointer-events-none transition-opacity duration-200"
                }
            }
            role="dialog"
            aria-modal="true"
            aria-hidden=move || (!is_open.get()).to_string()
            on:click=move |e| {
                #[cfg(not(feature = "ssr"))]
                {
                    let on_backdrop = e
                        .target()
                        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
                        .is_some_and(|element| element.class_list().contains("modal-backdrop"));
                    if on_backdrop {
                        on_close.run(());
                    }
                }
                #[cfg(feature = "ssr")]
                {
                    let _ = e;
                }
            }
        >
            <div class=format!("w-full {} bg-white rounded-xl shadow-2xl max-h-[90vh] overflow-y-auto", max_width)>
                <div class="flex items-center justify-between px-6 pt-6 pb-2">
                    <h3 class="flex items-center gap-2 text-lg font-semibold text-gray-900">
                        {move || view! { <Icon kind=icon.get() class="w-5 h-5"/> }}
                        <span>{move || title.get()}</span>
                    </h3>
                    <button
                        type="button"
                        class="p-1 rounded-md text-gray-400 hover:text-gray-600 hover:bg-gray-100 transition-colors"
                        on:click=move |_| on_close.run(())
                        aria-label="Fechar"
                    >
                        <Icon kind=IconKind::X class="w-5 h-5"/>
                    </button>
                </div>

                <div class="px-6 pb-6 pt-2">
                    {children()}
                </div>
            </div>
        </div>
    }
}
