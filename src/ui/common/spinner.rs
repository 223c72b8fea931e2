use leptos::prelude::*;

use crate::core::content::IconKind;
use crate::ui::icon::Icon;

/// Small rotating loader icon
#[component]
pub fn InlineSpinner() -> impl IntoView {
    view! { <Icon kind=IconKind::Loader class="w-4 h-4 mr-2 animate-spin"/> }
}

/// Submit button that swaps to a spinner while `loading`
#[component]
pub fn LoadingButton(
    /// Whether a request is running (also disables the button)
    #[prop(into)]
    loading: Signal<bool>,
    /// Button text when idle
    text: &'static str,
    /// Button text while loading
    loading_text: &'static str,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            class=format!("btn-base flex-1 {}", class)
            disabled=move || loading.get()
        >
            <Show
                when=move || loading.get()
                fallback=move || view! { <span>{text}</span> }
            >
                <span class="flex items-center justify-center">
                    <InlineSpinner/>
                    {loading_text}
                </span>
            </Show>
        </button>
    }
}
