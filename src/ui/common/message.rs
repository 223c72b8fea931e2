//! Alert boxes shown inside the lead modals

use leptos::prelude::*;

use crate::core::content::IconKind;
use crate::ui::icon::Icon;

/// Error alert; hidden while `error` is `None`
#[component]
pub fn ErrorMessage(
    #[prop(into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <div class="flex items-start gap-2 rounded-md border border-red-200 bg-red-50 p-3 text-sm text-red-800" role="alert">
                <Icon kind=IconKind::AlertCircle class="w-4 h-4 mt-0.5"/>
                <span>{move || error.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}

/// Success alert with a bold heading and optional detail content
#[component]
pub fn SuccessMessage(
    heading: &'static str,
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="flex items-start gap-2 rounded-md border border-green-200 bg-green-50 p-3 text-sm text-green-800">
            <Icon kind=IconKind::CheckCircle class="w-4 h-4 mt-0.5"/>
            <div>
                <strong>{heading}</strong>
                {children.map(|c| c())}
            </div>
        </div>
    }
}

/// "What happens next" list
#[component]
pub fn NextSteps(
    title: &'static str,
    items: &'static [&'static str],
) -> impl IntoView {
    view! {
        <div class="rounded-lg bg-blue-50 p-4">
            <h4 class="mb-2 font-medium text-blue-900">{title}</h4>
            <ul class="space-y-1 text-sm text-blue-800">
                {items.iter().map(|item| view! { <li>"• " {*item}</li> }).collect_view()}
            </ul>
        </div>
    }
}
