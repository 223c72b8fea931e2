use leptos::prelude::*;

use crate::core::content::IconKind;

#[component]
pub fn Icon(
    /// Which icon to render
    kind: IconKind,
    /// CSS classes for sizing and tinting
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <img
            src=kind.asset_path()
            class=class
            alt=""
            aria-hidden="true"
            draggable="false"
        />
    }
}
