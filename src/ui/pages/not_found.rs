//! Not found page component

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::content::{IconKind, site};
use crate::ui::icon::Icon;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let brand = &site().brand;

    view! {
        <div class="min-h-screen bg-gray-50 flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <div class="w-24 h-24 mx-auto mb-6 bg-primary/10 rounded-full flex items-center justify-center">
                    <Icon kind=IconKind::AlertCircle class="w-12 h-12" />
                </div>

                <h1 class="text-6xl font-bold text-primary mb-4">"404"</h1>
                <h2 class="text-2xl font-semibold text-gray-900 mb-2">"Página não encontrada"</h2>
                <p class="text-gray-600 mb-8 max-w-md mx-auto">
                    "A página que você procura não existe ou foi movida."
                </p>

                <A href="/" attr:class="btn-base btn-primary btn-lg">
                    "Voltar ao início"
                </A>
            </div>

            <div class="absolute bottom-8 text-center">
                <p class="text-sm text-gray-500">{brand.name}</p>
            </div>
        </div>
    }
}
