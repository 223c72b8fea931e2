use leptos::prelude::*;

use crate::core::content::{IconKind, site};
use crate::ui::context::use_landing_context;
use crate::ui::icon::Icon;

/// Fixed top bar with navigation and the two CTAs
#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_landing_context();
    let content = site();
    let (mobile_menu_open, set_mobile_menu_open) = signal(false);

    view! {
        <header class="fixed top-0 left-0 right-0 z-50 bg-white/95 backdrop-blur-sm border-b border-gray-100">
            <div class="container mx-auto px-6">
                <div class="flex items-center justify-between h-16">
                    // Logo
                    <a href="/" class="flex items-center gap-3">
                        <div class="w-8 h-8 bg-primary rounded-lg flex items-center justify-center">
                            <Icon kind=IconKind::MessageSquare class="w-5 h-5 icon-invert"/>
                        </div>
                        <span class="text-xl font-bold text-gray-900">{content.brand.name}</span>
                    </a>

                    // Desktop navigation
                    <nav class="hidden md:flex items-center gap-8">
                        {content.nav.iter().map(|item| view! {
                            <a href=item.href class="text-gray-600 hover:text-primary transition-colors font-medium">
                                {item.name}
                            </a>
                        }).collect_view()}
                    </nav>

                    // Desktop CTAs
                    <div class="hidden md:flex items-center gap-4">
                        <button class="btn-base btn-ghost" on:click=move |_| ctx.open_demo("header")>
                            {content.hero.cta_secondary}
                        </button>
                        <button class="btn-base btn-primary" on:click=move |_| ctx.open_trial("header")>
                            {content.hero.cta_primary}
                        </button>
                    </div>

                    // Mobile menu button
                    <button
                        class="md:hidden p-2"
                        on:click=move |_| set_mobile_menu_open.update(|v| *v = !*v)
                        aria-label="Abrir menu"
                        aria-expanded=move || mobile_menu_open.get().to_string()
                    >
                        {move || {
                            let kind = if mobile_menu_open.get() { IconKind::X } else { IconKind::Menu };
                            view! { <Icon kind=kind class="w-6 h-6"/> }
                        }}
                    </button>
                </div>

                // Mobile navigation
                <Show when=move || mobile_menu_open.get()>
                    <div class="md:hidden py-4 border-t border-gray-100">
                        <nav class="flex flex-col gap-4">
                            {content.nav.iter().map(|item| view! {
                                <a
                                    href=item.href
                                    class="text-gray-600 hover:text-primary transition-colors font-medium py-2"
                                    on:click=move |_| set_mobile_menu_open.set(false)
                                >
                                    {item.name}
                                </a>
                            }).collect_view()}
                            <div class="flex flex-col gap-3 pt-4 border-t border-gray-100">
                                <button
                                    class="btn-base btn-outline"
                                    on:click=move |_| {
                                        set_mobile_menu_open.set(false);
                                        ctx.open_demo("header-mobile");
                                    }
                                >
                                    {content.hero.cta_secondary}
                                </button>
                                <button
                                    class="btn-base btn-primary"
                                    on:click=move |_| {
                                        set_mobile_menu_open.set(false);
                                        ctx.open_trial("header-mobile");
                                    }
                                >
                                    {content.hero.cta_primary}
                                </button>
                            </div>
                        </nav>
                    </div>
                </Show>
            </div>
        </header>
    }
}
