use leptos::prelude::*;

use crate::core::content::{IconKind, ViewKind, site};
use crate::ui::icon::Icon;

#[component]
pub fn ViewsSection() -> impl IntoView {
    let views = &site().views;

    view! {
        <section class="py-20 bg-gradient-to-b from-gray-50 to-white">
            <div class="container mx-auto px-6">
                <div class="max-w-6xl mx-auto">
                    <div class="text-center mb-16">
                        <span class="badge bg-primary/10 text-primary mb-4">
                            <Icon kind=IconKind::Eye class="w-4 h-4 mr-2"/>
                            "Múltiplas visões"
                        </span>
                        <h2 class="text-3xl lg:text-4xl font-bold text-gray-900 mb-4">{views.title}</h2>
                        <p class="text-xl text-gray-600 max-w-2xl mx-auto">
                            "Alterne entre diferentes visualizações para trabalhar do seu jeito"
                        </p>
                    </div>

                    <div class="grid md:grid-cols-3 gap-8">
                        {views.items.iter().map(|item| view! {
                            <div class="card group overflow-hidden hover:-translate-y-1">
                                <div class="h-48 bg-gradient-to-br from-gray-100 to-gray-50 relative overflow-hidden">
                                    <div class="absolute inset-0 flex items-center justify-center opacity-40">
                                        <Icon kind=item.kind.icon() class="w-16 h-16"/>
                                    </div>
                                    <ViewMock kind=item.kind/>
                                </div>
                                <div class="p-6">
                                    <h3 class="text-xl font-semibold text-gray-900 mb-3 flex items-center gap-2">
                                        {item.name}
                                        <Icon kind=IconKind::ArrowRight class="w-5 h-5 opacity-50 group-hover:translate-x-1 transition-transform"/>
                                    </h3>
                                    <p class="text-gray-600 leading-relaxed">{item.description}</p>
                                </div>
                            </div>
                        }).collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Skeleton of the product view drawn over the card header
#[component]
fn ViewMock(kind: ViewKind) -> impl IntoView {
    match kind {
        ViewKind::Kanban => view! {
            <div class="absolute inset-4 grid grid-cols-3 gap-2" aria-hidden="true">
                {(0..3).map(|_| view! {
                    <div class="bg-white/70 rounded-lg p-2">
                        <div class="h-2 bg-gray-300 rounded mb-1"></div>
                        <div class="h-6 bg-gray-200 rounded mb-1 opacity-60"></div>
                        <div class="h-6 bg-gray-200 rounded mb-1 opacity-60"></div>
                    </div>
                }).collect_view()}
            </div>
        }
        .into_any(),
        ViewKind::List => view! {
            <div class="absolute inset-4" aria-hidden="true">
                {(0..4).map(|_| view! {
                    <div class="flex items-center gap-2 mb-2 bg-white/70 rounded p-2">
                        <div class="w-3 h-3 bg-gray-300 rounded-full"></div>
                        <div class="flex-1 h-2 bg-gray-300 rounded"></div>
                        <div class="w-8 h-2 bg-gray-200 rounded"></div>
                    </div>
                }).collect_view()}
            </div>
        }
        .into_any(),
        ViewKind::Inbox => view! {
            <div class="absolute inset-4" aria-hidden="true">
                {(0..3).map(|_| view! {
                    <div class="flex items-center gap-2 mb-2 bg-white/70 rounded p-2">
                        <div class="w-8 h-8 bg-accent/30 rounded-full flex items-center justify-center">
                            <Icon kind=IconKind::MessageCircle class="w-4 h-4"/>
                        </div>
                        <div class="flex-1">
                            <div class="h-2 bg-gray-300 rounded mb-1"></div>
                            <div class="h-2 bg-gray-200 rounded w-3/4"></div>
                        </div>
                    </div>
                }).collect_view()}
            </div>
        }
        .into_any(),
    }
}
