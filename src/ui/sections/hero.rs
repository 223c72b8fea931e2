use leptos::prelude::*;

use crate::core::content::{IconKind, site};
use crate::ui::context::use_landing_context;
use crate::ui::icon::Icon;

/// Lead temperature of a preview conversation
#[derive(Clone, Copy)]
enum Temperature {
    Hot,
    Warm,
    Cold,
}

impl Temperature {
    fn class(self) -> &'static str {
        match self {
            Temperature::Hot => "bg-red-500",
            Temperature::Warm => "bg-yellow-500",
            Temperature::Cold => "bg-blue-500",
        }
    }
}

const PREVIEW_CONVERSATIONS: [(&str, &str, &str, &str, Temperature); 3] = [
    ("Maria Silva", "Interesse no produto Premium", "há 2 min", "WhatsApp", Temperature::Hot),
    ("João Santos", "Solicita orçamento urgente", "há 5 min", "Instagram", Temperature::Warm),
    ("Ana Costa", "Dúvidas sobre integração", "há 10 min", "Facebook", Temperature::Cold),
];

const PREVIEW_STATS: [(&str, &str); 3] = [
    ("+32%", "Taxa de resposta"),
    ("2.5x", "Mais vendas"),
    ("89%", "Satisfação"),
];

#[component]
pub fn HeroSection() -> impl IntoView {
    let ctx = use_landing_context();
    let hero = &site().hero;
    let (before, highlight, after) = hero.headline_parts();

    view! {
        <section class="relative overflow-hidden pt-16">
            <div class="absolute inset-0 bg-gradient-to-br from-slate-50 to-blue-50/30" aria-hidden="true"></div>

            <div class="relative container mx-auto px-6 py-20 lg:py-28">
                <div class="max-w-6xl mx-auto grid lg:grid-cols-2 gap-12 items-center">
                    <div class="space-y-8">
                        <div class="space-y-4">
                            <span class="badge bg-accent/10 text-accent">
                                <Icon kind=IconKind::Zap class="w-4 h-4 mr-2"/>
                                "Trial " {hero.trial_days} " dias grátis"
                            </span>

                            <h1 class="text-4xl lg:text-6xl font-bold text-gray-900 leading-tight">
                                {before}
                                {highlight.map(|h| view! { <span class="text-accent">{h}</span> })}
                                {after}
                            </h1>

                            <p class="text-xl text-gray-600 leading-relaxed max-w-lg">{hero.subhead}</p>
                        </div>

                        <div class="flex flex-col sm:flex-row gap-4">
                            <button class="btn-base btn-primary btn-lg" on:click=move |_| ctx.open_trial("hero")>
                                {hero.cta_primary}
                            </button>
                            <button class="btn-base btn-outline btn-lg" on:click=move |_| ctx.open_demo("hero")>
                                {hero.cta_secondary}
                            </button>
                        </div>

                        <div class="flex items-center gap-8 pt-4">
                            {PREVIEW_STATS.iter().map(|(value, label)| view! {
                                <div class="text-center">
                                    <div class="text-2xl font-bold text-primary">{*value}</div>
                                    <div class="text-sm text-gray-500">{*label}</div>
                                </div>
                            }).collect_view()}
                        </div>
                    </div>

                    <InboxPreview/>
                </div>
            </div>
        </section>
    }
}

/// Static mock of the unified inbox
#[component]
fn InboxPreview() -> impl IntoView {
    view! {
        <div class="relative" aria-hidden="true">
            <div class="bg-white rounded-2xl shadow-2xl border border-gray-100 overflow-hidden rotate-3 hover:rotate-0 transition-transform duration-500">
                <div class="bg-primary text-white p-4 flex items-center gap-3">
                    <Icon kind=IconKind::MessageSquare class="w-6 h-6 icon-invert"/>
                    <span class="font-semibold">"Inbox Unificado"</span>
                    <span class="badge bg-accent text-primary ml-auto">"12 novas"</span>
                </div>

                <div class="p-6 space-y-4">
                    {PREVIEW_CONVERSATIONS.iter().map(|(name, message, time, channel, temperature)| view! {
                        <div class="flex items-center gap-4 p-3 bg-gray-50 rounded-lg">
                            <div class=format!("w-3 h-3 rounded-full {}", temperature.class())></div>
                            <div class="flex-1 min-w-0">
                                <div class="flex items-center gap-2">
                                    <span class="font-medium text-gray-900">{*name}</span>
                                    <span class="badge bg-gray-100 text-gray-700 text-xs">{*channel}</span>
                                </div>
                                <p class="text-sm text-gray-600 truncate">{*message}</p>
                            </div>
                            <span class="text-xs text-gray-400">{*time}</span>
                        </div>
                    }).collect_view()}
                </div>

                <div class="bg-gray-50 p-4 flex justify-between items-center text-sm">
                    <div class="flex items-center gap-2">
                        <Icon kind=IconKind::BarChart class="w-4 h-4"/>
                        <span class="text-gray-600">"Conversão: 34%"</span>
                    </div>
                    <div class="flex items-center gap-2">
                        <Icon kind=IconKind::Users class="w-4 h-4"/>
                        <span class="text-gray-600">"5 agentes online"</span>
                    </div>
                </div>
            </div>
        </div>
    }
}
