use leptos::prelude::*;

use crate::core::content::{IconKind, Plan, site};
use crate::ui::context::use_landing_context;
use crate::ui::icon::Icon;

const INCLUDED_EXTRAS: [&str; 3] = ["Sem taxa de setup", "Migração gratuita", "Treinamento incluído"];

#[component]
pub fn PricingSection() -> impl IntoView {
    let pricing = &site().pricing;

    view! {
        <section id="precos" class="py-20 bg-gradient-to-b from-gray-50 to-white scroll-mt-16">
            <div class="container mx-auto px-6">
                <div class="max-w-6xl mx-auto">
                    <div class="text-center mb-16">
                        <span class="badge bg-primary/10 text-primary mb-4">
                            <Icon kind=IconKind::Zap class="w-4 h-4 mr-2"/>
                            {pricing.note}
                        </span>
                        <h2 class="text-3xl lg:text-4xl font-bold text-gray-900 mb-4">{pricing.title}</h2>
                        <p class="text-xl text-gray-600 max-w-2xl mx-auto">{pricing.subtitle}</p>
                    </div>

                    <div class="grid md:grid-cols-3 gap-8">
                        {pricing.plans.iter().map(|plan| view! { <PricingCard plan=plan/> }).collect_view()}
                    </div>

                    <div class="text-center mt-12">
                        <p class="text-gray-600 mb-4">
                            "Todos os planos incluem suporte em português e integração com WhatsApp Business"
                        </p>
                        <div class="flex flex-wrap justify-center gap-6 text-sm text-gray-500">
                            {INCLUDED_EXTRAS.iter().map(|extra| view! { <span>"✓ " {*extra}</span> }).collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn PricingCard(plan: &'static Plan) -> impl IntoView {
    let ctx = use_landing_context();
    let location = format!("pricing:{}", plan.name);

    let card_class = if plan.highlighted {
        "card relative hover:-translate-y-4 ring-2 ring-accent/50"
    } else {
        "card relative hover:-translate-y-2"
    };
    let button_class = if plan.highlighted {
        "btn-base btn-accent btn-lg w-full"
    } else {
        "btn-base btn-primary btn-lg w-full"
    };

    view! {
        <div class=card_class>
            {plan.highlighted.then(|| view! {
                <div class="absolute -top-3 left-1/2 -translate-x-1/2">
                    <span class="badge bg-accent text-white">
                        <Icon kind=IconKind::Star class="w-3 h-3 mr-1 icon-invert"/>
                        "Mais Popular"
                    </span>
                </div>
            })}

            <div class="text-center p-6 pb-4">
                <div class="space-y-2">
                    <h3 class="text-2xl font-bold text-gray-900">{plan.name}</h3>
                    <p class="text-gray-600">{plan.description}</p>
                </div>
                <div class="py-6">
                    <div class="text-4xl font-bold text-primary mb-2">{plan.price}</div>
                    {plan.is_custom_priced().then(|| view! {
                        <p class="text-sm text-gray-500">"Preços personalizados"</p>
                    })}
                </div>
            </div>

            <div class="px-6 pb-6 space-y-6">
                <ul class="space-y-3">
                    {plan.features.iter().map(|feature| view! {
                        <li class="flex items-center gap-3">
                            <span class="w-5 h-5 bg-accent/10 rounded-full flex items-center justify-center">
                                <Icon kind=IconKind::Check class="w-3 h-3"/>
                            </span>
                            <span class="text-gray-700">{*feature}</span>
                        </li>
                    }).collect_view()}
                </ul>

                <button class=button_class on:click=move |_| ctx.open_trial(&location)>
                    "Teste grátis"
                </button>

                {plan.highlighted.then(|| view! {
                    <p class="text-center text-sm text-gray-500">"Sem compromisso • Cancele quando quiser"</p>
                })}
            </div>
        </div>
    }
}
