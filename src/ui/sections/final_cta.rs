use leptos::prelude::*;

use crate::core::content::{IconKind, site};
use crate::ui::context::use_landing_context;
use crate::ui::icon::Icon;

const TRUST_INDICATORS: [(IconKind, &str); 3] = [
    (IconKind::Clock, "Ativação em 5 minutos"),
    (IconKind::Shield, "Dados 100% seguros"),
    (IconKind::Zap, "Suporte especializado"),
];

#[component]
pub fn FinalCtaSection() -> impl IntoView {
    let ctx = use_landing_context();
    let cta = &site().final_cta;

    view! {
        <section class="py-20 bg-gradient-to-br from-primary to-primary/90 text-white relative overflow-hidden">
            <div class="absolute top-0 left-1/4 w-64 h-64 bg-accent/20 rounded-full blur-3xl" aria-hidden="true"></div>
            <div class="absolute bottom-0 right-1/4 w-96 h-96 bg-white/5 rounded-full blur-3xl" aria-hidden="true"></div>

            <div class="relative container mx-auto px-6">
                <div class="max-w-4xl mx-auto text-center">
                    <span class="badge bg-white/10 text-white mb-6">
                        <Icon kind=IconKind::Zap class="w-4 h-4 mr-2 icon-invert"/>
                        "Comece hoje mesmo"
                    </span>

                    <h2 class="text-3xl lg:text-5xl font-bold mb-6 leading-tight">{cta.headline}</h2>
                    <p class="text-xl lg:text-2xl text-white/90 mb-12 leading-relaxed">{cta.subhead}</p>

                    <div class="flex flex-col sm:flex-row gap-6 justify-center mb-12">
                        <button class="btn-base btn-accent btn-lg" on:click=move |_| ctx.open_trial("final-cta")>
                            {cta.cta_primary}
                            <Icon kind=IconKind::ArrowRight class="w-5 h-5 ml-2"/>
                        </button>
                        <button class="btn-base btn-outline-light btn-lg" on:click=move |_| ctx.open_demo("final-cta")>
                            {cta.cta_secondary}
                        </button>
                    </div>

                    <div class="grid md:grid-cols-3 gap-8 max-w-3xl mx-auto">
                        {TRUST_INDICATORS.iter().map(|(icon, text)| view! {
                            <div class="flex items-center justify-center gap-3 text-white/80">
                                <Icon kind=*icon class="w-5 h-5 icon-invert"/>
                                <span>{*text}</span>
                            </div>
                        }).collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
