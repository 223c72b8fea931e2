use leptos::prelude::*;

use crate::core::content::{IconKind, site};
use crate::ui::icon::Icon;

#[component]
pub fn UseCasesSection() -> impl IntoView {
    let use_cases = &site().use_cases;

    view! {
        <section class="py-20 bg-white">
            <div class="container mx-auto px-6">
                <div class="max-w-6xl mx-auto">
                    <div class="text-center mb-16">
                        <h2 class="text-3xl lg:text-4xl font-bold text-gray-900 mb-4">{use_cases.title}</h2>
                        <p class="text-xl text-gray-600 max-w-2xl mx-auto">
                            "Soluções completas para cada necessidade da sua equipe"
                        </p>
                        <div class="w-24 h-1 bg-primary mx-auto mt-4"></div>
                    </div>

                    <div class="grid md:grid-cols-3 gap-8">
                        {use_cases.cases.iter().map(|case| view! {
                            <div class="card group p-8 text-center relative overflow-hidden hover:-translate-y-2">
                                <div class="absolute top-0 right-0 w-24 h-24 bg-gradient-to-br from-accent/5 to-primary/5 rounded-full -translate-y-12 translate-x-12 group-hover:scale-150 transition-transform duration-500"></div>

                                <div class="relative z-10 w-20 h-20 bg-gradient-to-br from-accent/10 to-primary/10 rounded-2xl flex items-center justify-center mx-auto mb-6 group-hover:scale-110 transition-transform duration-300">
                                    <Icon kind=case.icon class="w-10 h-10"/>
                                </div>

                                <h3 class="text-2xl font-semibold text-gray-900 mb-4 group-hover:text-primary transition-colors">
                                    {case.title}
                                </h3>
                                <p class="text-gray-600 leading-relaxed mb-6">{case.description}</p>

                                <div class="flex items-center justify-center gap-2 text-accent group-hover:gap-4 transition-all">
                                    <span class="font-medium">"Saiba mais"</span>
                                    <Icon kind=IconKind::ArrowRight class="w-4 h-4"/>
                                </div>
                            </div>
                        }).collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
