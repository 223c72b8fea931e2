use leptos::prelude::*;

use crate::core::content::{IconKind, site};
use crate::ui::icon::Icon;

#[component]
pub fn SocialProofSection() -> impl IntoView {
    let proof = &site().social_proof;

    view! {
        <section id="clientes" class="py-20 bg-gradient-to-b from-white to-gray-50 scroll-mt-16">
            <div class="container mx-auto px-6">
                <div class="max-w-6xl mx-auto">
                    <div class="text-center mb-16">
                        <h2 class="text-3xl lg:text-4xl font-bold text-gray-900 mb-4">{proof.title}</h2>
                        <div class="w-24 h-1 bg-accent mx-auto"></div>
                    </div>

                    // Metrics
                    <div class="grid md:grid-cols-3 gap-8 mb-16">
                        {proof.metrics.iter().map(|metric| view! {
                            <div class="card group p-8 text-center">
                                <div class="text-4xl font-bold text-primary mb-2 group-hover:scale-110 transition-transform">
                                    {metric.value}
                                </div>
                                <div class="text-gray-600 font-medium">{metric.label}</div>
                            </div>
                        }).collect_view()}
                    </div>

                    // Testimonials
                    <div class="grid md:grid-cols-2 gap-8 mb-16">
                        {proof.testimonials.iter().map(|testimonial| view! {
                            <figure class="card p-8 flex items-start gap-4">
                                <div class="p-3 bg-accent/10 rounded-full">
                                    <Icon kind=IconKind::Quote class="w-6 h-6"/>
                                </div>
                                <div class="flex-1">
                                    <blockquote class="text-gray-700 leading-relaxed mb-6 italic">
                                        "\"" {testimonial.text} "\""
                                    </blockquote>
                                    <div class="flex items-center gap-2 mb-3" aria-label="5 estrelas">
                                        {(0..5).map(|_| view! { <Icon kind=IconKind::Star class="w-4 h-4"/> }).collect_view()}
                                    </div>
                                    <figcaption>
                                        <div class="font-semibold text-gray-900">{testimonial.author}</div>
                                        <div class="text-sm text-gray-600">
                                            {testimonial.role} " • " {testimonial.company}
                                        </div>
                                    </figcaption>
                                </div>
                            </figure>
                        }).collect_view()}
                    </div>

                    // Company names
                    <div class="text-center">
                        <p class="text-gray-600 mb-8">"Empresas que confiam no KAVVI:"</p>
                        <div class="flex flex-wrap justify-center items-center gap-8 opacity-60">
                            {proof.companies.iter().map(|company| view! {
                                <div class="flex items-center justify-center h-12 px-6 bg-gray-100 rounded-lg" data-logo=company.logo>
                                    <span class="text-gray-700 font-medium">{company.name}</span>
                                </div>
                            }).collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
