use leptos::prelude::*;

use crate::core::content::{IconKind, site};
use crate::ui::icon::Icon;

#[component]
pub fn Footer() -> impl IntoView {
    let content = site();
    let footer = &content.footer;
    let year = chrono::Utc::now().format("%Y").to_string();

    view! {
        <footer id="suporte" class="bg-gray-900 text-white py-16">
            <div class="container mx-auto px-6">
                <div class="max-w-6xl mx-auto">
                    <div class="grid md:grid-cols-4 gap-8 mb-12">
                        // Brand
                        <div class="md:col-span-2">
                            <div class="flex items-center gap-3 mb-6">
                                <div class="w-10 h-10 bg-accent rounded-lg flex items-center justify-center">
                                    <Icon kind=IconKind::MessageSquare class="w-6 h-6"/>
                                </div>
                                <div>
                                    <h3 class="text-2xl font-bold">{footer.company.name}</h3>
                                    <p class="text-gray-400 text-sm">{content.brand.tagline}</p>
                                </div>
                            </div>
                            <p class="text-gray-300 leading-relaxed mb-6 max-w-md">
                                "O CRM completo para equipes que vendem através do WhatsApp. "
                                "Centralize conversas, automatize processos e feche mais negócios."
                            </p>
                            <div class="flex items-center gap-2 text-gray-400">
                                <Icon kind=IconKind::MapPin class="w-4 h-4 icon-invert"/>
                                <span>{footer.company.address}</span>
                            </div>
                        </div>

                        // Links
                        <div>
                            <h4 class="text-lg font-semibold mb-4">"Links Úteis"</h4>
                            <div class="space-y-3">
                                {footer.links.iter().map(|link| view! {
                                    <a href=link.url class="block text-gray-300 hover:text-accent transition-colors">
                                        {link.name}
                                    </a>
                                }).collect_view()}
                            </div>
                        </div>

                        // Contact
                        <div>
                            <h4 class="text-lg font-semibold mb-4">"Contato"</h4>
                            <div class="space-y-3">
                                <a href=format!("mailto:{}", footer.email) class="flex items-center gap-3 text-gray-300 hover:text-accent">
                                    <Icon kind=IconKind::Mail class="w-4 h-4 icon-invert"/>
                                    <span>{footer.email}</span>
                                </a>
                                <div class="flex items-center gap-3 text-gray-300">
                                    <Icon kind=IconKind::Phone class="w-4 h-4 icon-invert"/>
                                    <span>{footer.phone}</span>
                                </div>
                                <div class="flex items-center gap-3 text-gray-300">
                                    <Icon kind=IconKind::MessageSquare class="w-4 h-4 icon-invert"/>
                                    <span>"WhatsApp Business"</span>
                                </div>
                            </div>
                        </div>
                    </div>

                    // Bottom bar
                    <div class="border-t border-gray-800 pt-8 flex flex-col md:flex-row justify-between items-center gap-4">
                        <div class="text-gray-400 text-sm">
                            "© " {year} " " {footer.company.name} ". Todos os direitos reservados."
                        </div>
                        <div class="flex items-center gap-6 text-sm text-gray-400">
                            <span>"Feito com ❤️ no Brasil"</span>
                            <div class="flex items-center gap-1">
                                <div class="w-2 h-2 bg-green-500 rounded-full animate-pulse"></div>
                                <span>"Sistema online"</span>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </footer>
    }
}
