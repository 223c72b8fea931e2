//! Landing page component
//!
//! The single marketing page for KAVVI CRM:
//! - SEO meta tags in pt-BR
//! - Header, hero, views, features, social proof, use cases, pricing,
//!   final call-to-action and footer sections
//! - Trial signup and demo scheduling modals, opened by any CTA

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::ui::context::use_landing_context;
use crate::ui::modals::{DemoSchedulingModal, TrialSignupModal};
use crate::ui::sections::{
    FeaturesSection, FinalCtaSection, Footer, Header, HeroSection, PricingSection,
    SocialProofSection, UseCasesSection, ViewsSection,
};

/// Landing page component
#[component]
pub fn LandingPage() -> impl IntoView {
    let ctx = use_landing_context();

    // Effects only run in the browser; the context drops repeat reports
    Effect::new(move |_| ctx.report_page_view());

    view! {
        <SeoMeta />

        <div class="min-h-screen bg-white overflow-x-hidden">
            <Header />
            <main>
                <HeroSection />
                <ViewsSection />
                <FeaturesSection />
                <SocialProofSection />
                <UseCasesSection />
                <PricingSection />
                <FinalCtaSection />
            </main>
            <Footer />

            <TrialSignupModal />
            <DemoSchedulingModal />
        </div>
    }
}

/// SEO meta tags component
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="KAVVI CRM - WhatsApp-first CRM para equipes de vendas" />

        <Meta name="description" content="Centralize conversas do WhatsApp, automatize o atendimento e feche mais negócios. Teste grátis por 3 dias, sem cartão de crédito." />
        <Meta name="keywords" content="CRM, WhatsApp, WhatsApp Business, vendas, funil de vendas, automação, chatbot, atendimento" />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:locale" content="pt_BR" />
        <Meta property="og:title" content="KAVVI CRM - WhatsApp-first CRM" />
        <Meta property="og:description" content="O CRM completo para equipes que vendem através do WhatsApp." />

        // Twitter
        <Meta name="twitter:card" content="summary_large_image" />
        <Meta name="twitter:title" content="KAVVI CRM - WhatsApp-first CRM" />
        <Meta name="twitter:description" content="O CRM completo para equipes que vendem através do WhatsApp." />

        <Link rel="icon" href="/favicon.svg" />
    }
}
