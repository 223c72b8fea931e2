//! Presentational sections of the landing page, in page order

pub mod features;
pub mod final_cta;
pub mod footer;
pub mod header;
pub mod hero;
pub mod pricing;
pub mod social_proof;
pub mod use_cases;
pub mod views;

pub use features::FeaturesSection;
pub use final_cta::FinalCtaSection;
pub use footer::Footer;
pub use header::Header;
pub use hero::HeroSection;
pub use pricing::PricingSection;
pub use social_proof::SocialProofSection;
pub use use_cases::UseCasesSection;
pub use views::ViewsSection;
