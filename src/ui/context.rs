//! Landing context shared by sections and modals
//!
//! Holds the configured API client (with the attribution captured on
//! hydration) and the open/closed state of the two lead modals. Every CTA
//! goes through `open_trial` / `open_demo`, which also reports the click.

use leptos::prelude::*;
#[cfg(not(feature = "ssr"))]
use leptos::task::spawn_local;
#[cfg(not(feature = "ssr"))]
use serde_json::{Map, Value};

use crate::core::api::{ApiClient, CtaClick, CtaKind};
#[cfg(not(feature = "ssr"))]
use crate::core::api::LANDING_PAGE_ID;
use crate::ui::browser::{capture_attribution, client_settings};
use crate::ui::transport::FetchTransport;

/// Client used by the page
pub type LandingClient = ApiClient<FetchTransport>;

#[derive(Clone, Copy)]
pub struct LandingContext {
    client: StoredValue<LandingClient>,
    /// Trial signup modal visibility
    pub trial_open: RwSignal<bool>,
    /// Demo scheduling modal visibility
    pub demo_open: RwSignal<bool>,
    page_viewed: StoredValue<bool>,
}

impl LandingContext {
    pub fn client(&self) -> LandingClient {
        self.client.get_value()
    }

    /// Open the trial modal from the CTA at `location`
    pub fn open_trial(&self, location: &str) {
        self.trial_open.set(true);
        self.report_click(CtaKind::Trial, location);
    }

    /// Open the demo modal from the CTA at `location`
    pub fn open_demo(&self, location: &str) {
        self.demo_open.set(true);
        self.report_click(CtaKind::Demo, location);
    }

    fn report_click(&self, cta_type: CtaKind, location: &str) {
        let click = CtaClick {
            cta_type,
            cta_location: location.to_string(),
        };

        #[cfg(not(feature = "ssr"))]
        {
            let client = self.client();
            spawn_local(async move {
                client.track_cta_click(&click).await;
            });
        }
        #[cfg(feature = "ssr")]
        {
            let _ = click;
        }
    }

    /// Mark the page view as reported; true only the first time
    fn first_page_view(&self) -> bool {
        let first = !self.page_viewed.get_value();
        self.page_viewed.set_value(true);
        first
    }

    /// Report the page view; later calls in the same page load are ignored
    pub fn report_page_view(&self) {
        if !self.first_page_view() {
            return;
        }

        #[cfg(not(feature = "ssr"))]
        {
            let client = self.client();
            let mut properties = Map::new();
            properties.insert("page".to_string(), Value::from(LANDING_PAGE_ID));
            if let Some(window) = web_sys::window() {
                properties.insert(
                    "path".to_string(),
                    Value::from(window.location().pathname().unwrap_or_default()),
                );
            }

            spawn_local(async move {
                client.track_page_view(properties).await;
            });
        }
    }
}

/// Provide the landing context to the component tree.
///
/// Called once from `App`, so the attribution is captured once per page load
/// and survives client-side navigation between routes.
pub fn provide_landing_context() -> LandingContext {
    let settings = client_settings();
    let client = ApiClient::new(
        FetchTransport::new(settings.timeout_ms),
        &settings.backend_url,
        capture_attribution(),
    );

    let ctx = LandingContext {
        client: StoredValue::new(client),
        trial_open: RwSignal::new(false),
        demo_open: RwSignal::new(false),
        page_viewed: StoredValue::new(false),
    };

    provide_context(ctx);
    ctx
}

/// Get the landing context from the component tree
pub fn use_landing_context() -> LandingContext {
    expect_context::<LandingContext>()
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_page_view_is_reported_once() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = provide_landing_context();

            assert!(ctx.first_page_view());
            assert!(!ctx.first_page_view());

            // A remounted page sees the same context and does not report again
            let remounted = use_landing_context();
            assert!(!remounted.first_page_view());
        });
    }

    #[test]
    fn test_routed_pages_share_one_client() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = provide_landing_context();
            ctx.trial_open.set(true);

            let page = Owner::new();
            page.with(|| {
                let seen = use_landing_context();
                assert_eq!(seen.client().attribution(), ctx.client().attribution());
                assert!(seen.trial_open.get_untracked());
            });
        });
    }
}
