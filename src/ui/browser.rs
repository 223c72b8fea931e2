//! Access to the page environment: query string, referrer, shell meta tags

use crate::core::api::DEFAULT_TIMEOUT_MS;
use crate::core::attribution::Attribution;

/// `<meta>` carrying the backend base URL, written by the server shell
pub const BACKEND_URL_META: &str = "backend-url";

/// `<meta>` carrying the request timeout in milliseconds
pub const API_TIMEOUT_META: &str = "api-timeout-ms";

/// Client settings read from the shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub backend_url: String,
    pub timeout_ms: u32,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            backend_url: String::new(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

#[cfg(not(feature = "ssr"))]
fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    document
        .query_selector(&format!("meta[name=\"{}\"]", name))
        .ok()
        .flatten()?
        .get_attribute("content")
}

/// Read backend settings injected by the server
#[cfg(not(feature = "ssr"))]
pub fn client_settings() -> ClientSettings {
    let defaults = ClientSettings::default();

    ClientSettings {
        backend_url: meta_content(BACKEND_URL_META).unwrap_or(defaults.backend_url),
        timeout_ms: meta_content(API_TIMEOUT_META)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(defaults.timeout_ms),
    }
}

/// On the server the settings come straight from the environment
#[cfg(feature = "ssr")]
pub fn client_settings() -> ClientSettings {
    let config = crate::core::config::Config::from_env();
    ClientSettings {
        backend_url: config.backend_url,
        timeout_ms: config.api_timeout_ms,
    }
}

/// Capture attribution from `location.search` and `document.referrer`
#[cfg(not(feature = "ssr"))]
pub fn capture_attribution() -> Attribution {
    let Some(window) = web_sys::window() else {
        return Attribution::default();
    };

    let search = window.location().search().unwrap_or_default();
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok();
    let referrer = window
        .document()
        .map(|document| document.referrer())
        .unwrap_or_default();

    Attribution::capture(
        |key| params.as_ref().and_then(|p| p.get(key)),
        &referrer,
    )
}

#[cfg(feature = "ssr")]
pub fn capture_attribution() -> Attribution {
    Attribution::default()
}
