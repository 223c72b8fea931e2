//! Marketing attribution captured from the landing URL
//!
//! The allow-listed query parameters and the document referrer are read once
//! when the page hydrates. The resulting [`Attribution`] is immutable and is
//! handed to the API client at construction, which attaches it to every
//! outbound payload in one of three shapes:
//!
//! - nested under a `utm` key (form submissions, CTA clicks)
//! - spread into the top-level object (page views)
//! - spread into a nested `properties` object (generic events)

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

/// Query parameters copied from the landing URL, in capture order
pub const ATTRIBUTION_KEYS: [&str; 13] = [
    "utm_source",
    "utm_medium",
    "utm_campaign",
    "utm_term",
    "utm_content",
    "gclid",
    "gbraid",
    "wbraid",
    "fbclid",
    "msclkid",
    "device",
    "placement",
    "dkinsertion",
];

/// Key under which the referrer is stored
pub const REFERRER_KEY: &str = "referrer";

/// Key used when attribution is nested into a payload
pub const NESTED_KEY: &str = "utm";

/// Immutable attribution mapping for one page load
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Attribution(BTreeMap<String, String>);

impl Attribution {
    /// Capture attribution from a query-parameter lookup and a referrer.
    ///
    /// Only allow-listed keys with a non-empty value are kept. The referrer
    /// is added when non-empty.
    pub fn capture<F>(lookup: F, referrer: &str) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut params = BTreeMap::new();

        for key in ATTRIBUTION_KEYS {
            if let Some(value) = lookup(key).filter(|v| !v.is_empty()) {
                params.insert(key.to_string(), value);
            }
        }

        if !referrer.is_empty() {
            params.insert(REFERRER_KEY.to_string(), referrer.to_string());
        }

        Self(params)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Attribution as a JSON object
    pub fn to_json(&self) -> Value {
        Value::Object(
            self.0
                .iter()
                .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                .collect(),
        )
    }

    /// Insert the whole mapping under `utm`, replacing any existing value
    pub fn nest_into(&self, payload: &mut Map<String, Value>) {
        payload.insert(NESTED_KEY.to_string(), self.to_json());
    }

    /// Copy every entry into `payload`; attribution wins on key clashes
    pub fn spread_into(&self, payload: &mut Map<String, Value>) {
        for (key, value) in &self.0 {
            payload.insert(key.clone(), Value::String(value.clone()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_capture_keeps_only_allow_listed_keys() {
        let attribution = Attribution::capture(
            lookup_from(&[
                ("utm_source", "google"),
                ("utm_campaign", "black-friday"),
                ("ref", "ignored"),
                ("page", "2"),
            ]),
            "",
        );

        assert_eq!(attribution.len(), 2);
        assert_eq!(attribution.get("utm_source"), Some("google"));
        assert_eq!(attribution.get("utm_campaign"), Some("black-friday"));
        assert_eq!(attribution.get("ref"), None);
    }

    #[test]
    fn test_capture_skips_empty_values() {
        let attribution =
            Attribution::capture(lookup_from(&[("utm_source", ""), ("gclid", "abc")]), "");

        assert_eq!(attribution.get("utm_source"), None);
        assert_eq!(attribution.get("gclid"), Some("abc"));
    }

    #[test]
    fn test_capture_adds_referrer_when_present() {
        let with = Attribution::capture(|_| None, "https://www.google.com/");
        let without = Attribution::capture(|_| None, "");

        assert_eq!(with.get(REFERRER_KEY), Some("https://www.google.com/"));
        assert!(without.is_empty());
    }

    #[test]
    fn test_every_allow_listed_key_is_captured() {
        let attribution = Attribution::capture(|key| Some(format!("v-{key}")), "");
        assert_eq!(attribution.len(), ATTRIBUTION_KEYS.len());
        for key in ATTRIBUTION_KEYS {
            assert_eq!(attribution.get(key), Some(format!("v-{key}").as_str()));
        }
    }

    #[test]
    fn test_nest_into_overrides_existing_utm() {
        let attribution = Attribution::capture(lookup_from(&[("utm_medium", "cpc")]), "");
        let mut payload = json!({ "name": "Ana", "utm": "stale" })
            .as_object()
            .cloned()
            .unwrap();

        attribution.nest_into(&mut payload);

        assert_eq!(Value::Object(payload), json!({
            "name": "Ana",
            "utm": { "utm_medium": "cpc" }
        }));
    }

    #[test]
    fn test_spread_into_wins_on_clash() {
        let attribution = Attribution::capture(lookup_from(&[("device", "mobile")]), "https://x.io");
        let mut payload = json!({ "device": "desktop", "page": "home" })
            .as_object()
            .cloned()
            .unwrap();

        attribution.spread_into(&mut payload);

        assert_eq!(Value::Object(payload), json!({
            "device": "mobile",
            "page": "home",
            "referrer": "https://x.io"
        }));
    }

    #[test]
    fn test_serializes_as_flat_object() {
        let attribution = Attribution::capture(lookup_from(&[("fbclid", "xyz")]), "");
        assert_eq!(
            serde_json::to_value(&attribution).unwrap(),
            json!({ "fbclid": "xyz" })
        );
    }
}
