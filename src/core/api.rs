//! Landing backend API client
//!
//! `ApiClient` builds every endpoint from one backend base URL and attaches
//! the page's [`Attribution`] to each outbound payload. The HTTP layer is a
//! [`Transport`] so the same client runs on top of `gloo-net` in the browser,
//! `reqwest` on the server, and an in-memory mock in tests.
//!
//! Analytics calls are fire-and-forget: failures are logged and swallowed.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::attribution::Attribution;

/// Fixed request timeout applied by every transport
pub const DEFAULT_TIMEOUT_MS: u32 = 10_000;

/// Page identifier sent with analytics events
pub const LANDING_PAGE_ID: &str = "whatsapp-lead-generation";

/// Errors returned by a transport or while decoding a response
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The backend answered with a non-2xx status
    #[error("HTTP {status}")]
    Status { status: u16, detail: Option<String> },

    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// No response within the configured timeout
    #[error("Request timed out")]
    Timeout,

    /// The response body was not what we expected
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a status error, taking `detail` from a `{"detail": "..."}` body
    pub fn from_response(status: u16, body: Option<&Value>) -> Self {
        let detail = body
            .and_then(|b| b.get("detail"))
            .and_then(Value::as_str)
            .filter(|d| !d.trim().is_empty())
            .map(str::to_string);

        ApiError::Status { status, detail }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Transport-level failure (no HTTP status available)
    pub fn is_connectivity(&self) -> bool {
        matches!(self, ApiError::Network(_) | ApiError::Timeout)
    }
}

/// Minimal JSON-over-HTTP transport
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<Value, ApiError>;
    async fn get_json(&self, url: &str) -> Result<Value, ApiError>;
}

/// Trial signup / demo interest submission
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadSubmission {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub company: String,
    pub notes: String,
    pub action_type: String,
}

/// Demo booking request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoRequest {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub company: String,
    /// Absolute start time of the selected slot
    pub preferred_datetime: chrono::DateTime<chrono::Utc>,
    pub timezone: String,
}

/// Response of both landing endpoints
///
/// Timestamps are kept as the raw strings the backend sent; see
/// `schedule::parse_backend_timestamp`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LandingResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub trial_expires: Option<String>,
    #[serde(default)]
    pub demo_scheduled: Option<String>,
    #[serde(default)]
    pub calendar_event_id: Option<String>,
}

/// Backend liveness
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub services: Option<Value>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl HealthStatus {
    pub fn unhealthy() -> Self {
        Self {
            status: "unhealthy".to_string(),
            services: None,
            timestamp: None,
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Analytics event names accepted by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventName {
    LandingView,
    CtaClick,
    FormSubmit,
    TrialStarted,
    DemoScheduled,
}

/// Generic analytics event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsEvent {
    pub event: EventName,
    pub properties: Map<String, Value>,
}

impl AnalyticsEvent {
    pub fn new(event: EventName) -> Self {
        Self {
            event,
            properties: Map::new(),
        }
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.properties.insert(key.to_string(), value.into());
        self
    }
}

/// Which call-to-action was clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CtaKind {
    Trial,
    Demo,
}

/// Call-to-action click
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CtaClick {
    pub cta_type: CtaKind,
    /// Where on the page the button lives, e.g. `hero` or `pricing:Essential`
    pub cta_location: String,
}

/// Message shown when a trial submission fails
pub fn submit_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Status { status: 429, detail } => detail
            .clone()
            .unwrap_or_else(|| "Muitas tentativas. Tente novamente mais tarde.".to_string()),
        ApiError::Status { status: 400, detail } => detail
            .clone()
            .unwrap_or_else(|| "Dados inválidos. Verifique os campos.".to_string()),
        ApiError::Network(_) | ApiError::Timeout => {
            "Erro de conexão. Verifique sua internet.".to_string()
        }
        _ => "Erro interno. Tente novamente.".to_string(),
    }
}

/// Message shown when a demo booking fails
pub fn schedule_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Status { status: 400, detail } => detail
            .clone()
            .unwrap_or_else(|| "Data/hora inválida.".to_string()),
        ApiError::Status {
            status: 401..=499,
            detail: Some(detail),
        } => detail.clone(),
        ApiError::Network(_) | ApiError::Timeout => "Erro de conexão. Tente novamente.".to_string(),
        _ => "Erro ao agendar demo. Tente novamente.".to_string(),
    }
}

fn to_object<S: Serialize>(value: &S) -> Result<Map<String, Value>, ApiError> {
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(ApiError::Decode(format!("expected an object, got {other}"))),
        Err(e) => Err(ApiError::Decode(e.to_string())),
    }
}

/// Configured backend client
#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    transport: T,
    api_base: String,
    attribution: Attribution,
}

impl<T: Transport> ApiClient<T> {
    /// Create a client for `backend_url` (empty means same origin)
    pub fn new(transport: T, backend_url: &str, attribution: Attribution) -> Self {
        Self {
            transport,
            api_base: format!("{}/api", backend_url.trim().trim_end_matches('/')),
            attribution,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn attribution(&self) -> &Attribution {
        &self.attribution
    }

    /// Absolute URL of an API path such as `/landings/submit`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    /// `POST /landings/submit`; attribution nested under `utm`
    pub async fn submit_form(&self, submission: &LeadSubmission) -> Result<LandingResponse, ApiError> {
        let mut payload = to_object(submission)?;
        self.attribution.nest_into(&mut payload);

        let response = self
            .transport
            .post_json(&self.endpoint("/landings/submit"), &Value::Object(payload))
            .await?;

        serde_json::from_value(response).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// `POST /landings/demo/schedule`; attribution nested under `utm`
    pub async fn schedule_demo(&self, request: &DemoRequest) -> Result<LandingResponse, ApiError> {
        let mut payload = to_object(request)?;
        self.attribution.nest_into(&mut payload);

        let response = self
            .transport
            .post_json(&self.endpoint("/landings/demo/schedule"), &Value::Object(payload))
            .await?;

        serde_json::from_value(response).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// `GET /landings/health`; any failure reads as unhealthy
    pub async fn health_check(&self) -> HealthStatus {
        match self.transport.get_json(&self.endpoint("/landings/health")).await {
            Ok(body) => serde_json::from_value(body).unwrap_or_else(|e| {
                leptos::logging::warn!("Health check returned an unexpected body: {}", e);
                HealthStatus::unhealthy()
            }),
            Err(e) => {
                leptos::logging::warn!("Health check failed: {}", e);
                HealthStatus::unhealthy()
            }
        }
    }

    /// Page view; attribution spread into the top-level object
    pub async fn track_page_view(&self, properties: Map<String, Value>) {
        let mut payload = properties;
        self.attribution.spread_into(&mut payload);

        if let Err(e) = self
            .transport
            .post_json(&self.endpoint("/analytics/page_view"), &Value::Object(payload))
            .await
        {
            leptos::logging::warn!("Analytics page view failed: {}", e);
        }
    }

    /// CTA click; attribution nested under `utm`
    pub async fn track_cta_click(&self, click: &CtaClick) {
        let result = async {
            let mut payload = to_object(click)?;
            self.attribution.nest_into(&mut payload);
            self.transport
                .post_json(&self.endpoint("/analytics/cta_click"), &Value::Object(payload))
                .await
        }
        .await;

        if let Err(e) = result {
            leptos::logging::warn!("Analytics CTA click failed: {}", e);
        }
    }

    /// Generic event; attribution spread into `properties`
    pub async fn track_event(&self, event: AnalyticsEvent) {
        let mut event = event;
        self.attribution.spread_into(&mut event.properties);

        let result = async {
            let payload = to_object(&event)?;
            self.transport
                .post_json(&self.endpoint("/analytics/track"), &Value::Object(payload))
                .await
        }
        .await;

        if let Err(e) = result {
            leptos::logging::warn!("Analytics event failed: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::MockTransport;
    use serde_json::json;

    fn attribution() -> Attribution {
        Attribution::capture(
            |key| match key {
                "utm_source" => Some("google".to_string()),
                "gclid" => Some("g-123".to_string()),
                _ => None,
            },
            "https://search.example/",
        )
    }

    fn submission() -> LeadSubmission {
        LeadSubmission {
            name: "Ana Costa".to_string(),
            email: "ana@empresa.com".to_string(),
            whatsapp: "11999999999".to_string(),
            company: String::new(),
            notes: "Equipe de 5".to_string(),
            action_type: "trial".to_string(),
        }
    }

    #[test]
    fn test_endpoint_joins_base_url() {
        let client = ApiClient::new(MockTransport::new(), "https://api.kavvi.io/", Attribution::default());
        assert_eq!(
            client.endpoint("/landings/submit"),
            "https://api.kavvi.io/api/landings/submit"
        );

        let same_origin = ApiClient::new(MockTransport::new(), "", Attribution::default());
        assert_eq!(same_origin.endpoint("/landings/health"), "/api/landings/health");
    }

    #[test]
    fn test_error_detail_extraction() {
        let err = ApiError::from_response(400, Some(&json!({ "detail": "WhatsApp inválido" })));
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.detail(), Some("WhatsApp inválido"));

        // FastAPI validation errors carry a list, not a message
        let err = ApiError::from_response(422, Some(&json!({ "detail": [{ "loc": ["body"] }] })));
        assert_eq!(err.detail(), None);

        let err = ApiError::from_response(500, None);
        assert_eq!(err.detail(), None);
        assert!(!err.is_connectivity());
        assert!(ApiError::Timeout.is_connectivity());
    }

    #[test]
    fn test_submit_error_messages() {
        let with_detail = ApiError::Status {
            status: 429,
            detail: Some("Aguarde 10 minutos".to_string()),
        };
        assert_eq!(submit_error_message(&with_detail), "Aguarde 10 minutos");
        assert_eq!(
            submit_error_message(&ApiError::Status { status: 429, detail: None }),
            "Muitas tentativas. Tente novamente mais tarde."
        );
        assert_eq!(
            submit_error_message(&ApiError::Status { status: 400, detail: None }),
            "Dados inválidos. Verifique os campos."
        );
        assert_eq!(
            submit_error_message(&ApiError::Network("offline".to_string())),
            "Erro de conexão. Verifique sua internet."
        );
        assert_eq!(
            submit_error_message(&ApiError::Status {
                status: 500,
                detail: Some("boom".to_string())
            }),
            "Erro interno. Tente novamente."
        );
    }

    #[test]
    fn test_schedule_error_messages() {
        assert_eq!(
            schedule_error_message(&ApiError::Status {
                status: 400,
                detail: Some("Demos apenas em dias úteis".to_string())
            }),
            "Demos apenas em dias úteis"
        );
        assert_eq!(
            schedule_error_message(&ApiError::Status { status: 400, detail: None }),
            "Data/hora inválida."
        );
        assert_eq!(
            schedule_error_message(&ApiError::Status {
                status: 409,
                detail: Some("Horário não disponível".to_string())
            }),
            "Horário não disponível"
        );
        assert_eq!(
            schedule_error_message(&ApiError::Timeout),
            "Erro de conexão. Tente novamente."
        );
        assert_eq!(
            schedule_error_message(&ApiError::Status { status: 503, detail: None }),
            "Erro ao agendar demo. Tente novamente."
        );
    }

    #[tokio::test]
    async fn test_submit_form_nests_attribution() {
        let transport = MockTransport::new().respond(
            "/landings/submit",
            Ok(json!({
                "success": true,
                "message": "ok",
                "trial_expires": "2025-10-23T12:00:00"
            })),
        );
        let client = ApiClient::new(transport, "https://api.kavvi.io", attribution());

        let response = client.submit_form(&submission()).await.unwrap();
        assert_eq!(response.trial_expires.as_deref(), Some("2025-10-23T12:00:00"));

        let requests = client.transport().requests_to("/landings/submit");
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, "https://api.kavvi.io/api/landings/submit");
        assert_eq!(
            requests[0].body,
            Some(json!({
                "name": "Ana Costa",
                "email": "ana@empresa.com",
                "whatsapp": "11999999999",
                "company": "",
                "notes": "Equipe de 5",
                "action_type": "trial",
                "utm": {
                    "utm_source": "google",
                    "gclid": "g-123",
                    "referrer": "https://search.example/"
                }
            }))
        );
    }

    #[tokio::test]
    async fn test_submit_form_propagates_status() {
        let transport = MockTransport::new().respond(
            "/landings/submit",
            Err(ApiError::Status {
                status: 429,
                detail: None,
            }),
        );
        let client = ApiClient::new(transport, "", Attribution::default());

        let err = client.submit_form(&submission()).await.unwrap_err();
        assert_eq!(err.status(), Some(429));
    }

    #[tokio::test]
    async fn test_analytics_merge_shapes() {
        let transport = MockTransport::new()
            .respond("/analytics/page_view", Ok(json!({})))
            .respond("/analytics/cta_click", Ok(json!({})))
            .respond("/analytics/track", Ok(json!({})));
        let client = ApiClient::new(transport, "", attribution());

        let mut properties = Map::new();
        properties.insert("page".to_string(), json!(LANDING_PAGE_ID));
        client.track_page_view(properties).await;
        client
            .track_cta_click(&CtaClick {
                cta_type: CtaKind::Demo,
                cta_location: "hero".to_string(),
            })
            .await;
        client
            .track_event(AnalyticsEvent::new(EventName::FormSubmit).with("action_type", "demo"))
            .await;

        let page_view = &client.transport().requests_to("/analytics/page_view")[0];
        assert_eq!(
            page_view.body,
            Some(json!({
                "page": LANDING_PAGE_ID,
                "utm_source": "google",
                "gclid": "g-123",
                "referrer": "https://search.example/"
            }))
        );

        let cta = &client.transport().requests_to("/analytics/cta_click")[0];
        assert_eq!(
            cta.body,
            Some(json!({
                "cta_type": "demo",
                "cta_location": "hero",
                "utm": {
                    "utm_source": "google",
                    "gclid": "g-123",
                    "referrer": "https://search.example/"
                }
            }))
        );

        let track = &client.transport().requests_to("/analytics/track")[0];
        assert_eq!(
            track.body,
            Some(json!({
                "event": "form_submit",
                "properties": {
                    "action_type": "demo",
                    "utm_source": "google",
                    "gclid": "g-123",
                    "referrer": "https://search.example/"
                }
            }))
        );
    }

    #[tokio::test]
    async fn test_analytics_failures_are_swallowed() {
        let transport = MockTransport::new().respond(
            "/analytics/track",
            Err(ApiError::Network("connection refused".to_string())),
        );
        let client = ApiClient::new(transport, "", Attribution::default());

        // Completes without surfacing anything
        client.track_event(AnalyticsEvent::new(EventName::LandingView)).await;
        client.track_page_view(Map::new()).await;

        assert_eq!(client.transport().requests().len(), 2);
    }

    #[tokio::test]
    async fn test_health_check() {
        let healthy = ApiClient::new(
            MockTransport::new().respond(
                "/landings/health",
                Ok(json!({ "status": "healthy", "services": { "database": "connected" } })),
            ),
            "",
            Attribution::default(),
        );
        assert!(healthy.health_check().await.is_healthy());

        let down = ApiClient::new(
            MockTransport::new().respond(
                "/landings/health",
                Err(ApiError::Status {
                    status: 503,
                    detail: Some("Service unhealthy".to_string()),
                }),
            ),
            "",
            Attribution::default(),
        );
        assert_eq!(down.health_check().await, HealthStatus::unhealthy());

        let garbage = ApiClient::new(
            MockTransport::new().respond("/landings/health", Ok(json!([1, 2, 3]))),
            "",
            Attribution::default(),
        );
        assert!(!garbage.health_check().await.is_healthy());
    }
}
