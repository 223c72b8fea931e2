//! In-memory transport for tests

use std::cell::RefCell;

use serde_json::Value;

use crate::core::api::{ApiError, Transport};

/// A request seen by [`MockTransport`]
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub url: String,
    pub body: Option<Value>,
}

/// Records every request and answers from scripted responses.
///
/// Responses are matched by URL suffix. Unmatched requests fail with a
/// network error.
#[derive(Debug, Default)]
pub struct MockTransport {
    routes: Vec<(String, Result<Value, ApiError>)>,
    requests: RefCell<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, path: &str, response: Result<Value, ApiError>) -> Self {
        self.routes.push((path.to_string(), response));
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.borrow().clone()
    }

    pub fn requests_to(&self, path: &str) -> Vec<RecordedRequest> {
        self.requests
            .borrow()
            .iter()
            .filter(|r| r.url.ends_with(path))
            .cloned()
            .collect()
    }

    fn answer(&self, method: &'static str, url: &str, body: Option<&Value>) -> Result<Value, ApiError> {
        self.requests.borrow_mut().push(RecordedRequest {
            method,
            url: url.to_string(),
            body: body.cloned(),
        });

        self.routes
            .iter()
            .find(|(path, _)| url.ends_with(path.as_str()))
            .map(|(_, response)| response.clone())
            .unwrap_or_else(|| Err(ApiError::Network(format!("no route for {url}"))))
    }
}

impl Transport for MockTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<Value, ApiError> {
        self.answer("POST", url, Some(body))
    }

    async fn get_json(&self, url: &str) -> Result<Value, ApiError> {
        self.answer("GET", url, None)
    }
}
