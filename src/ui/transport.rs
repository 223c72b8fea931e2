//! Browser transport over `fetch` (gloo-net) with a fixed timeout

use serde_json::Value;

use crate::core::api::{ApiError, Transport};

/// `fetch`-backed transport; requests race a timer of `timeout_ms`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTransport {
    timeout_ms: u32,
}

impl FetchTransport {
    pub fn new(timeout_ms: u32) -> Self {
        Self { timeout_ms }
    }

    pub fn timeout_ms(&self) -> u32 {
        self.timeout_ms
    }

    #[cfg(not(feature = "ssr"))]
    async fn with_timeout<F>(&self, request: F) -> Result<Value, ApiError>
    where
        F: std::future::Future<Output = Result<Value, ApiError>>,
    {
        use futures::future::{Either, select};
        use gloo_timers::future::TimeoutFuture;

        match select(Box::pin(request), TimeoutFuture::new(self.timeout_ms)).await {
            Either::Left((result, _)) => result,
            Either::Right(_) => Err(ApiError::Timeout),
        }
    }
}

#[cfg(not(feature = "ssr"))]
async fn read_response(response: gloo_net::http::Response) -> Result<Value, ApiError> {
    if response.ok() {
        return response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()));
    }

    let body = response.json::<Value>().await.ok();
    Err(ApiError::from_response(response.status(), body.as_ref()))
}

#[cfg(not(feature = "ssr"))]
impl Transport for FetchTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<Value, ApiError> {
        use gloo_net::http::Request;

        let request = Request::post(url)
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        self.with_timeout(async move {
            let response = request
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            read_response(response).await
        })
        .await
    }

    async fn get_json(&self, url: &str) -> Result<Value, ApiError> {
        use gloo_net::http::Request;

        let request = Request::get(url);

        self.with_timeout(async move {
            let response = request
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            read_response(response).await
        })
        .await
    }
}

/// Server build: page requests are only ever issued from the browser
#[cfg(feature = "ssr")]
impl Transport for FetchTransport {
    async fn post_json(&self, _url: &str, _body: &Value) -> Result<Value, ApiError> {
        Err(ApiError::Network("fetch is not available on server".to_string()))
    }

    async fn get_json(&self, _url: &str) -> Result<Value, ApiError> {
        Err(ApiError::Network("fetch is not available on server".to_string()))
    }
}
