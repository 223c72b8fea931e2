//! `reqwest` transport used by the server process

use std::time::Duration;

use serde_json::Value;

use crate::core::api::{ApiError, Transport};

/// Server-side HTTP transport with a fixed timeout
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(timeout_ms: u32) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(u64::from(timeout_ms)))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self { client })
    }
}

fn request_error(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::Timeout
    } else {
        ApiError::Network(e.to_string())
    }
}

async fn read_response(response: reqwest::Response) -> Result<Value, ApiError> {
    let status = response.status();

    if status.is_success() {
        return response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()));
    }

    let body = response.json::<Value>().await.ok();
    Err(ApiError::from_response(status.as_u16(), body.as_ref()))
}

impl Transport for ReqwestTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<Value, ApiError> {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(request_error)?;

        read_response(response).await
    }

    async fn get_json(&self, url: &str) -> Result<Value, ApiError> {
        let response = self.client.get(url).send().await.map_err(request_error)?;

        read_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::api::ApiClient;
    use crate::core::attribution::Attribution;

    #[tokio::test]
    async fn test_unreachable_backend_reads_as_unhealthy() {
        let transport = ReqwestTransport::new(500).unwrap();
        // Port 9 (discard) on localhost is not expected to serve HTTP
        let client = ApiClient::new(transport, "http://127.0.0.1:9", Attribution::default());

        let health = client.health_check().await;
        assert!(!health.is_healthy());
        assert_eq!(health.status, "unhealthy");
    }
}
