//! HTTP transport for the back-office API

use crate::{ApiError, ApiResult, ClientConfig};
use reqwest::Client;
use serde::{Serialize, de::DeserializeOwned};

/// HTTP client for making requests against the back-office API
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Full URL for a path under the API prefix
    fn url(&self, path: &str) -> String {
        format!("{}/api/v1/{}", self.base_url, path)
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        tracing::debug!(path, "GET");
        let response = self.client.get(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        tracing::debug!(path, "POST");
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        tracing::debug!(path, "PUT");
        let response = self.client.put(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a DELETE request; success responses carry no body
    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        tracing::debug!(path, "DELETE");
        let response = self.client.delete(self.url(path)).send().await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            tracing::warn!(%status, path, "delete rejected");
            return Err(ApiError::remote(status, &text));
        }
        Ok(())
    }

    /// Handle a JSON-bearing HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            tracing::warn!(%status, "request rejected");
            return Err(ApiError::remote(status, &text));
        }

        response.json().await.map_err(Into::into)
    }
}
