// src/services/http.rs
use log::{debug, error};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::models::ClientError;

// Marker message the backend sends with a 403 when a second factor is needed
const TWO_FACTOR_MARKER: &str = "2FA_REQUIRED";

// Error bodies (and several success bodies) carry a single message field
#[derive(Deserialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

// Shared HTTP client for all resource services. Holds the API base URL and
// attaches the bearer token when one is supplied.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        ApiClient {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn authorize(
        request: reqwest::RequestBuilder,
        token: Option<&str>,
    ) -> reqwest::RequestBuilder {
        match token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
    ) -> Result<T, ClientError> {
        let request = Self::authorize(self.http.get(self.url(path)), token);
        Self::execute(request).await
    }

    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        token: Option<&str>,
    ) -> Result<T, ClientError> {
        let request = Self::authorize(self.http.post(self.url(path)), token).json(body);
        Self::execute(request).await
    }

    pub async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        token: Option<&str>,
    ) -> Result<T, ClientError> {
        let request = Self::authorize(self.http.put(self.url(path)), token).json(body);
        Self::execute(request).await
    }

    pub async fn delete(&self, path: &str, token: Option<&str>) -> Result<(), ClientError> {
        let request = Self::authorize(self.http.delete(self.url(path)), token);
        let response = request.send().await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::reduce_error(response).await)
        }
    }

    async fn execute<T: DeserializeOwned>(
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request.send().await?;

        if !response.status().is_success() {
            return Err(Self::reduce_error(response).await);
        }

        response.json::<T>().await.map_err(|e| {
            error!("❌ Failed to decode response body: {:?}", e);
            ClientError::Network("Unexpected response from the server".to_string())
        })
    }

    // Reduce an error response to one human-readable message, preferring the
    // server-supplied message field over a generic status line
    async fn reduce_error(response: reqwest::Response) -> ClientError {
        let status = response.status().as_u16();
        let message = response
            .json::<MessageResponse>()
            .await
            .map(|body| body.message)
            .unwrap_or_else(|_| format!("Request failed with status {}", status));

        if status == 403 && message == TWO_FACTOR_MARKER {
            return ClientError::TwoFactorRequired;
        }

        debug!("API error {}: {}", status, message);
        ClientError::Api { status, message }
    }
}
