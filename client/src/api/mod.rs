//! REST client for the pharmacy API
//!
//! One method per endpoint, grouped by resource. A bearer token is attached
//! to every request once `login` has succeeded; it lives only in memory.

mod auth;
mod medicines;
mod sales;
mod suppliers;

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::{rejection_message, unauthorized_message, ClientError, ClientResult};

/// Pharmacy API client
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Client for an already-issued token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.client.request(method, self.url(path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send a request and map non-success statuses to `ClientError`
    async fn send(&self, builder: RequestBuilder, path: &str) -> ClientResult<Response> {
        let response = builder.send().await?;
        let status = response.status();
        tracing::debug!("{} -> {}", path, status);

        if status.is_success() {
            return Ok(response);
        }

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                let body = response.text().await.unwrap_or_default();
                let message = unauthorized_message(status, &body);
                tracing::warn!("Request to {} unauthorized ({}): {}", path, status, message);
                Err(ClientError::Unauthorized { status, message })
            }
            StatusCode::NOT_FOUND => Err(ClientError::NotFound(path.to_string())),
            _ => {
                let body = response.text().await.unwrap_or_default();
                let message = rejection_message(status, &body);
                tracing::warn!("Request to {} rejected ({}): {}", path, status, message);
                Err(ClientError::Rejected { status, message })
            }
        }
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        path: &str,
    ) -> ClientResult<T> {
        let response = self.send(builder, path).await?;
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|source| ClientError::Decode {
            path: path.to_string(),
            source,
        })
    }

    async fn send_text(&self, builder: RequestBuilder, path: &str) -> ClientResult<String> {
        let response = self.send(builder, path).await?;
        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_normalised() {
        let config = ApiConfig {
            base_url: "http://localhost:8080/".into(),
            timeout_secs: 5,
        };
        let client = ApiClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(client.url("/api/sales"), "http://localhost:8080/api/sales");
    }

    #[test]
    fn test_token_handling() {
        let client = ApiClient::new(&ApiConfig::default()).unwrap();
        assert!(!client.is_authenticated());

        let client = client.with_token("abc");
        assert_eq!(client.token(), Some("abc"));
    }
}
