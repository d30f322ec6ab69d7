//! HTTP client for the inventory API, used by the `inventory-cli` binary.

use crate::{
    entities::{Brand, Category, Store},
    handlers::products::{CreateProductRequest, ProductCreatedResponse},
    queries::ProductView,
};
use serde::{de::DeserializeOwned, Deserialize};
use std::time::Duration;
use tracing::{debug, instrument};

pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Shown when a failing response carries no usable `message`
pub const FALLBACK_ERROR_MESSAGE: &str = "An error occurred.";

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("{message} (HTTP {status})")]
    Api { status: u16, message: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ClientError {
    /// The text a user should see for this failure
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Api { message, .. } => message.clone(),
            ClientError::Transport(e) => e.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string());
        debug!(status = status.as_u16(), %message, "api call failed");

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let response = self.http.get(self.url(path)).send().await?;
        Self::decode(response).await
    }

    #[instrument(skip(self))]
    pub async fn categories(&self) -> Result<Vec<Category>, ClientError> {
        self.get("/api/categories").await
    }

    #[instrument(skip(self))]
    pub async fn brands(&self) -> Result<Vec<Brand>, ClientError> {
        self.get("/api/brands").await
    }

    #[instrument(skip(self))]
    pub async fn stores(&self) -> Result<Vec<Store>, ClientError> {
        self.get("/api/stores").await
    }

    #[instrument(skip(self))]
    pub async fn products(&self) -> Result<Vec<ProductView>, ClientError> {
        self.get("/api/products").await
    }

    #[instrument(skip(self, request), fields(pname = %request.pname))]
    pub async fn create_product(
        &self,
        request: &CreateProductRequest,
    ) -> Result<ProductCreatedResponse, ClientError> {
        let response = self
            .http
            .post(self.url("/api/products"))
            .json(request)
            .send()
            .await?;
        Self::decode(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_dropped_from_base_url() {
        let client = ApiClient::new("http://localhost:3000/").unwrap();
        assert_eq!(client.base_url(), DEFAULT_API_URL);
        assert_eq!(client.url("/api/brands"), "http://localhost:3000/api/brands");
    }

    #[test]
    fn api_errors_show_the_server_message() {
        let err = ClientError::Api {
            status: 500,
            message: "Database error".into(),
        };
        assert_eq!(err.user_message(), "Database error");
        assert_eq!(err.to_string(), "Database error (HTTP 500)");
    }
}
