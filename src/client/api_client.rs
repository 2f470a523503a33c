use awc::http::StatusCode;
use awc::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Environment variable overriding the API base URL.
pub const API_URL_VAR: &str = "PRODUCT_API_URL";

const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// The single normalized failure shape of the client: any transport error or
/// non-2xx status ends up here, combining the code (when one was received)
/// with a human-readable message. Failures are final; nothing is retried.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct ApiError {
    pub status: Option<u16>,
    pub message: String,
}

impl ApiError {
    fn transport(err: impl std::fmt::Display) -> Self {
        Self {
            status: None,
            message: format!("request failed: {err}"),
        }
    }

    fn from_status(status: StatusCode) -> Self {
        Self {
            status: Some(status.as_u16()),
            message: format!(
                "code {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("unknown error")
            ),
        }
    }
}

/// Thin HTTP wrapper over the product API. One request per call, a single
/// result or a single error, no retries and no timeout beyond the transport
/// default.
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self {
            http: Client::default(),
            base_url,
        }
    }

    /// Reads the base URL from `PRODUCT_API_URL`, falling back to the local
    /// development server.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(API_URL_VAR).unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned());
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    fn check(status: StatusCode) -> Result<(), ApiError> {
        if status.is_success() {
            Ok(())
        } else {
            Err(ApiError::from_status(status))
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let mut response = self
            .http
            .get(self.url(endpoint))
            .send()
            .await
            .map_err(ApiError::transport)?;

        Self::check(response.status())?;
        response.json::<T>().await.map_err(ApiError::transport)
    }

    pub async fn post<T, B>(&self, endpoint: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let mut response = self
            .http
            .post(self.url(endpoint))
            .send_json(body)
            .await
            .map_err(ApiError::transport)?;

        Self::check(response.status())?;
        response.json::<T>().await.map_err(ApiError::transport)
    }

    /// A successful PUT carries no response body.
    pub async fn put<B: Serialize>(&self, endpoint: &str, body: &B) -> Result<(), ApiError> {
        let response = self
            .http
            .put(self.url(endpoint))
            .send_json(body)
            .await
            .map_err(ApiError::transport)?;

        Self::check(response.status())
    }

    pub async fn delete(&self, endpoint: &str) -> Result<(), ApiError> {
        let response = self
            .http
            .delete(self.url(endpoint))
            .send()
            .await
            .map_err(ApiError::transport)?;

        Self::check(response.status())
    }
}
