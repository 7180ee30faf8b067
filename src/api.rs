//! HTTP client for the complaints API.
//!
//! DESIGN
//! ======
//! `ComplaintsApi` is the seam between the session controller and the
//! network, so tests drive the lifecycle with a mock instead of a live
//! server. `HttpComplaintsApi` is the `reqwest` implementation.
//!
//! The save endpoint's HTTP status is not checked: the body decides. Any JSON
//! body without a truthy `Success` is a rejection, even one that is not an
//! object. A non-JSON body is a parse error whose text reaches the user.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::time::Duration;

use lifecycle::endpoints::{list_url, save_url};
use lifecycle::{Complaint, SaveRequest, SaveResponse};

use crate::config::ClientConfig;

/// Errors produced by complaints API calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request could not be sent or its body could not be read.
    #[error("request failed: {0}")]
    Request(String),

    /// The list endpoint answered with a non-success status.
    #[error("unexpected response status: HTTP {status}")]
    Status { status: u16 },

    /// The response body was not the expected JSON.
    #[error("response parse failed: {0}")]
    Parse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

/// Remote operations the client needs. Enables mocking in tests.
#[async_trait::async_trait]
pub trait ComplaintsApi: Send + Sync {
    /// `GET TestApi/GetComplains`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-success status or a
    /// body that is not a complaint array.
    async fn list_complaints(&self) -> Result<Vec<Complaint>, ApiError>;

    /// `POST TestApi/SaveComplain`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure or a non-JSON body.
    async fn save_complaint(&self, request: &SaveRequest) -> Result<SaveResponse, ApiError>;
}

pub struct HttpComplaintsApi {
    http: reqwest::Client,
    list_url: String,
    save_url: String,
}

impl HttpComplaintsApi {
    /// Build a client from typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| ApiError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, list_url: list_url(&config.base_url), save_url: save_url(&config.base_url) })
    }
}

#[async_trait::async_trait]
impl ComplaintsApi for HttpComplaintsApi {
    async fn list_complaints(&self) -> Result<Vec<Complaint>, ApiError> {
        tracing::debug!(url = %self.list_url, "fetching complaints");
        let response = self
            .http
            .get(&self.list_url)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { status: status.as_u16() });
        }
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        parse_list(&body)
    }

    async fn save_complaint(&self, request: &SaveRequest) -> Result<SaveResponse, ApiError> {
        tracing::debug!(url = %self.save_url, "saving complaint");
        let response = self
            .http
            .post(&self.save_url)
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "save endpoint returned non-success status");
        }
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        parse_save(&body)
    }
}

fn parse_list(body: &str) -> Result<Vec<Complaint>, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))
}

fn parse_save(body: &str) -> Result<SaveResponse, ApiError> {
    SaveResponse::from_body(body).map_err(|e| ApiError::Parse(e.to_string()))
}
