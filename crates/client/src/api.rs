//! REST client for the churn prediction service.
//!
//! Wraps the service's HTTP API (currently the single `POST /predict`
//! endpoint) using [`reqwest`].

use std::time::Duration;

use churn_core::customer::CustomerInput;
use churn_core::prediction::PredictionResult;

use crate::config::ClientConfig;

/// HTTP client for a single prediction service instance.
pub struct PredictionApi {
    client: reqwest::Client,
    api_url: String,
}

/// Errors from the prediction service REST layer.
#[derive(Debug, thiserror::Error)]
pub enum PredictionApiError {
    /// The HTTP request itself failed (network, DNS, timeout) or the
    /// response body could not be decoded as a [`PredictionResult`].
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service returned a non-2xx status code.
    #[error("Prediction service error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl PredictionApi {
    /// Create a new API client for a prediction service.
    ///
    /// * `api_url` - Base HTTP URL, e.g. `http://localhost:8000`.
    pub fn new(api_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
        }
    }

    /// Create an API client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, api_url: String) -> Self {
        Self { client, api_url }
    }

    /// Build an API client from environment configuration, applying the
    /// optional request timeout.
    pub fn from_config(config: &ClientConfig) -> Self {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self::with_client(client, config.api_url.clone())
    }

    /// Base HTTP URL of the prediction service.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Request a churn prediction for one customer draft.
    ///
    /// Sends a `POST /predict` request with the draft serialized as a
    /// flat JSON object; every field travels as a string, exactly as
    /// captured from the form inputs.
    pub async fn predict(
        &self,
        input: &CustomerInput,
    ) -> Result<PredictionResult, PredictionApiError> {
        let response = self
            .client
            .post(format!("{}/predict", self.api_url))
            .json(input)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a
    /// [`PredictionApiError::ApiError`] containing the status and body
    /// text on failure.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, PredictionApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(PredictionApiError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, PredictionApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
