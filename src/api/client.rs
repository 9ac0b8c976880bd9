//! HTTP client for the metaverse listing endpoint
//!
//! Posts a [`MultipartPayload`] with [`reqwest`] and sorts failures into
//! the three [`SubmitError`] kinds the form can display.

use super::error::SubmitError;
use super::payload::MultipartPayload;
use super::traits::{SubmissionApi, SubmitResponse};
use anyhow::{Context, Result};
use async_trait::async_trait;

/// Endpoint used when neither config nor environment names one
pub const DEFAULT_ENDPOINT: &str = "https://bfm-backend.vercel.app/api/metaverses";

/// User agent sent when the config does not override it
pub const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Client for the submission endpoint
pub struct SubmissionClient {
    client: reqwest::Client,
    endpoint: String,
}

impl SubmissionClient {
    /// Create a client posting to `endpoint`
    pub fn new(endpoint: impl Into<String>, user_agent: Option<&str>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent.unwrap_or(DEFAULT_USER_AGENT))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self::with_client(client, endpoint))
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    async fn read_success(response: reqwest::Response) -> Result<SubmitResponse, SubmitError> {
        let status = response.status().as_u16();
        let text = response.text().await.map_err(SubmitError::from_transport)?;
        let body = serde_json::from_str(&text).unwrap_or(serde_json::Value::String(text));
        Ok(SubmitResponse { status, body })
    }
}

#[async_trait]
impl SubmissionApi for SubmissionClient {
    fn endpoint(&self) -> String {
        self.endpoint.clone()
    }

    async fn submit(&self, payload: MultipartPayload) -> Result<SubmitResponse, SubmitError> {
        let form = payload.into_form().await?;

        tracing::debug!(endpoint = %self.endpoint, "Sending submission");
        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(SubmitError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), body = %body, "Server rejected submission");
            return Err(SubmitError::rejected(status.as_u16(), &body));
        }

        Self::read_success(response).await
    }
}
