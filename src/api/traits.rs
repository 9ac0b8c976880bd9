//! Trait abstraction for the submission client to enable mocking in tests

use super::error::SubmitError;
use super::payload::MultipartPayload;
use async_trait::async_trait;

/// Successful (2xx) reply from the endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitResponse {
    pub status: u16,
    /// Parsed JSON body, or the raw text as a JSON string
    pub body: serde_json::Value,
}

/// Sends a finished payload to the remote API
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionApi: Send + Sync {
    /// URL the payload is posted to
    fn endpoint(&self) -> String;

    /// POST the payload once; no retry
    async fn submit(&self, payload: MultipartPayload) -> Result<SubmitResponse, SubmitError>;
}
