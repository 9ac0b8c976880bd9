//! Submission pipeline: payload encoding, HTTP client and error classification

mod client;
mod error;
mod payload;
mod traits;

pub use client::{SubmissionClient, DEFAULT_ENDPOINT};
pub use error::SubmitError;
pub use payload::MultipartPayload;
#[cfg(test)]
pub use payload::PartBody;
pub use traits::{SubmissionApi, SubmitResponse};

#[cfg(test)]
pub use error::NO_RESPONSE_MESSAGE;
#[cfg(test)]
pub use traits::MockSubmissionApi;
