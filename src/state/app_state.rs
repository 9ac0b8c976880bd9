//! Application state definitions

use super::forms::SubmissionForm;

/// Message shown to the user after a submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Submission accepted by the server
    Success(String),
    /// Submission failed; same text as the inline form error
    Error(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::Success(m) | Notice::Error(m) => m,
        }
    }
}

/// Top-level application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub form: SubmissionForm,
    /// Modal dialog currently on screen
    pub notice: Option<Notice>,
    /// Endpoint the form posts to, for the status bar
    pub endpoint: String,
}

impl AppState {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    pub fn has_notice(&self) -> bool {
        self.notice.is_some()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}
