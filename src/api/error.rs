//! Submission failure classification

/// Fallback when the server gives no usable `message`
pub const UNKNOWN_SERVER_ERROR: &str = "Unknown error occurred";

/// Message shown when the request went out but nothing came back
pub const NO_RESPONSE_MESSAGE: &str =
    "Error: No response received from the server. Please check your internet connection.";

/// Why a submission attempt failed. Every variant ends the attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// Server answered with a non-2xx status
    #[error("server rejected submission ({status})")]
    ServerRejected {
        status: u16,
        /// `message` from the JSON error body, if any
        message: Option<String>,
    },

    /// Request was dispatched but no response arrived
    #[error("no response from server: {0}")]
    NoResponse(String),

    /// Request could not be built or sent
    #[error("could not send request: {0}")]
    Request(String),
}

impl SubmitError {
    /// Classify a transport error returned by [`reqwest`]
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_builder() {
            SubmitError::Request(err.to_string())
        } else {
            SubmitError::NoResponse(err.to_string())
        }
    }

    /// Build a rejection from a status code and raw response body
    pub fn rejected(status: u16, body: &str) -> Self {
        SubmitError::ServerRejected {
            status,
            message: server_message(body),
        }
    }

    /// The single line shown to the user
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::ServerRejected { status, message } => format!(
                "Error {}: {}",
                status,
                message.as_deref().unwrap_or(UNKNOWN_SERVER_ERROR)
            ),
            SubmitError::NoResponse(_) => NO_RESPONSE_MESSAGE.to_string(),
            SubmitError::Request(text) => format!("Error: {text}"),
        }
    }
}

/// Pull a displayable `message` out of a JSON error body.
///
/// Empty strings, `null`, `false` and zero count as missing.
fn server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("message")? {
        serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
        serde_json::Value::Number(n) if n.as_f64() == Some(0.0) => None,
        serde_json::Value::String(_) | serde_json::Value::Null | serde_json::Value::Bool(false) => {
            None
        }
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod user_message {
        use super::*;

        #[test]
        fn test_server_rejected_with_message() {
            let err = SubmitError::rejected(400, r#"{"message":"Title is required"}"#);
            assert_eq!(err.user_message(), "Error 400: Title is required");
        }

        #[test]
        fn test_server_rejected_without_message() {
            let err = SubmitError::rejected(500, r#"{"error":"boom"}"#);
            assert_eq!(err.user_message(), "Error 500: Unknown error occurred");
        }

        #[test]
        fn test_server_rejected_non_json_body() {
            let err = SubmitError::rejected(502, "<html>Bad Gateway</html>");
            assert_eq!(err.user_message(), "Error 502: Unknown error occurred");
        }

        #[test]
        fn test_no_response() {
            let err = SubmitError::NoResponse("connection refused".to_string());
            assert_eq!(err.user_message(), NO_RESPONSE_MESSAGE);
        }

        #[test]
        fn test_request_failure_includes_text() {
            let err = SubmitError::Request("No such file or directory".to_string());
            assert_eq!(err.user_message(), "Error: No such file or directory");
        }
    }

    mod server_message {
        use super::*;

        #[test]
        fn test_empty_string_is_missing() {
            assert_eq!(server_message(r#"{"message":""}"#), None);
        }

        #[test]
        fn test_null_is_missing() {
            assert_eq!(server_message(r#"{"message":null}"#), None);
        }

        #[test]
        fn test_zero_is_missing() {
            assert_eq!(server_message(r#"{"message":0}"#), None);
            assert_eq!(
                SubmitError::rejected(500, r#"{"message":0}"#).user_message(),
                "Error 500: Unknown error occurred"
            );
        }

        #[test]
        fn test_non_string_is_rendered() {
            assert_eq!(server_message(r#"{"message":404}"#), Some("404".to_string()));
        }

        #[test]
        fn test_non_object_body() {
            assert_eq!(server_message(r#"["message"]"#), None);
        }
    }

    #[test]
    fn test_builder_error_is_request_failure() {
        let req_err = reqwest::Client::new().get("://bad").build().unwrap_err();
        assert!(matches!(
            SubmitError::from_transport(req_err),
            SubmitError::Request(_)
        ));
    }
}
