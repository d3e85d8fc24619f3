/// Message shown when the service rejects a request without explaining why.
pub const FALLBACK_FAILURE_MESSAGE: &str = "Failed to analyze website.";

/// Message shown when the service could not be reached or answered garbage.
pub const CONNECTION_FAILURE_MESSAGE: &str = "Error connecting to the server.";

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// Request never produced a response (connection refused, DNS, TLS, ...)
    #[error("transport error: {0}")]
    Transport(String),

    /// Response body was not a JSON object
    #[error("malformed payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    /// Service answered with a non-success status
    #[error("service rejected request with status {status}")]
    Rejected {
        status: u16,
        message: Option<String>,
    },
}

impl AnalysisError {
    /// Text shown to the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::Transport(_) | AnalysisError::MalformedPayload(_) => {
                CONNECTION_FAILURE_MESSAGE.to_string()
            }
            AnalysisError::Rejected { message, .. } => message
                .as_deref()
                .filter(|m| !m.is_empty())
                .unwrap_or(FALLBACK_FAILURE_MESSAGE)
                .to_string(),
        }
    }
}
