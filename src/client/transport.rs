use tracing::debug;

use crate::analysis::error::AnalysisError;
use crate::analysis::raw_model::AnalysisRequest;

/// Endpoint used when neither the CLI, the config file nor the environment names one.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/analyze";

// ============================================================================
// AnalysisTransport trait: the single outbound call
// ============================================================================

/// Status and raw body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends an [`AnalysisRequest`] to the analysis service.
///
/// Implementations only report transport-level failures as `Err`; any status
/// code the service returns is an `Ok` response for the controller to judge.
pub trait AnalysisTransport {
    fn send(&self, request: &AnalysisRequest) -> Result<TransportResponse, AnalysisError>;
}

// ============================================================================
// HTTP transport (reqwest blocking)
// ============================================================================

pub struct HttpTransport {
    pub endpoint: String,
    client: reqwest::blocking::Client,
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl HttpTransport {
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl AnalysisTransport for HttpTransport {
    fn send(&self, request: &AnalysisRequest) -> Result<TransportResponse, AnalysisError> {
        debug!(endpoint = %self.endpoint, url = %request.url, "POST analysis request");

        // .json() sets Content-Type: application/json
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .map_err(|e| AnalysisError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| AnalysisError::Transport(e.to_string()))?;

        debug!(status, bytes = body.len(), "analysis response received");
        Ok(TransportResponse { status, body })
    }
}

// ============================================================================
// Replay transport (saved payloads, offline rendering)
// ============================================================================

/// Answers every request with the same saved response.
pub struct ReplayTransport {
    pub response: TransportResponse,
}

impl ReplayTransport {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            response: TransportResponse::new(status, body),
        }
    }

    /// Load a saved payload from disk.
    pub fn from_file(path: &str, status: u16) -> std::io::Result<Self> {
        let body = std::fs::read_to_string(path)?;
        Ok(Self::new(status, body))
    }
}

impl AnalysisTransport for ReplayTransport {
    fn send(&self, request: &AnalysisRequest) -> Result<TransportResponse, AnalysisError> {
        debug!(url = %request.url, status = self.response.status, "replaying saved response");
        Ok(self.response.clone())
    }
}
