use std::cell::RefCell;
use std::collections::VecDeque;

use site_health::analysis::error::AnalysisError;
use site_health::analysis::raw_model::AnalysisRequest;
use site_health::client::transport::{AnalysisTransport, TransportResponse};

/// Scripted transport: answers requests from a queue and records what was sent.
#[derive(Default)]
pub struct MockTransport {
    replies: RefCell<VecDeque<Result<TransportResponse, AnalysisError>>>,
    pub sent: RefCell<Vec<AnalysisRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, body: &str) -> Self {
        self.replies
            .borrow_mut()
            .push_back(Ok(TransportResponse::new(status, body)));
        self
    }

    pub fn fail(self, reason: &str) -> Self {
        self.replies
            .borrow_mut()
            .push_back(Err(AnalysisError::Transport(reason.to_string())));
        self
    }

    pub fn sent_urls(&self) -> Vec<String> {
        self.sent.borrow().iter().map(|r| r.url.clone()).collect()
    }
}

impl AnalysisTransport for MockTransport {
    fn send(&self, request: &AnalysisRequest) -> Result<TransportResponse, AnalysisError> {
        self.sent.borrow_mut().push(request.clone());
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(AnalysisError::Transport("no scripted reply".into())))
    }
}
