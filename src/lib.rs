use crate::{
    analysis::{error::AnalysisError, raw_model::AnalysisRequest, view_model::ViewModel},
    client::transport::AnalysisTransport,
    controller::controller::interpret,
};

pub mod analysis;
pub mod cli;
pub mod client;
pub mod controller;
pub mod render;

/// One-shot analysis without controller state: send, check status, normalize.
///
/// Use [`controller::controller::InputController`] when busy/error tracking
/// or rendering is needed.
pub fn analyze_url<T: AnalysisTransport>(transport: &T, url: &str) -> Result<ViewModel, AnalysisError> {
    let response = transport.send(&AnalysisRequest::new(url))?;
    interpret(response)
}
