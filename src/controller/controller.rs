use tracing::{debug, info, warn};

use crate::analysis::error::AnalysisError;
use crate::analysis::normalize::normalize;
use crate::analysis::raw_model::{AnalysisRequest, parse_payload};
use crate::analysis::view_model::ViewModel;
use crate::client::transport::{AnalysisTransport, TransportResponse};
use crate::render::report_model::DashboardReport;
use crate::render::theme::Theme;

// ============================================================================
// Input controller: URL, busy flag, error message, report and theme
// ============================================================================

/// Handle for a request started by [`InputController::begin_submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAnalysis {
    pub id: u64,
    pub request: AnalysisRequest,
}

/// What a resolution did to the controller state.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// A fresh report was stored
    Report(ViewModel),
    /// The attempt failed; carries the message shown to the user
    Failed(String),
    /// A newer request had started; the resolution was dropped
    Superseded,
}

impl SubmitOutcome {
    pub fn is_report(&self) -> bool {
        matches!(self, SubmitOutcome::Report(_))
    }
}

pub struct InputController<T: AnalysisTransport> {
    transport: T,
    url: String,
    busy: bool,
    error_message: Option<String>,
    report: Option<ViewModel>,
    theme: Theme,
    latest_request: u64,
}

impl<T: AnalysisTransport> InputController<T> {
    pub fn new(transport: T) -> Self {
        Self::with_theme(transport, Theme::default())
    }

    pub fn with_theme(transport: T, theme: Theme) -> Self {
        Self {
            transport,
            url: String::new(),
            busy: false,
            error_message: None,
            report: None,
            theme,
            latest_request: 0,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn report(&self) -> Option<&ViewModel> {
        self.report.as_ref()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Replace the candidate URL. No validation.
    pub fn set_url(&mut self, value: &str) {
        self.url = value.to_string();
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        debug!(theme = self.theme.name(), "theme toggled");
        self.theme
    }

    /// Submit the current URL and wait for the result.
    pub fn submit(&mut self) -> SubmitOutcome {
        let pending = self.begin_submit();
        let result = self.transport.send(&pending.request);
        self.resolve(&pending, result)
    }

    /// Start a request: mark busy, drop the previous error and report.
    pub fn begin_submit(&mut self) -> PendingAnalysis {
        self.latest_request += 1;
        self.busy = true;
        self.error_message = None;
        self.report = None;

        info!(id = self.latest_request, url = %self.url, "submitting analysis request");
        PendingAnalysis {
            id: self.latest_request,
            request: AnalysisRequest::new(&self.url),
        }
    }

    /// Apply the transport result of `pending`.
    ///
    /// Results for anything but the latest request are dropped without
    /// touching state; `busy` stays set until the latest one resolves.
    pub fn resolve(
        &mut self,
        pending: &PendingAnalysis,
        result: Result<TransportResponse, AnalysisError>,
    ) -> SubmitOutcome {
        if pending.id != self.latest_request {
            debug!(
                id = pending.id,
                latest = self.latest_request,
                "dropping superseded analysis response"
            );
            return SubmitOutcome::Superseded;
        }

        let outcome = match result.and_then(interpret) {
            Ok(report) => {
                self.report = Some(report.clone());
                SubmitOutcome::Report(report)
            }
            Err(e) => {
                warn!(id = pending.id, error = %e, "analysis failed");
                let message = e.user_message();
                self.error_message = Some(message.clone());
                SubmitOutcome::Failed(message)
            }
        };

        self.busy = false;
        outcome
    }

    /// Snapshot of the current state with charts derived for the current theme.
    pub fn dashboard(&self) -> DashboardReport {
        DashboardReport::new(
            &self.url,
            self.busy,
            self.error_message.as_deref(),
            self.report.as_ref(),
            self.theme,
        )
    }
}

/// Turn a completed exchange into a report or an [`AnalysisError`].
///
/// The body is parsed before the status is looked at, so a rejection with a
/// non-JSON body counts as a malformed payload.
pub fn interpret(response: TransportResponse) -> Result<ViewModel, AnalysisError> {
    let raw = parse_payload(&response.body)?;
    debug!(status = response.status, payload = %response.body, "analysis payload");

    if response.is_success() {
        Ok(normalize(&raw))
    } else {
        Err(AnalysisError::Rejected {
            status: response.status,
            message: raw.error,
        })
    }
}
