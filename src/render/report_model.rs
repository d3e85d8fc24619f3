use serde::Serialize;

use crate::analysis::view_model::ViewModel;
use crate::render::chart::ChartSet;
use crate::render::theme::Theme;

// ============================================================================
// Dashboard report: snapshot consumed by every renderer
// ============================================================================

/// Everything a renderer needs for one frame.
///
/// Built from controller state via `InputController::dashboard()`, or
/// directly with [`DashboardReport::new`]. Charts are derived on
/// construction and never cached across theme changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardReport {
    /// URL that was (or will be) submitted
    pub url: String,

    /// Whether a request is outstanding
    pub busy: bool,

    pub theme: Theme,

    /// User-facing error message from the last attempt
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Normalized report; `None` before the first success or after a failure
    pub report: Option<ViewModel>,

    pub charts: ChartSet,
}

impl DashboardReport {
    pub fn new(
        url: &str,
        busy: bool,
        error: Option<&str>,
        report: Option<&ViewModel>,
        theme: Theme,
    ) -> Self {
        Self {
            url: url.to_string(),
            busy,
            theme,
            error: error.map(str::to_string),
            report: report.cloned(),
            charts: ChartSet::derive(report, theme),
        }
    }

    /// Same snapshot under another theme. Only colors change.
    pub fn with_theme(&self, theme: Theme) -> Self {
        Self::new(
            &self.url,
            self.busy,
            self.error.as_deref(),
            self.report.as_ref(),
            theme,
        )
    }

    pub fn has_report(&self) -> bool {
        self.report.is_some()
    }
}

/// Serialize a dashboard as pretty-printed JSON.
pub fn generate_json_report(report: &DashboardReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
