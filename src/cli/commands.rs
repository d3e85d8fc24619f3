use tracing::info;

use crate::cli::config::{OutputFormat, RenderSettings};
use crate::client::transport::{AnalysisTransport, HttpTransport, ReplayTransport};
use crate::controller::controller::{InputController, SubmitOutcome};
use crate::render::console::format_console_report;
use crate::render::html::generate_html_report;
use crate::render::report_model::{DashboardReport, generate_json_report};

// ============================================================================
// analyze subcommand
// ============================================================================

/// Submit `url` to the service and render the dashboard. Returns whether the
/// attempt produced a report.
pub fn cmd_analyze(
    url: &str,
    endpoint: &str,
    settings: &RenderSettings,
) -> Result<bool, Box<dyn std::error::Error>> {
    info!(endpoint, "analyzing {}", url);
    run_once(HttpTransport::new(endpoint), url, settings)
}

// ============================================================================
// render subcommand
// ============================================================================

/// Replay a saved response body through the controller and render it.
pub fn cmd_render(
    input: &str,
    status: u16,
    url: &str,
    settings: &RenderSettings,
) -> Result<bool, Box<dyn std::error::Error>> {
    let transport = ReplayTransport::from_file(input, status)?;
    info!(input, status, "rendering saved response");
    run_once(transport, url, settings)
}

/// Drive one submission through a controller and write the rendered output.
pub fn run_once<T: AnalysisTransport>(
    transport: T,
    url: &str,
    settings: &RenderSettings,
) -> Result<bool, Box<dyn std::error::Error>> {
    let mut controller = InputController::with_theme(transport, settings.theme);
    controller.set_url(url);
    let outcome = controller.submit();

    // Colors only make sense on a terminal
    let color = settings.color && settings.output.is_none();
    let content = render_dashboard(&controller.dashboard(), settings.format, color)?;
    write_output(settings.output.as_deref(), &content)?;

    Ok(matches!(outcome, SubmitOutcome::Report(_)))
}

// ============================================================================
// Helpers
// ============================================================================

/// Render a dashboard in the requested format.
pub fn render_dashboard(
    report: &DashboardReport,
    format: OutputFormat,
    color: bool,
) -> Result<String, Box<dyn std::error::Error>> {
    Ok(match format {
        OutputFormat::Html => generate_html_report(report),
        OutputFormat::Json => {
            let mut json = generate_json_report(report)?;
            json.push('\n');
            json
        }
        OutputFormat::Console => format_console_report(report, color),
    })
}

/// Write to `path`, or print to stdout when no path is given.
pub fn write_output(path: Option<&str>, content: &str) -> std::io::Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)?;
            info!(path, "report written");
            Ok(())
        }
        None => {
            print!("{}", content);
            Ok(())
        }
    }
}
