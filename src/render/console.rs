use crate::render::chart::{BarDataset, DoughnutDataset};
use crate::render::report_model::DashboardReport;
use crate::render::theme::{ANSI_RESET, ColorSet, ansi_fg, palette};

/// Width in cells of the longest load-time bar.
const BAR_WIDTH: usize = 40;

/// Width in cells of the SEO share gauge.
const GAUGE_WIDTH: usize = 20;

// ============================================================================
// Console renderer: formatted terminal output
// ============================================================================

/// Format a dashboard for terminal output.
///
/// Produces output like:
/// ```text
/// === Website Health Analyzer ===
/// URL: https://example.com
///
/// --- Scores ---
///   performance     80/100
///
/// --- Resource Load Times ---
///   HTML    █████                                     50 ms
///
/// --- SEO Health ---
///   [████████████░░░░░░░░] Optimized 60% | Issues 40%
///
/// --- Key Issues ---
///   ✗ Missing title tag
///   ! Slow image load
///
/// --- Optimization Recommendations ---
///   ✓ Compress images
/// ```
///
/// With `color` set, headings, bars and markers use the theme's palette via
/// ANSI truecolor escapes.
pub fn format_console_report(report: &DashboardReport, color: bool) -> String {
    let colors = palette(report.theme);
    let paint = |text: &str, hex: &str| -> String {
        if color {
            format!("{}{}{}", ansi_fg(hex), text, ANSI_RESET)
        } else {
            text.to_string()
        }
    };

    let mut out = String::new();

    out.push_str(&paint("=== Website Health Analyzer ===", colors.text));
    out.push('\n');
    let url = if report.url.is_empty() {
        "(none)"
    } else {
        report.url.as_str()
    };
    out.push_str(&format!("URL: {}\n", url));
    out.push_str(&format!("Theme: {}\n", report.theme.name()));

    if report.busy {
        out.push_str("Analyzing...\n");
    }

    if let Some(ref error) = report.error {
        out.push_str(&paint(&format!("[ERROR] {}", error), colors.critical));
        out.push('\n');
    }

    let Some(ref model) = report.report else {
        return out;
    };

    // Score cards
    out.push_str(&section("Scores", &colors, &paint));
    for (category, score) in model.scores.entries() {
        out.push_str(&format!("  {:<16}{:>3}/100\n", category, score));
    }

    out.push_str(&section("Resource Load Times", &colors, &paint));
    out.push_str(&format_bar_chart(&report.charts.load_times, &paint));

    out.push_str(&section("SEO Health", &colors, &paint));
    out.push_str(&format_gauge(&report.charts.seo, &paint));

    out.push_str(&section("Key Issues", &colors, &paint));
    if model.issues.is_empty() {
        out.push_str("  (none)\n");
    }
    for issue in &model.issues.critical {
        out.push_str(&format!("  {} {}\n", paint("\u{2717}", colors.critical), issue));
    }
    for issue in &model.issues.warnings {
        out.push_str(&format!("  {} {}\n", paint("!", colors.warning), issue));
    }

    out.push_str(&section("Optimization Recommendations", &colors, &paint));
    if model.recommendations.is_empty() {
        out.push_str("  (none)\n");
    }
    for rec in &model.recommendations {
        out.push_str(&format!("  {} {}\n", paint("\u{2713}", colors.success), rec));
    }

    out
}

fn section(title: &str, colors: &ColorSet, paint: &dyn Fn(&str, &str) -> String) -> String {
    format!("\n{}\n", paint(&format!("--- {} ---", title), colors.legend_text))
}

/// Horizontal bars scaled to the largest value.
fn format_bar_chart(chart: &BarDataset, paint: &dyn Fn(&str, &str) -> String) -> String {
    let max = chart.max_value();
    let mut out = String::new();

    for ((label, value), color) in chart.labels.iter().zip(chart.values).zip(chart.colors) {
        let cells = if max > 0.0 {
            ((value.max(0.0) / max) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        let bar = "\u{2588}".repeat(cells);
        let pad = " ".repeat(BAR_WIDTH - cells);
        out.push_str(&format!(
            "  {:<8}{}{} {} ms\n",
            label,
            paint(&bar, color),
            pad,
            value
        ));
    }

    out
}

/// Two-segment gauge standing in for the doughnut chart.
fn format_gauge(chart: &DoughnutDataset, paint: &dyn Fn(&str, &str) -> String) -> String {
    let [optimized, issues] = chart.values;
    let filled = (usize::from(optimized) * GAUGE_WIDTH + 50) / 100;
    let filled = filled.min(GAUGE_WIDTH);

    format!(
        "  [{}{}] {} {}% | {} {}%\n",
        paint(&"\u{2588}".repeat(filled), chart.colors[0]),
        paint(&"\u{2591}".repeat(GAUGE_WIDTH - filled), chart.colors[1]),
        chart.labels[0],
        optimized,
        chart.labels[1],
        issues
    )
}
