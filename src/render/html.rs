use std::f64::consts::PI;

use crate::render::chart::{AxisColors, BarDataset, DoughnutDataset};
use crate::render::report_model::DashboardReport;
use crate::render::theme::palette;

const BAR_CHART_WIDTH: f64 = 480.0;
const BAR_CHART_HEIGHT: f64 = 240.0;
const BAR_CHART_MARGIN: f64 = 48.0;
const GRID_LINES: usize = 4;

const DOUGHNUT_SIZE: f64 = 200.0;
const DOUGHNUT_RADIUS: f64 = 70.0;
const DOUGHNUT_STROKE: f64 = 30.0;

// ============================================================================
// HTML renderer: self-contained dashboard page
// ============================================================================

/// Generate a self-contained HTML dashboard.
///
/// Features:
/// - `dark-mode` class on `<body>` for the dark theme
/// - Score cards, one per category
/// - Inline SVG bar chart (load times) and doughnut (SEO health)
/// - Critical issues styled apart from warnings
/// - Inline CSS (no external dependencies)
///
/// Without a report only the header, URL and any error message are emitted.
pub fn generate_html_report(report: &DashboardReport) -> String {
    let colors = palette(report.theme);
    let body_class = if report.theme.is_dark() {
        "dark-mode"
    } else {
        "light-mode"
    };

    let status = if report.busy {
        "<p class=\"status\">Analyzing...</p>\n".to_string()
    } else {
        String::new()
    };

    let error = report
        .error
        .as_ref()
        .map(|e| {
            format!(
                "<div class=\"error-message\">&#9888; {}</div>\n",
                escape_html(e)
            )
        })
        .unwrap_or_default();

    let results = match report.report {
        Some(ref model) => {
            let mut cards = String::new();
            for (category, score) in model.scores.entries() {
                cards.push_str(&format!(
                    "<div class=\"score-card\"><h3 class=\"score-title\">{}</h3><div class=\"score-value\">{}<span class=\"score-max\">/100</span></div></div>\n",
                    category, score
                ));
            }

            let mut issues = String::new();
            for issue in &model.issues.critical {
                issues.push_str(&format!(
                    "<div class=\"issue-item critical\">&#10007; <p>{}</p></div>\n",
                    escape_html(issue)
                ));
            }
            for issue in &model.issues.warnings {
                issues.push_str(&format!(
                    "<div class=\"issue-item warning\">! <p>{}</p></div>\n",
                    escape_html(issue)
                ));
            }

            let mut recs = String::new();
            for rec in &model.recommendations {
                recs.push_str(&format!(
                    "<div class=\"recommendation-card\">&#10003; <p>{}</p></div>\n",
                    escape_html(rec)
                ));
            }

            format!(
                r#"<div class="results-grid">
<div class="score-cards">
{cards}</div>
<div class="chart-container">
<h3>Resource Load Times</h3>
{bar_chart}
</div>
<div class="analysis-section">
<div class="chart-container">
<h3>SEO Health</h3>
{doughnut}
</div>
<div class="issue-list">
<h3>Key Issues</h3>
<div class="issues-container">
{issues}</div>
</div>
</div>
<div class="recommendations">
<h3>Optimization Recommendations</h3>
<div class="recommendations-grid">
{recs}</div>
</div>
</div>
"#,
                cards = cards,
                bar_chart = render_bar_svg(&report.charts.load_times, &report.charts.axis),
                doughnut = render_doughnut_svg(&report.charts.seo, &report.charts.axis),
                issues = issues,
                recs = recs,
            )
        }
        None => String::new(),
    };

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Website Health Analyzer - {url}</title>
<style>
body {{ font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif; margin: 0; padding: 0; background: {background}; color: {text}; }}
.main-wrapper {{ max-width: 960px; margin: 0 auto; padding: 24px; }}
.analyzer-header h1 {{ margin: 0 0 8px 0; font-size: 28px; }}
.analyzer-header p {{ margin: 4px 0; color: {muted}; }}
.error-message {{ margin-top: 12px; padding: 12px 16px; border-radius: 6px; border-left: 4px solid {critical}; background: {surface}; color: {critical}; font-weight: bold; }}
.score-cards {{ display: grid; grid-template-columns: repeat(4, 1fr); gap: 12px; margin: 20px 0; }}
.score-card, .chart-container, .issue-list, .recommendations {{ background: {surface}; border-radius: 8px; padding: 16px 20px; margin-bottom: 12px; }}
.score-title {{ margin: 0 0 8px 0; font-size: 14px; text-transform: capitalize; color: {muted}; }}
.score-value {{ font-size: 28px; font-weight: bold; }}
.score-max {{ font-size: 14px; color: {muted}; }}
.analysis-section {{ display: grid; grid-template-columns: 1fr 1fr; gap: 12px; }}
.issue-item {{ display: flex; gap: 8px; align-items: baseline; padding: 4px 0; }}
.issue-item p, .recommendation-card p {{ margin: 0; }}
.issue-item.critical {{ color: {critical}; font-weight: bold; }}
.issue-item.warning {{ color: {warning}; }}
.recommendation-card {{ display: flex; gap: 8px; color: {success}; }}
</style>
</head>
<body class="{body_class}">
<div class="main-wrapper">
<div class="analyzer-header">
<h1>Website Health Analyzer</h1>
<p>URL: {url}</p>
{status}{error}</div>
{results}</div>
</body>
</html>"##,
        url = escape_html(&report.url),
        background = colors.background,
        text = colors.text,
        muted = colors.muted_text,
        surface = colors.surface,
        critical = colors.critical,
        warning = colors.warning,
        success = colors.success,
        body_class = body_class,
        status = status,
        error = error,
        results = results,
    )
}

/// Vertical bar chart with horizontal grid lines and value ticks.
fn render_bar_svg(chart: &BarDataset, axis: &AxisColors) -> String {
    let plot_width = BAR_CHART_WIDTH - BAR_CHART_MARGIN;
    let plot_height = BAR_CHART_HEIGHT - BAR_CHART_MARGIN;
    let max = chart.max_value();
    let scale_max = if max > 0.0 { max } else { 1.0 };

    let mut svg = format!(
        "<svg class=\"bar-chart\" role=\"img\" aria-label=\"{}\" viewBox=\"0 0 {} {}\" width=\"{}\" height=\"{}\">\n",
        chart.label, BAR_CHART_WIDTH, BAR_CHART_HEIGHT, BAR_CHART_WIDTH, BAR_CHART_HEIGHT
    );

    for i in 0..=GRID_LINES {
        let fraction = i as f64 / GRID_LINES as f64;
        let y = plot_height - fraction * plot_height;
        svg.push_str(&format!(
            "<line x1=\"{x0}\" y1=\"{y:.1}\" x2=\"{x1}\" y2=\"{y:.1}\" stroke=\"{grid}\" />\n<text x=\"{tx}\" y=\"{ty:.1}\" fill=\"{ticks}\" font-size=\"10\" text-anchor=\"end\">{value:.0}</text>\n",
            x0 = BAR_CHART_MARGIN,
            x1 = BAR_CHART_WIDTH,
            y = y,
            grid = axis.grid,
            tx = BAR_CHART_MARGIN - 6.0,
            ty = y + 3.0,
            ticks = axis.ticks,
            value = fraction * max,
        ));
    }

    let slot = plot_width / chart.values.len() as f64;
    let bar_width = slot * 0.6;
    for (i, ((label, value), color)) in chart
        .labels
        .iter()
        .zip(chart.values)
        .zip(chart.colors)
        .enumerate()
    {
        let height = (value.max(0.0) / scale_max) * plot_height;
        let x = BAR_CHART_MARGIN + slot * i as f64 + (slot - bar_width) / 2.0;
        svg.push_str(&format!(
            "<rect x=\"{x:.1}\" y=\"{y:.1}\" width=\"{w:.1}\" height=\"{h:.1}\" fill=\"{color}\"><title>{label}: {value} ms</title></rect>\n<text x=\"{lx:.1}\" y=\"{ly:.1}\" fill=\"{ticks}\" font-size=\"11\" text-anchor=\"middle\">{label}</text>\n",
            x = x,
            y = plot_height - height,
            w = bar_width,
            h = height,
            color = color,
            label = label,
            value = value,
            lx = x + bar_width / 2.0,
            ly = plot_height + 16.0,
            ticks = axis.ticks,
        ));
    }

    svg.push_str(&format!(
        "<text x=\"{x:.1}\" y=\"{y:.1}\" fill=\"{legend}\" font-size=\"12\" text-anchor=\"middle\">{label}</text>\n</svg>",
        x = BAR_CHART_MARGIN + plot_width / 2.0,
        y = BAR_CHART_HEIGHT - 8.0,
        legend = axis.legend,
        label = chart.label,
    ));

    svg
}

/// Doughnut drawn as two stroked arcs on one circle, legend underneath.
fn render_doughnut_svg(chart: &DoughnutDataset, axis: &AxisColors) -> String {
    let center = DOUGHNUT_SIZE / 2.0;
    let circumference = 2.0 * PI * DOUGHNUT_RADIUS;
    let optimized = f64::from(chart.values[0]) / 100.0 * circumference;

    let mut svg = format!(
        "<svg class=\"doughnut-chart\" role=\"img\" aria-label=\"SEO health\" viewBox=\"0 0 {size} {height}\" width=\"{size}\" height=\"{height}\">\n",
        size = DOUGHNUT_SIZE,
        height = DOUGHNUT_SIZE + 40.0,
    );

    // Issues slice first as the full ring, optimized arc painted over it
    svg.push_str(&format!(
        "<circle cx=\"{c}\" cy=\"{c}\" r=\"{r}\" fill=\"none\" stroke=\"{color}\" stroke-width=\"{w}\" />\n",
        c = center,
        r = DOUGHNUT_RADIUS,
        color = chart.colors[1],
        w = DOUGHNUT_STROKE,
    ));
    svg.push_str(&format!(
        "<circle cx=\"{c}\" cy=\"{c}\" r=\"{r}\" fill=\"none\" stroke=\"{color}\" stroke-width=\"{w}\" stroke-dasharray=\"{on:.2} {off:.2}\" transform=\"rotate(-90 {c} {c})\" />\n",
        c = center,
        r = DOUGHNUT_RADIUS,
        color = chart.colors[0],
        w = DOUGHNUT_STROKE,
        on = optimized,
        off = circumference - optimized,
    ));
    svg.push_str(&format!(
        "<text x=\"{c}\" y=\"{y}\" fill=\"{legend}\" font-size=\"24\" text-anchor=\"middle\">{value}%</text>\n",
        c = center,
        y = center + 8.0,
        legend = axis.legend,
        value = chart.values[0],
    ));

    for (i, ((label, value), color)) in chart
        .labels
        .iter()
        .zip(chart.values)
        .zip(chart.colors)
        .enumerate()
    {
        let x = 20.0 + i as f64 * (DOUGHNUT_SIZE / 2.0);
        let y = DOUGHNUT_SIZE + 20.0;
        svg.push_str(&format!(
            "<rect x=\"{x}\" y=\"{ry}\" width=\"10\" height=\"10\" fill=\"{color}\" /><text x=\"{tx}\" y=\"{y}\" fill=\"{legend}\" font-size=\"11\">{label} ({value})</text>\n",
            x = x,
            ry = y - 9.0,
            color = color,
            tx = x + 14.0,
            y = y,
            legend = axis.legend,
            label = label,
            value = value,
        ));
    }

    svg.push_str("</svg>");
    svg
}

/// Escape HTML special characters.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
