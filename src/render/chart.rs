use serde::Serialize;

use crate::analysis::view_model::{LoadTimes, ViewModel};
use crate::render::theme::{Theme, palette};

pub const LOAD_TIME_LABELS: [&str; 4] = ["HTML", "CSS", "JS", "Images"];
pub const LOAD_TIME_SERIES: &str = "Load Time (ms)";
pub const SEO_LABELS: [&str; 2] = ["Optimized", "Issues"];

// ============================================================================
// Chart datasets derived from (report, theme)
// ============================================================================

/// Bar chart of per-resource load times.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarDataset {
    pub label: &'static str,
    pub labels: [&'static str; 4],
    pub values: [f64; 4],
    pub colors: [&'static str; 4],
}

impl BarDataset {
    pub fn max_value(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }
}

/// Two-slice doughnut: optimized share vs. remaining issues.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DoughnutDataset {
    pub labels: [&'static str; 2],
    pub values: [u8; 2],
    pub colors: [&'static str; 2],
}

/// Legend, tick and grid colors shared by both charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AxisColors {
    pub legend: &'static str,
    pub ticks: &'static str,
    pub grid: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSet {
    pub load_times: BarDataset,
    pub seo: DoughnutDataset,
    pub axis: AxisColors,
}

impl ChartSet {
    /// Derive both charts. An absent report yields zeroed bars and a `[0, 100]` doughnut.
    pub fn derive(report: Option<&ViewModel>, theme: Theme) -> Self {
        Self {
            load_times: load_time_dataset(report, theme),
            seo: seo_dataset(report, theme),
            axis: axis_colors(theme),
        }
    }
}

pub fn load_time_dataset(report: Option<&ViewModel>, theme: Theme) -> BarDataset {
    let times = report
        .map(|r| r.resources.load_times)
        .unwrap_or_else(LoadTimes::default);
    BarDataset {
        label: LOAD_TIME_SERIES,
        labels: LOAD_TIME_LABELS,
        values: times.values(),
        colors: palette(theme).load_time_bars,
    }
}

pub fn seo_dataset(report: Option<&ViewModel>, theme: Theme) -> DoughnutDataset {
    let seo = report.map(|r| r.scores.seo).unwrap_or(0).min(100);
    DoughnutDataset {
        labels: SEO_LABELS,
        values: [seo, 100 - seo],
        colors: palette(theme).seo_slices,
    }
}

pub fn axis_colors(theme: Theme) -> AxisColors {
    let colors = palette(theme);
    AxisColors {
        legend: colors.legend_text,
        ticks: colors.tick_text,
        grid: colors.grid,
    }
}
