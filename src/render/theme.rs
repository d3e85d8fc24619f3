use serde::{Deserialize, Serialize};

// ============================================================================
// Theme and palettes
// ============================================================================

/// Visual theme for every renderer. Dark by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Parse `dark` / `light` (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }
}

/// Every color a renderer needs for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorSet {
    /// Bars in order HTML, CSS, JS, Images
    pub load_time_bars: [&'static str; 4],
    /// Doughnut slices in order Optimized, Issues
    pub seo_slices: [&'static str; 2],
    pub legend_text: &'static str,
    pub tick_text: &'static str,
    pub grid: &'static str,
    pub background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub muted_text: &'static str,
    pub critical: &'static str,
    pub warning: &'static str,
    pub success: &'static str,
}

const DARK: ColorSet = ColorSet {
    load_time_bars: ["#6366f1", "#10b981", "#f59e0b", "#ef4444"],
    seo_slices: ["#34d399", "#fbbf24"],
    legend_text: "#f8fafc",
    tick_text: "#94a3b8",
    grid: "#334155",
    background: "#0f172a",
    surface: "#1e293b",
    text: "#f8fafc",
    muted_text: "#94a3b8",
    critical: "#ef4444",
    warning: "#f59e0b",
    success: "#10b981",
};

const LIGHT: ColorSet = ColorSet {
    load_time_bars: ["#4F46E5", "#10B981", "#F59E0B", "#EF4444"],
    seo_slices: ["#10B981", "#F59E0B"],
    legend_text: "#1e293b",
    tick_text: "#64748b",
    grid: "#e2e8f0",
    background: "#f8fafc",
    surface: "#ffffff",
    text: "#1e293b",
    muted_text: "#64748b",
    critical: "#DC2626",
    warning: "#D97706",
    success: "#059669",
};

/// Palette for a theme.
pub fn palette(theme: Theme) -> ColorSet {
    match theme {
        Theme::Dark => DARK,
        Theme::Light => LIGHT,
    }
}

/// ANSI 24-bit foreground escape for a `#rrggbb` color.
///
/// Returns an empty string for anything that is not a six-digit hex color.
pub fn ansi_fg(hex: &str) -> String {
    let digits = hex.trim_start_matches('#');
    if digits.len() != 6 || !digits.is_ascii() {
        return String::new();
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    match (channel(0), channel(2), channel(4)) {
        (Some(r), Some(g), Some(b)) => format!("\x1b[38;2;{};{};{}m", r, g, b),
        _ => String::new(),
    }
}

pub const ANSI_RESET: &str = "\x1b[0m";
