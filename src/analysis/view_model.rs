use serde::{Deserialize, Serialize};

// ============================================================================
// Normalized analysis report consumed by the renderers
// ============================================================================

/// Fully defaulted analysis result. Built only by the normalizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewModel {
    pub scores: Scores,
    pub issues: Issues,
    pub resources: Resources,
    pub recommendations: Vec<String>,
}

/// Category scores, each 0-100. Field order is the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    pub performance: u8,
    pub seo: u8,
    pub accessibility: u8,
    pub security: u8,
}

impl Scores {
    /// `(category, score)` pairs in display order.
    pub fn entries(&self) -> [(&'static str, u8); 4] {
        [
            ("performance", self.performance),
            ("seo", self.seo),
            ("accessibility", self.accessibility),
            ("security", self.security),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issues {
    pub critical: Vec<String>,
    pub warnings: Vec<String>,
}

impl Issues {
    pub fn is_empty(&self) -> bool {
        self.critical.is_empty() && self.warnings.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Resources {
    #[serde(rename = "loadTimes")]
    pub load_times: LoadTimes,
}

/// Per-resource load times in milliseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadTimes {
    pub html: f64,
    pub css: f64,
    pub js: f64,
    pub images: f64,
}

impl LoadTimes {
    /// Values in the fixed order html, css, js, images.
    pub fn values(&self) -> [f64; 4] {
        [self.html, self.css, self.js, self.images]
    }
}
