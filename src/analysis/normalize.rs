use serde_json::Value;

use crate::analysis::raw_model::{RawApiResponse, RawCritical, RawLoadTimes};
use crate::analysis::view_model::{Issues, LoadTimes, Resources, Scores, ViewModel};

/// Security score reported when the service lists at least one security issue.
pub const SECURITY_SCORE_WITH_ISSUES: u8 = 50;

/// Security score reported when no security issues are listed.
pub const SECURITY_SCORE_CLEAN: u8 = 100;

/// Convert a raw service payload into a fully defaulted [`ViewModel`].
///
/// Never fails: every absent or malformed field falls back to its default.
pub fn normalize(raw: &RawApiResponse) -> ViewModel {
    let scores = raw.scores.clone().unwrap_or_default();
    let issues = raw.issues.clone().unwrap_or_default();

    let security = match &raw.security_issues {
        Some(issues) if has_security_issues(issues) => SECURITY_SCORE_WITH_ISSUES,
        _ => SECURITY_SCORE_CLEAN,
    };

    ViewModel {
        scores: Scores {
            performance: to_score(scores.performance),
            seo: to_score(scores.seo),
            accessibility: to_score(scores.accessibility),
            security,
        },
        issues: Issues {
            critical: issues.critical.as_ref().map(critical_names).unwrap_or_default(),
            warnings: issues
                .warnings
                .as_deref()
                .map(|list| string_entries(list).map(str::to_string).collect())
                .unwrap_or_default(),
        },
        resources: Resources {
            load_times: raw.load_times.as_ref().map(load_times).unwrap_or_default(),
        },
        recommendations: raw
            .description
            .iter()
            .filter(|d| !d.is_empty())
            .cloned()
            .collect(),
    }
}

/// Round and clamp a raw score into 0..=100. Absent scores become 0.
fn to_score(raw: Option<f64>) -> u8 {
    match raw {
        Some(v) if v.is_finite() => v.round().clamp(0.0, 100.0) as u8,
        _ => 0,
    }
}

fn critical_names(critical: &RawCritical) -> Vec<String> {
    match critical {
        RawCritical::Flags(map) => map
            .iter()
            .filter(|(_, flag)| is_truthy(flag))
            .map(|(name, _)| name.clone())
            .collect(),
        RawCritical::Names(list) => string_entries(list)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
    }
}

/// String entries of a list, in order. Other values are skipped.
fn string_entries(list: &[Value]) -> impl Iterator<Item = &str> {
    list.iter().filter_map(Value::as_str)
}

/// A non-empty list or a non-empty string counts as reported issues. Objects,
/// numbers and booleans have no length and count as none.
fn has_security_issues(value: &Value) -> bool {
    match value {
        Value::Array(list) => !list.is_empty(),
        Value::String(s) => !s.is_empty(),
        _ => false,
    }
}

fn load_times(raw: &RawLoadTimes) -> LoadTimes {
    LoadTimes {
        html: raw.html.unwrap_or(0.0),
        css: raw.css.unwrap_or(0.0),
        js: raw.js.unwrap_or(0.0),
        images: raw.images.unwrap_or(0.0),
    }
}

/// JSON truthiness: `false`, `null`, `0` and `""` are falsy, everything else
/// (including empty arrays and objects) is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
