use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

// ============================================================================
// Wire types exchanged with the analysis service
// ============================================================================

/// Body of the single outbound call: `{"url": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub url: String,
}

impl AnalysisRequest {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
        }
    }
}

/// Untrusted response payload from the analysis service.
///
/// Every field is optional. Fields the renderer does not consume (`url`,
/// `title`, `recommendations`, ...) are ignored. Defaults are applied only by
/// [`crate::analysis::normalize::normalize`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawApiResponse {
    #[serde(default, deserialize_with = "lenient")]
    pub scores: Option<RawScores>,

    /// Normally a list. Any other non-null value is kept for the normalizer
    /// to judge.
    #[serde(default, deserialize_with = "lenient")]
    pub security_issues: Option<Value>,

    #[serde(default, deserialize_with = "lenient")]
    pub issues: Option<RawIssues>,

    #[serde(default, deserialize_with = "lenient")]
    pub load_times: Option<RawLoadTimes>,

    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawScores {
    #[serde(default, deserialize_with = "lenient_number")]
    pub performance: Option<f64>,

    #[serde(default, deserialize_with = "lenient_number")]
    pub seo: Option<f64>,

    #[serde(default, deserialize_with = "lenient_number")]
    pub accessibility: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawIssues {
    #[serde(default, deserialize_with = "lenient")]
    pub critical: Option<RawCritical>,

    /// Entries are filtered one by one, so a stray non-string does not
    /// discard the whole list.
    #[serde(default, deserialize_with = "lenient")]
    pub warnings: Option<Vec<Value>>,
}

/// Critical issues as sent by the service.
///
/// The documented shape is a mapping of issue name to a flag. Some service
/// builds send a plain list of issue names instead.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawCritical {
    Flags(Map<String, Value>),
    Names(Vec<Value>),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawLoadTimes {
    #[serde(default, deserialize_with = "lenient_number")]
    pub html: Option<f64>,

    #[serde(default, deserialize_with = "lenient_number")]
    pub css: Option<f64>,

    #[serde(default, deserialize_with = "lenient_number")]
    pub js: Option<f64>,

    #[serde(default, deserialize_with = "lenient_number")]
    pub images: Option<f64>,
}

// ============================================================================
// Lenient field decoding
// ============================================================================

/// Decode a field, treating `null` or a value of the wrong shape as absent.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    Ok(serde_json::from_value(value).ok())
}

/// Decode a number, accepting numeric strings such as `"80"`.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    })
}

/// Parse a response body. Only a JSON object is a valid payload.
pub fn parse_payload(body: &str) -> Result<RawApiResponse, serde_json::Error> {
    let value: Value = serde_json::from_str(body)?;
    if !value.is_object() {
        return Err(serde::de::Error::custom(format!(
            "expected a JSON object, got {}",
            json_kind(&value)
        )));
    }
    serde_json::from_value(value)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
