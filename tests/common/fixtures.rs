use site_health::analysis::normalize::normalize;
use site_health::analysis::raw_model::parse_payload;
use site_health::analysis::view_model::ViewModel;

/// Successful payload with every consumed field present.
pub const FULL_PAYLOAD: &str = r#"{
  "scores": {"performance": 80, "seo": 60, "accessibility": 90},
  "security_issues": [],
  "issues": {
    "critical": {"Missing title tag": true, "Has favicon": false},
    "warnings": ["Slow image load"]
  },
  "load_times": {"html": 50, "css": 30, "js": 120, "images": 300},
  "description": "Compress images"
}"#;

pub fn full_view_model() -> ViewModel {
    normalize(&parse_payload(FULL_PAYLOAD).unwrap())
}

pub fn fixture_path(name: &str) -> String {
    let base = std::env::current_dir().unwrap();
    base.join("tests")
        .join("fixtures")
        .join(name)
        .display()
        .to_string()
}
