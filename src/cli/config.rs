use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::client::transport::DEFAULT_ENDPOINT;
use crate::render::theme::Theme;

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "site-health.yaml";

/// Environment variable consulted for the endpoint after CLI and config file.
pub const ENDPOINT_ENV: &str = "SITE_HEALTH_ENDPOINT";

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "site-health",
    version,
    about = "Website health analyzer: performance, SEO, accessibility and security at a glance"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Analysis API endpoint
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Path to config file (default: site-health.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Submit a URL to the analysis service and render the result
    Analyze {
        /// Website to analyze (sent as-is)
        #[arg(long, default_value = "")]
        url: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Render a saved analysis response without contacting the service
    Render {
        /// Path to a saved JSON response body
        #[arg(short, long)]
        input: String,

        /// HTTP status the saved response was returned with
        #[arg(long, default_value_t = 200)]
        status: u16,

        /// URL shown in the report header
        #[arg(long, default_value = "")]
        url: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Line-oriented session: set URLs, submit, toggle the theme
    Interactive {
        /// Starting theme: dark or light
        #[arg(long)]
        theme: Option<String>,

        /// Disable ANSI colors
        #[arg(long)]
        no_color: bool,
    },
}

/// Rendering flags shared by `analyze` and `render`.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output format: console, html, json
    #[arg(long)]
    pub format: Option<String>,

    /// Theme: dark or light
    #[arg(long)]
    pub theme: Option<String>,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Disable ANSI colors in console output
    #[arg(long)]
    pub no_color: bool,
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `site-health.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub endpoint: Option<String>,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_console")]
    pub format: String,

    #[serde(default)]
    pub theme: Theme,

    #[serde(default = "default_true")]
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "console".to_string(),
            theme: Theme::Dark,
            color: true,
        }
    }
}

// Serde default helpers
fn default_console() -> String { "console".to_string() }
fn default_true() -> bool { true }

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or(DEFAULT_CONFIG_PATH);
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_else(|e| {
            warn!(path = config_path, error = %e, "ignoring malformed config file");
            AppConfig::default()
        }),
        Err(_) => AppConfig::default(),
    }
}

// ============================================================================
// Settings resolution (merge CLI args with config file)
// ============================================================================

/// Output format of a rendered dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Console,
    Html,
    Json,
}

impl OutputFormat {
    /// Unknown names fall back to console, like an omitted flag.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "html" => OutputFormat::Html,
            "json" => OutputFormat::Json,
            _ => OutputFormat::Console,
        }
    }
}

/// Fully resolved rendering settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSettings {
    pub format: OutputFormat,
    pub theme: Theme,
    pub output: Option<String>,
    pub color: bool,
}

/// Resolve the endpoint: CLI > config > env > default.
pub fn resolve_endpoint(
    cli_endpoint: Option<&str>,
    config: &AppConfig,
    env_endpoint: Option<&str>,
) -> String {
    cli_endpoint
        .or(config.endpoint.as_deref())
        .or(env_endpoint)
        .unwrap_or(DEFAULT_ENDPOINT)
        .to_string()
}

/// Resolve a `--theme` flag. An unknown name is reported and the fallback used.
pub fn resolve_theme(flag: Option<&str>, fallback: Theme) -> Theme {
    let Some(name) = flag else {
        return fallback;
    };
    Theme::parse(name).unwrap_or_else(|| {
        warn!(theme = name, fallback = fallback.name(), "unknown theme, using fallback");
        fallback
    })
}

/// Resolve rendering settings: CLI flags override the config file.
pub fn resolve_render_settings(args: &OutputArgs, config: &AppConfig) -> RenderSettings {
    let format = args.format.as_deref().unwrap_or(&config.output.format);
    let theme = resolve_theme(args.theme.as_deref(), config.output.theme);

    RenderSettings {
        format: OutputFormat::parse(format),
        theme,
        output: args.output.clone(),
        color: config.output.color && !args.no_color,
    }
}
