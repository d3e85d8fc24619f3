use clap::Parser;
use site_health::cli::commands::{cmd_analyze, cmd_render};
use site_health::cli::config::{
    Cli, Commands, ENDPOINT_ENV, load_config, resolve_endpoint, resolve_render_settings,
    resolve_theme,
};
use site_health::cli::interactive::run_interactive;
use site_health::client::transport::HttpTransport;
use site_health::controller::controller::InputController;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.as_deref());

    // Resolve endpoint: CLI > config > env > defaults
    let env_endpoint = std::env::var(ENDPOINT_ENV).ok();
    let endpoint = resolve_endpoint(cli.endpoint.as_deref(), &config, env_endpoint.as_deref());

    match cli.command {
        Commands::Analyze { url, output } => {
            let settings = resolve_render_settings(&output, &config);
            if !cmd_analyze(&url, &endpoint, &settings)? {
                std::process::exit(1);
            }
        }
        Commands::Render {
            input,
            status,
            url,
            output,
        } => {
            let settings = resolve_render_settings(&output, &config);
            if !cmd_render(&input, status, &url, &settings)? {
                std::process::exit(1);
            }
        }
        Commands::Interactive { theme, no_color } => {
            let theme = resolve_theme(theme.as_deref(), config.output.theme);
            let mut controller = InputController::with_theme(HttpTransport::new(&endpoint), theme);
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            run_interactive(
                &mut controller,
                stdin.lock(),
                &mut stdout,
                config.output.color && !no_color,
            )?;
        }
    }

    Ok(())
}

/// Logs go to stderr so rendered reports on stdout stay clean. `RUST_LOG` wins
/// over `-v`.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "site_health=debug",
        _ => "site_health=trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}
