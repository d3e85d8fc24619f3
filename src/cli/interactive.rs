use std::io::{BufRead, Write};

use tracing::debug;

use crate::client::transport::AnalysisTransport;
use crate::controller::controller::InputController;
use crate::render::console::format_console_report;

const HELP: &str = "\
Commands:
  url <value>   set the URL to analyze
  submit        analyze the current URL
  theme         toggle between dark and light
  show          render the current dashboard again
  help          show this help
  quit          leave the session
Any other input is taken as a URL and analyzed right away.
";

// ============================================================================
// Interactive session: one command per line
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    SetUrl(String),
    Submit,
    ToggleTheme,
    Show,
    Help,
    Quit,
    /// Set the URL and submit in one go
    Analyze(String),
    Empty,
}

/// Parse one input line. Keywords are case-insensitive.
pub fn parse_command(line: &str) -> SessionCommand {
    let line = line.trim();
    if line.is_empty() {
        return SessionCommand::Empty;
    }

    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    match head.to_lowercase().as_str() {
        "url" => SessionCommand::SetUrl(rest.to_string()),
        "submit" => SessionCommand::Submit,
        "analyze" if rest.is_empty() => SessionCommand::Submit,
        "analyze" => SessionCommand::Analyze(rest.to_string()),
        "theme" => SessionCommand::ToggleTheme,
        "show" => SessionCommand::Show,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" => SessionCommand::Quit,
        _ => SessionCommand::Analyze(line.to_string()),
    }
}

/// Run a session until `quit` or end of input.
pub fn run_interactive<T, R, W>(
    controller: &mut InputController<T>,
    input: R,
    output: &mut W,
    color: bool,
) -> std::io::Result<()>
where
    T: AnalysisTransport,
    R: BufRead,
    W: Write,
{
    writeln!(output, "Website Health Analyzer. Type 'help' for commands.")?;
    write!(output, "> ")?;
    output.flush()?;

    for line in input.lines() {
        let command = parse_command(&line?);
        debug!(?command, "session command");

        match command {
            SessionCommand::Empty => {}
            SessionCommand::SetUrl(url) => {
                controller.set_url(&url);
                writeln!(output, "URL set to: {}", controller.url())?;
            }
            SessionCommand::Submit => {
                controller.submit();
                output.write_all(format_console_report(&controller.dashboard(), color).as_bytes())?;
            }
            SessionCommand::Analyze(url) => {
                controller.set_url(&url);
                controller.submit();
                output.write_all(format_console_report(&controller.dashboard(), color).as_bytes())?;
            }
            SessionCommand::ToggleTheme => {
                let theme = controller.toggle_theme();
                writeln!(output, "Theme: {}", theme.name())?;
            }
            SessionCommand::Show => {
                output.write_all(format_console_report(&controller.dashboard(), color).as_bytes())?;
            }
            SessionCommand::Help => output.write_all(HELP.as_bytes())?,
            SessionCommand::Quit => break,
        }

        write!(output, "> ")?;
        output.flush()?;
    }

    writeln!(output)?;
    Ok(())
}
