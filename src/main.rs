use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use reqtui::app::{App, AppConfig};
use reqtui::render::{Backend, CrosstermBackend};
use reqtui::request::{self, RequestDraft};

mod logging;

/// Build an HTTP request in the terminal.
///
/// m picks the method, u edits the URL, h opens the headers page.
/// Ctrl+C exits and prints the request line.
#[derive(Debug, Parser)]
#[command(name = "reqtui", version, about)]
struct Cli {
    /// Initial method
    #[arg(long, default_value = "GET", value_parser = parse_method)]
    method: String,

    /// Initial URL
    #[arg(long, default_value = "https://www.google.com")]
    url: String,

    /// Directory for log files (default: <tmp>/reqtui/logs)
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Log filter directive, e.g. "reqtui=debug" (RUST_LOG takes precedence)
    #[arg(long)]
    log_filter: Option<String>,
}

fn parse_method(raw: &str) -> Result<String, String> {
    let method = raw.to_ascii_uppercase();
    if request::METHODS.contains(&method.as_str()) {
        Ok(method)
    } else {
        Err(format!("expected one of {}", request::METHODS.join(", ")))
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let logging = logging::init(cli.log_dir.clone(), cli.log_filter.as_deref());

    match run(&cli) {
        Ok(draft) => {
            println!("{}", draft.summary());
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(%err, "reqtui failed");
            match &logging {
                Some(guard) => eprintln!("reqtui: {err} (logs in {})", guard.log_dir().display()),
                None => eprintln!("reqtui: {err}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> reqtui::Result<RequestDraft> {
    let draft = RequestDraft {
        method: cli.method.clone(),
        url: cli.url.clone(),
    };
    let config = AppConfig::new().with_title("reqtui");

    let mut backend = CrosstermBackend::new();
    let (width, height) = backend.size()?;
    config.check_size(width, height)?;

    let (screen, ids) = request::build(width, height, &draft);
    let mut app = App::new(screen, config);

    backend.enter()?;
    let outcome = app.run(&mut backend);
    backend.leave()?;
    outcome?;

    Ok(ids.draft(&app.screen))
}
