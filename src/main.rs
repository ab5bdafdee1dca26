// src/main.rs
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tokio::sync::mpsc;

use repl_client::banner;
use repl_client::config::ServiceConfig;
use repl_client::errors::Result;
use repl_client::{
    ControllerEvent, HttpExecutionService, Region, StaticInput, SubmissionController, TerminalScreen,
};

/// Submit a program to a remote execution service and show how it ran.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Source file to submit ("-" reads it from standard input)
    source: PathBuf,

    /// File fed to the program as its standard input
    #[arg(long, value_name = "FILE")]
    stdin: Option<PathBuf>,

    /// Execution endpoint, overriding REPL_ENDPOINT
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Skip the startup banner
    #[arg(long, short)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if !cli.quiet {
        banner::print_banner();
    }

    // Loaded before the logger so RUST_LOG may come from .env
    let dotenv = dotenvy::dotenv();

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    if let Err(e) = dotenv {
        log::debug!("No .env file loaded: {}", e);
    }

    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("❌ {}", e);
            ExitCode::from(2)
        }
    }
}

/// Runs one submission and prints the settled screen. Returns whether a result was shown.
async fn run(cli: Cli) -> Result<bool> {
    let config = ServiceConfig::from_env_with_endpoint(cli.endpoint)?;

    let code = read_source(&cli.source)?;
    let stdin = match &cli.stdin {
        Some(path) => std::fs::read_to_string(path)?,
        None => String::new(),
    };

    let service = HttpExecutionService::from_config(config)?;
    log::info!("🚀 Using execution service at {}", service.endpoint());

    let controller = SubmissionController::new(
        service,
        TerminalScreen::new(),
        StaticInput::new(code, stdin),
    );

    let (events_tx, events_rx) = mpsc::unbounded_channel();
    // The receiver is still alive here, so the send cannot fail
    let _ = events_tx.send(ControllerEvent::Trigger);
    drop(events_tx);

    let screen = controller.run(events_rx).await.into_presenter();
    print!("{}", screen.render());

    Ok(screen.is_visible(Region::StatusPanel))
}

fn read_source(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut code = String::new();
        std::io::stdin().read_to_string(&mut code)?;
        return Ok(code);
    }
    Ok(std::fs::read_to_string(path)?)
}
