use std::io::{self, BufRead, Write};

use clap::Parser;
use common::error::{IntoError, Result};
use dotenv::dotenv;
use order_board::{Command, OrderBoardConfig, OrderBoardService, OutputFormat, Reply};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Order board CLI
///
/// Reads one command per line from stdin, e.g. `sell alice 1.5 10`, `book`,
/// `cancel <order-id>`. Type `help` for the full list.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Tracing filter directive, overrides BOARD_LOG
    #[arg(short, long)]
    log_level: Option<String>,

    /// Print replies as JSON, overrides BOARD_OUTPUT
    #[arg(long)]
    json: bool,
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenv().ok();

    let cli = Cli::parse();

    let mut config = OrderBoardConfig::from_env()?;
    if let Some(filter) = cli.log_level {
        config.log_filter = filter;
    }
    if cli.json {
        config.output = OutputFormat::Json;
    }

    // Logs go to stderr, replies to stdout
    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.log_filter)?)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    info!("Order board started, output format {:?}", config.output);

    let board = OrderBoardService::new();
    run(&board, config.output)?;

    info!("Order board stopped");
    Ok(())
}

fn run(board: &OrderBoardService, format: OutputFormat) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line.map_err(|e| e.into_error("Failed to read command"))?;

        let output = match Command::parse(&line) {
            Ok(None) => continue,
            Ok(Some(command)) => match command.execute(board) {
                Ok(Reply::Quit) => break,
                Ok(reply) => reply.render(format)?,
                Err(e) => render_error(&e, format),
            },
            Err(e) => render_error(&e, format),
        };

        writeln!(stdout, "{}", output).map_err(|e| e.into_error("Failed to write reply"))?;
    }

    Ok(())
}

fn render_error(e: &common::Error, format: OutputFormat) -> String {
    error!("{}", e);
    match format {
        OutputFormat::Text => format!("error: {}", e),
        OutputFormat::Json => serde_json::json!({ "error": e.to_string() }).to_string(),
    }
}
