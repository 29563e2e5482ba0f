//! Strictly Minimax - terminal runner
//!
//! Play against the engine, ask it for a move, or watch it play itself.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use strictly_minimax_cli::{Cli, Command, RunnerConfig, runner};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = RunnerConfig::load(cli.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level())),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(command = ?cli.command, "Starting strictly_minimax");

    let stdout = std::io::stdout();
    match cli.command {
        Command::Play { human, stats } => {
            let config = config.with_human(human).with_show_stats(stats);
            runner::play(&config, std::io::stdin().lock(), stdout.lock())?;
        }
        Command::Best { board, json } => {
            runner::best(&board, json, stdout.lock())?;
        }
        Command::SelfPlay { board, json } => {
            runner::self_play_command(board.as_deref(), json, stdout.lock())?;
        }
    }

    Ok(())
}
