//! Tic-tac-toe replay driver.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use tictactoe_replay::{MatchScript, replay};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    info!(script = %cli.script.display(), "Starting replay");

    let script = MatchScript::from_file(&cli.script)?;
    let report = replay(&script)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", report.snapshot.board);
    match report.snapshot.result {
        Some(result) => println!("\n{}", result),
        None => println!(
            "\nIn progress: {} to move after {} turns",
            report.snapshot.current_player, report.snapshot.turns_passed
        ),
    }
    if report.ignored > 0 {
        println!("{} move(s) ignored", report.ignored);
    }

    Ok(())
}
