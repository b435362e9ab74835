//! Rules CLI
//!
//! Distributes a canonical directory of markdown rule documents to every
//! configured tool destination, either as a copied directory tree or as a
//! single bundled file.

mod cli;
mod commands;
mod error;
mod runner;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    // Notices go to stderr so stdout stays clean for --json output
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(cli.verbose)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    // One-shot setup utility: cooperative single-threaded scheduling is
    // all the I/O fan-out needs
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        match cli.command {
            Some(cmd) => execute_command(cmd).await,
            None => {
                println!("{} Rule distribution utility", "rules".green().bold());
                println!();
                println!("Run {} for available commands.", "rules --help".cyan());
                Ok(())
            }
        }
    })
}

async fn execute_command(cmd: Commands) -> Result<()> {
    let cwd = std::env::current_dir()?;
    match cmd {
        Commands::Prepare {
            source,
            config,
            json,
        } => commands::run_prepare(&cwd, source.as_deref(), config.as_deref(), json).await,
        Commands::Postinstall {
            source,
            config,
            run,
            json,
        } => {
            commands::run_postinstall(&cwd, source.as_deref(), config.as_deref(), &run, json).await
        }
        Commands::ListTools { config } => commands::run_list_tools(&cwd, config.as_deref()),
    }
}
