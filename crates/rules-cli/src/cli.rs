//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Rules - distribute markdown rule documents to tool destinations
#[derive(Parser, Debug)]
#[command(name = "rules")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Copy or bundle rules into every configured tool destination
    ///
    /// Reads markdown rules from the source directory and distributes them:
    /// directory tools get a recursive copy, file tools get a single
    /// bundled markdown file.
    Prepare {
        /// Source directory containing the rule documents
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// Manifest file (defaults to rules.toml in the current directory)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output the summary as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Run the configured hook commands, then prepare rules
    ///
    /// Hooks come from the manifest's `postinstall` list; additional
    /// commands can be supplied with repeated --run flags.
    Postinstall {
        /// Source directory containing the rule documents
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// Manifest file (defaults to rules.toml in the current directory)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Extra command to run before preparing rules (repeatable)
        #[arg(long = "run")]
        run: Vec<String>,

        /// Output the summary as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Print the effective tool list
    ListTools {
        /// Manifest file (defaults to rules.toml in the current directory)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}
