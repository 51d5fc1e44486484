use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, ValueHint};
use tracing::Level;

mod run_impl;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "dirtree",
    version,
    about = "Print a directory as an indented tree",
    long_about = None
)]
pub struct Args {
    /// Directory to print
    #[arg(
        value_name = "PATH",
        env = "DIRTREE_ROOT",
        default_value = ".",
        value_hint = ValueHint::DirPath
    )]
    pub path: PathBuf,

    /// Reproduce the old whole-subtree walk output, duplicated directories included
    #[arg(long = "legacy-walk", action = ArgAction::SetTrue)]
    pub legacy_walk: bool,

    /// Skip subdirectories that cannot be read instead of failing
    #[arg(long = "skip-unreadable", action = ArgAction::SetTrue)]
    pub skip_unreadable: bool,

    /// Descend into symlinked directories (no cycle detection)
    #[arg(long = "follow-symlinks", action = ArgAction::SetTrue, conflicts_with = "legacy_walk")]
    pub follow_symlinks: bool,

    /// Verbose logging on stderr (repeat for more)
    #[arg(long = "verbose", short = 'v', action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

/// Runs the CLI application.
///
/// # Errors
/// Returns an error if the tree cannot be printed.
pub fn run() -> Result<()> {
    let args = Args::parse();
    setup_tracing(&args);
    run_impl::run_with_args(&args)
}

fn setup_tracing(args: &Args) {
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(std::io::stderr)
        .without_time()
        .compact()
        .init();
}
