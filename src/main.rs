//! pwd-analyzer: interactive password strength checker

use anyhow::{Context, Result};
use clap::Parser;
use pwd_analyzer::session::{OutputFormat, Session};
use pwd_analyzer::{CommonPasswords, PasswordAnalyzer, BLACKLIST_PATH_ENV};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Scores passwords read from stdin, one per line
#[derive(Parser, Debug)]
#[command(name = "pwd-analyzer")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File of extra common passwords, one per line
    #[arg(long, value_name = "PATH", env = BLACKLIST_PATH_ENV)]
    blacklist: Option<PathBuf>,

    /// Output one JSON object per password instead of the interactive report
    #[arg(long, short)]
    json: bool,

    /// Verbose logging on stderr
    #[arg(long, short)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    if let Err(e) = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .try_init()
    {
        eprintln!("warning: logging disabled: {e}");
    }
}

fn run(args: Args) -> Result<()> {
    let common = match &args.blacklist {
        Some(path) => CommonPasswords::from_path(path)
            .with_context(|| format!("Failed to load blacklist {}", path.display()))?,
        None => CommonPasswords::default(),
    };
    tracing::debug!(entries = common.len(), "common password set ready");

    let analyzer = PasswordAnalyzer::new(common);
    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let summary = Session::new(&analyzer, format)
        .run(io::stdin().lock(), io::stdout().lock())
        .context("I/O error during session")?;

    tracing::info!(
        evaluated = summary.evaluated,
        skipped = summary.skipped_empty,
        "session finished"
    );
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
