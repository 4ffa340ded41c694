use anyhow::Result;
use chrono::Local;
use clap::Parser;
use std::io;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod entry;
mod error;
mod store;
mod util;
mod workflow;

use crate::cli::RootArgs;
use crate::entry::Prompter;
use crate::util::display_path;
use crate::workflow::{run_update, UpdateSummary};

fn main() -> ExitCode {
    let args = RootArgs::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "update failed");
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &RootArgs) -> Result<()> {
    let settings = config::resolve_settings(args.config.as_deref(), args.data.as_deref())?;
    let stdin = io::stdin();
    let mut source = Prompter::new(stdin.lock(), io::stdout());
    let today = Local::now().date_naive();

    let summary = run_update(&settings, &mut source, today)?;
    tracing::info!(
        date = %summary.date,
        outcome = ?summary.outcome,
        records = summary.records,
        "saved week"
    );
    print_summary(&summary);
    Ok(())
}

fn print_summary(summary: &UpdateSummary) {
    let cwd = std::env::current_dir().ok();
    println!();
    println!("Saved week {}. Total = {}.", summary.date, summary.total);
    println!(
        "Updated {}",
        display_path(&summary.data_path, cwd.as_deref())
    );
    println!("Commit and push to publish via GitHub Pages.");
}

/// Logs go to stderr so they never interleave with prompts on stdout.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
