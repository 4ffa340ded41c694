//! CLI argument parsing.
//!
//! There are no subcommands: running the binary starts the prompts. Flags only
//! override where settings come from.
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "weekly-cases",
    version,
    about = "Record weekly case counts per country into a JSON data file",
    after_help = "Examples:\n  weekly-cases\n  weekly-cases --data site/data/data.json\n  weekly-cases --config ./weekly-cases.json --verbose"
)]
pub struct RootArgs {
    /// Data file to update (overrides the config file and the default location)
    #[arg(long, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Config file with countries and data_path (defaults to the user config dir)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log debug detail to stderr
    #[arg(long)]
    pub verbose: bool,
}
