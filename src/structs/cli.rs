use std::path::PathBuf;
use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser, Debug)]
#[clap(name = "ddwebhook")]
#[clap(about = "Manage the Datadog webhook integration declaratively", long_about = None)]
pub struct Cli {
    /// Path of the local state file
    #[clap(short, long, global = true)]
    pub state: Option<PathBuf>,

    /// Enable debug logging
    #[clap(short, long, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}
