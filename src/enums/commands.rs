use std::path::PathBuf;
use clap::Subcommand;
use crate::config::constants::DEFAULT_IMPORT_ID;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Write a sample configuration file
    Init,
    /// Print the resource schema as JSON
    Schema,
    /// Validate a hooks file without contacting Datadog
    Validate {
        #[clap(short, long)]
        file: PathBuf,
    },
    /// Compare a hooks file with the local state
    Plan {
        #[clap(short, long)]
        file: PathBuf,
    },
    /// Create the webhook integration from a hooks file
    Create {
        #[clap(short, long)]
        file: PathBuf,
    },
    /// Refresh the local state from Datadog
    Read,
    /// Report whether the webhook integration exists
    Exists,
    /// Delete the whole webhook integration
    Delete,
    /// Seed the local state from an existing integration
    Import {
        #[clap(default_value = DEFAULT_IMPORT_ID)]
        id: String,
    },
}
