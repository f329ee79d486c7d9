use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// JSON config file (defaults to the user config dir when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Sort a media list into screenshot/whatsapp/camera/downloads/video/other
    Categorize {
        /// JSON array of media items
        input: PathBuf,

        /// Print machine-readable JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// Group probable duplicate photos
    Duplicates {
        /// JSON array of media items
        input: PathBuf,

        /// Print machine-readable JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// Storage usage per category and large files
    Stats {
        /// JSON array of media items
        input: PathBuf,

        /// Print machine-readable JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
}
