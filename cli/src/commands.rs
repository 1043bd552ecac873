pub mod grades;
pub mod run;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "archivr")]
#[command(about = "Archives CSV files under timestamped names, logging each file's content.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Less chrome: once drops headers, twice leaves results only
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Archive the CSV files in the working directory
    #[command(alias = "r")]
    Run {
        /// Directory to scan (defaults to the current directory)
        #[arg(long)]
        dir: Option<PathBuf>,
        /// Archive destination (defaults to <dir>/archive)
        #[arg(long)]
        archive_dir: Option<PathBuf>,
        /// Log file (defaults to <dir>/organizer.log)
        #[arg(long)]
        log: Option<PathBuf>,
    },
    /// Enter assignments interactively and write grades.csv
    #[command(alias = "g")]
    Grades {
        /// Output path for the generated CSV
        #[arg(long, default_value = "grades.csv")]
        out: PathBuf,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
