use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "edffix")]
#[command(about = "Rewrites unset start dates in EDF recording headers.")]
pub struct CommandLine {
    /// Directory to scan for .edf recordings
    #[arg(default_value = ".")]
    pub root: PathBuf,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn root_dir(&self) -> PathBuf {
        self.root.clone()
    }
}
