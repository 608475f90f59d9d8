use std::path::PathBuf;
use clap::Parser;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunIntent {
    Hide,
    Show,
}

#[derive(Debug, Clone, Parser)]
#[command(version, about = "Hide or show the Windows volume OSD")]
pub struct Options {
    /// Show the volume OSD
    #[arg(long)]
    pub show: bool,

    /// Hide the volume OSD (default)
    #[arg(long)]
    pub hide: bool,

    /// Only log info messages and above
    #[arg(short, long)]
    pub quiet: bool,

    /// Also append log lines to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Options {
    // --hide is accepted but never overrides --show
    pub fn intent(&self) -> RunIntent {
        match self.show {
            true => RunIntent::Show,
            false => RunIntent::Hide,
        }
    }
}
