use std::path::PathBuf;

use clap::{Parser, ValueHint};

#[derive(Debug, Parser)]
#[command(
    name = "branch-sweep",
    about = "Interactively select and delete local Git branches",
    version,
    propagate_version = true
)]
pub struct Cli {
    /// Path to the Git repository (defaults to current directory).
    #[arg(long, value_hint = ValueHint::DirPath)]
    pub repo: Option<PathBuf>,

    /// Only list deletable branches without entering interactive deletion.
    #[arg(long)]
    pub list_only: bool,

    /// Show what would happen without deleting.
    #[arg(long)]
    pub dry_run: bool,

    /// Render prompts as plain lines on stdout instead of taking over the
    /// terminal. The ACCESSIBLE environment variable enables this too.
    #[arg(long)]
    pub accessible: bool,
}
