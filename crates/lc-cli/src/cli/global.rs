use std::path::PathBuf;

use clap::ValueEnum;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines.
    Text,
    /// Pretty-printed JSON.
    Json,
    /// Compact JSON.
    Raw,
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub quiet: bool,
    pub out_dir: Option<PathBuf>,
    pub strict: bool,
}
