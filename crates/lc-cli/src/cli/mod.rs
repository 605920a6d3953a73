use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::{Commands, SchemaArgs};

/// Top-level CLI parser for the `lifecourse` binary.
#[derive(Debug, Parser)]
#[command(
    name = "lifecourse",
    version,
    about = "Lifecourse - exports the exhibit's content files"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format: text, json, raw
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output directory (overrides `output.dir` from config)
    #[arg(short, long, global = true)]
    pub out_dir: Option<PathBuf>,

    /// Treat integrity warnings as errors
    #[arg(long, global = true)]
    pub strict: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            out_dir: self.out_dir.clone(),
            strict: self.strict,
        }
    }
}
