use clap::{Args, Subcommand};

/// Top-level command tree. Running without a subcommand exports.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Write all five content files.
    Export,
    /// Report content files that differ from what export would write.
    Check,
    /// Run the integrity check without writing anything.
    Validate,
    /// Print a JSON Schema, or list schema names.
    Schema(SchemaArgs),
    /// List content revisions.
    Changelog,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Schema name (e.g. `questions`, `life_stage`). Omit to list names.
    pub name: Option<String>,
}
