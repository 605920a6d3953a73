use serde::Serialize;

use crate::cli::OutputFormat;

/// Render a serializable response as JSON. `Text` falls back to pretty JSON
/// for commands without a line-oriented rendering.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json | OutputFormat::Text => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a rendered response unless quiet.
pub fn emit(rendered: &str, quiet: bool) {
    if !quiet {
        println!("{rendered}");
    }
}
