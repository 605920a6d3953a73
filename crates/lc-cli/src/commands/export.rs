use anyhow::Context;
use lc_config::LcConfig;
use lc_export::{ContentExporter, ExportSummary};

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output;

/// Handle `lifecourse export` (and a bare `lifecourse`).
pub fn handle(config: &LcConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let summary = execute(config)?;
    output::emit(&render(&summary, flags.format)?, flags.quiet);
    Ok(())
}

pub fn execute(config: &LcConfig) -> anyhow::Result<ExportSummary> {
    let catalog = lc_content::canonical().context("failed to build content catalog")?;
    ContentExporter::new(config)
        .with_revision(super::revision_string())
        .run(&catalog)
        .with_context(|| format!("export to {} failed", config.output.dir.display()))
}

fn render(summary: &ExportSummary, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(notice(summary)),
        _ => output::render(summary, format),
    }
}

/// The completion notice printed after a successful export.
pub fn notice(summary: &ExportSummary) -> String {
    let revision = summary
        .revision
        .as_deref()
        .map(|r| format!(" (revision {r})"))
        .unwrap_or_default();
    format!(
        "Content written: {} files to {}{revision}",
        summary.files.len(),
        summary.directory.display()
    )
}
