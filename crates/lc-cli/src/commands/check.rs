use anyhow::{Context, bail};
use lc_config::LcConfig;
use lc_export::{CheckReport, ContentExporter, FileStatus};

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output;

/// Handle `lifecourse check`. Fails when any file is stale or missing.
pub fn handle(config: &LcConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let catalog = lc_content::canonical().context("failed to build content catalog")?;
    let report = ContentExporter::new(config)
        .check(&catalog)
        .context("failed to compare content files")?;

    let rendered = match flags.format {
        OutputFormat::Text => render_text(&report),
        format => output::render(&report, format)?,
    };
    output::emit(&rendered, flags.quiet);

    let outdated = report.outdated().count();
    if outdated > 0 {
        bail!("{outdated} content file(s) out of date; run 'lifecourse export'");
    }
    Ok(())
}

fn render_text(report: &CheckReport) -> String {
    report
        .files
        .iter()
        .map(|file| {
            let status = match file.status {
                FileStatus::UpToDate => "ok",
                FileStatus::Stale => "stale",
                FileStatus::Missing => "missing",
            };
            format!("{status:<8}{}", file.path.display())
        })
        .collect::<Vec<_>>()
        .join("\n")
}
