use anyhow::{Context, bail};
use lc_config::LcConfig;
use lc_core::{IntegrityReport, Severity};

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output;

/// Handle `lifecourse validate`.
pub fn handle(config: &LcConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let catalog = lc_content::canonical().context("failed to build content catalog")?;
    let report = catalog.integrity();

    let rendered = match flags.format {
        OutputFormat::Text => render_text(&report),
        format => output::render(&report, format)?,
    };
    output::emit(&rendered, flags.quiet);

    let blocking = report.blocking(config.validation.strict).len();
    if blocking > 0 {
        bail!("{blocking} blocking integrity finding(s)");
    }
    Ok(())
}

fn render_text(report: &IntegrityReport) -> String {
    if report.is_clean() {
        return "No integrity findings.".to_string();
    }
    report
        .findings
        .iter()
        .map(|finding| {
            let label = match finding.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
            };
            format!("{label}: {finding}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
