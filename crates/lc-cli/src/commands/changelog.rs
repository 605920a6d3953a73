use lc_content::ContentRevision;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output;

/// Handle `lifecourse changelog`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let revisions = lc_content::revisions();
    let rendered = match flags.format {
        OutputFormat::Text => render_text(revisions),
        format => output::render(&revisions, format)?,
    };
    output::emit(&rendered, flags.quiet);
    Ok(())
}

fn render_text(revisions: &[ContentRevision]) -> String {
    revisions
        .iter()
        .rev()
        .map(|r| format!("{} {} {}", r.version, r.date, r.summary))
        .collect::<Vec<_>>()
        .join("\n")
}
