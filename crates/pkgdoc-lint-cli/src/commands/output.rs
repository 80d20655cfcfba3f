//! Output formatting for lint results.

use anyhow::Result;
use pkgdoc_lint_core::LintResult;
use std::io::Write;

use crate::OutputFormat;

/// Print lint results to stdout in the specified format.
pub fn print(result: &LintResult, format: OutputFormat) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Text => write_text(&mut out, result)?,
        OutputFormat::Json => write_json(&mut out, result)?,
    }
    out.flush()?;
    Ok(())
}

/// Writes one `<package>: <violations>` line per failing package.
fn write_text(out: &mut impl Write, result: &LintResult) -> Result<()> {
    for report in result.failing() {
        writeln!(out, "{}: {}", report.package, report.summary())?;
    }

    tracing::info!(
        "{} package(s) checked, {} skipped, {} with violations",
        result.packages_found(),
        result.packages_skipped(),
        result.failing().count()
    );
    Ok(())
}

fn write_json(out: &mut impl Write, result: &LintResult) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, result)?;
    writeln!(out)?;
    Ok(())
}
