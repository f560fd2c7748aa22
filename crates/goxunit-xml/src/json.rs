//! JSON serialization of the report model

use std::io::{self, Write};

use goxunit_parse::Report;
use tracing::debug;

use crate::error::RenderError;

/// Write a report as pretty-printed JSON followed by a newline
///
/// # Errors
///
/// Returns `RenderError` if serialization or writing fails.
pub fn write_json(report: &Report, writer: impl io::Write) -> Result<(), RenderError> {
    let mut writer = io::BufWriter::new(writer);
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    debug!(suites = report.suites.len(), "Wrote JSON report");
    Ok(())
}
