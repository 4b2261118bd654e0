use crate::presentation::view_models::CycleReport;
use anyhow::Result;
use std::io::Write;

/// One output encoding of a cycle report.
///
/// Implementations only fail when writing to `out` fails.
pub trait CycleRenderer {
    fn render(&self, report: &CycleReport, out: &mut dyn Write) -> Result<()>;
}
