use super::traits::CycleRenderer;
use crate::presentation::view_models::CycleReport;
use anyhow::Result;
use std::io::Write;

pub const HEADERS: [&str; 6] = ["CYCLE", "LATEST", "RELEASED", "SUPPORT", "EOL", "LTS"];

/// Raw machine values only; relative labels never appear.
pub struct CsvRenderer;

impl CycleRenderer for CsvRenderer {
    fn render(&self, report: &CycleReport, out: &mut dyn Write) -> Result<()> {
        let mut writer = csv::Writer::from_writer(out);
        writer.write_record(HEADERS)?;

        for row in &report.rows {
            writer.write_record([
                row.cycle.as_str(),
                row.latest.as_str(),
                row.released.raw.as_str(),
                row.support.raw.as_str(),
                row.eol.raw.as_str(),
                if row.lts { "true" } else { "false" },
            ])?;
        }

        writer.flush()?;
        Ok(())
    }
}
