use super::traits::CycleRenderer;
use crate::presentation::formatters::{combine_label, escape_markdown};
use crate::presentation::view_models::{CycleReport, DisplayCell};
use anyhow::Result;
use std::io::Write;

pub struct MarkdownRenderer;

fn cell(value: &DisplayCell) -> String {
    escape_markdown(&combine_label(value.relative(), &value.raw))
}

impl CycleRenderer for MarkdownRenderer {
    fn render(&self, report: &CycleReport, out: &mut dyn Write) -> Result<()> {
        writeln!(
            out,
            "# Release cycles for {}",
            escape_markdown(&report.product)
        )?;
        writeln!(out)?;
        writeln!(out, "| CYCLE | LATEST | RELEASED | SUPPORT | EOL | LTS |")?;
        writeln!(out, "|-------|--------|----------|---------|-----|-----|")?;

        for row in &report.rows {
            writeln!(
                out,
                "| {} | {} | {} | {} | {} | {} |",
                escape_markdown(&row.cycle),
                escape_markdown(&row.latest),
                cell(&row.released),
                cell(&row.support),
                cell(&row.eol),
                if row.lts { "✔" } else { "" }
            )?;
        }
        Ok(())
    }
}
