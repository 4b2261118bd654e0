use super::traits::CycleRenderer;
use crate::presentation::formatters::{combine_label, escape_html};
use crate::presentation::view_models::{CycleReport, DisplayCell};
use anyhow::Result;
use std::io::Write;

/// Plain `<table>` with an inline green/red color per row.
pub struct HtmlRenderer;

fn cell(value: &DisplayCell) -> String {
    escape_html(&combine_label(value.relative(), &value.raw))
}

impl CycleRenderer for HtmlRenderer {
    fn render(&self, report: &CycleReport, out: &mut dyn Write) -> Result<()> {
        writeln!(
            out,
            "<h1>Release cycles for {}</h1>",
            escape_html(&report.product)
        )?;
        writeln!(out, "<table>")?;
        writeln!(out, "  <thead>")?;
        writeln!(
            out,
            "    <tr><th>CYCLE</th><th>LATEST</th><th>RELEASED</th><th>SUPPORT</th><th>EOL</th><th>LTS</th></tr>"
        )?;
        writeln!(out, "  </thead>")?;
        writeln!(out, "  <tbody>")?;

        for row in &report.rows {
            let color = if row.is_eol { "red" } else { "green" };
            writeln!(
                out,
                "    <tr style=\"color: {};\"><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                color,
                escape_html(&row.cycle),
                escape_html(&row.latest),
                cell(&row.released),
                cell(&row.support),
                cell(&row.eol),
                if row.lts { "✔" } else { "" }
            )?;
        }

        writeln!(out, "  </tbody>")?;
        writeln!(out, "</table>")?;
        Ok(())
    }
}
