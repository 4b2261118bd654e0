pub mod csv;
pub mod html;
pub mod markdown;
pub mod table;
pub mod traits;

pub use self::csv::CsvRenderer;
pub use html::HtmlRenderer;
pub use markdown::MarkdownRenderer;
pub use table::TableRenderer;
pub use traits::CycleRenderer;

use crate::presentation::view_models::{CycleReport, OutputFormat, Palette};
use anyhow::Result;
use std::io::Write;

pub fn renderer_for(format: OutputFormat, palette: Palette) -> Box<dyn CycleRenderer> {
    tracing::debug!(?format, "selected renderer");
    match format {
        OutputFormat::Table => Box::new(TableRenderer::new(palette)),
        OutputFormat::Markdown => Box::new(MarkdownRenderer),
        OutputFormat::Csv => Box::new(CsvRenderer),
        OutputFormat::Html => Box::new(HtmlRenderer),
    }
}

/// Write `report` in `format`, or a short notice when no rows survived the
/// filter. The notice is the same for every format.
pub fn render_report(
    report: &CycleReport,
    format: OutputFormat,
    palette: Palette,
    out: &mut dyn Write,
) -> Result<()> {
    if report.rows.is_empty() {
        return write_empty_notice(report, palette, out);
    }
    renderer_for(format, palette).render(report, out)
}

fn write_empty_notice(report: &CycleReport, palette: Palette, out: &mut dyn Write) -> Result<()> {
    if report.show_all {
        writeln!(out, "No release cycles found for {}", report.product)?;
    } else {
        writeln!(out, "No active release cycles found for {}", report.product)?;
        writeln!(
            out,
            "{}",
            palette.dim("Use --all to show end-of-life versions")
        )?;
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::presentation::view_models::{DisplayCell, DisplayRow, RelativeLabel};
    use eoldate_types::CycleSummary;

    fn dated(relative: &str, date: &str) -> DisplayCell {
        DisplayCell {
            label: RelativeLabel::new(relative, date),
            raw: date.to_string(),
        }
    }

    fn flagged(label: &str, raw: bool) -> DisplayCell {
        DisplayCell {
            label: RelativeLabel::flag(label),
            raw: raw.to_string(),
        }
    }

    /// Two active python cycles as seen from 2026-01-15, one EOL cycle hidden.
    pub(crate) fn sample_report() -> CycleReport {
        CycleReport {
            product: "python".to_string(),
            rows: vec![
                DisplayRow {
                    cycle: "3.14".to_string(),
                    latest: "3.14.2".to_string(),
                    released: dated("3m ago", "2025-10-07"),
                    support: dated("in 1y 8m", "2027-10-01"),
                    eol: dated("in 4y 10m", "2030-10-31"),
                    lts: false,
                    is_eol: false,
                },
                DisplayRow {
                    cycle: "3.13".to_string(),
                    latest: "3.13.11".to_string(),
                    released: dated("1y 3m ago", "2024-10-07"),
                    support: flagged("Active", true),
                    eol: dated("in 3y 9m", "2029-10-31"),
                    lts: true,
                    is_eol: false,
                },
            ],
            summary: CycleSummary { active: 2, eol: 1 },
            show_all: false,
        }
    }

    pub(crate) fn eol_row() -> DisplayRow {
        DisplayRow {
            cycle: "2.7".to_string(),
            latest: "2.7.18".to_string(),
            released: dated("5y ago", "2020-04-20"),
            support: flagged("-", false),
            eol: flagged("Ended", true),
            lts: false,
            is_eol: true,
        }
    }

    pub(crate) fn render_to_string(renderer: &dyn CycleRenderer, report: &CycleReport) -> String {
        let mut buf = Vec::new();
        renderer.render(report, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn render_with(report: &CycleReport, format: OutputFormat) -> String {
        let mut buf = Vec::new();
        render_report(report, format, Palette::plain(), &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_empty_rows_hint_at_all_flag() {
        let mut report = sample_report();
        report.rows.clear();

        for format in [OutputFormat::Table, OutputFormat::Csv, OutputFormat::Html] {
            assert_eq!(
                render_with(&report, format),
                "No active release cycles found for python\n\
                 Use --all to show end-of-life versions\n"
            );
        }
    }

    #[test]
    fn test_empty_rows_with_all() {
        let mut report = sample_report();
        report.rows.clear();
        report.show_all = true;

        assert_eq!(
            render_with(&report, OutputFormat::Markdown),
            "No release cycles found for python\n"
        );
    }

    #[test]
    fn test_dispatches_by_format() {
        let report = sample_report();

        assert!(render_with(&report, OutputFormat::Csv).starts_with("CYCLE,LATEST"));
        assert!(render_with(&report, OutputFormat::Markdown).starts_with("# Release cycles"));
        assert!(render_with(&report, OutputFormat::Html).starts_with("<h1>"));
        assert!(render_with(&report, OutputFormat::Table).contains("2 active"));
    }
}
