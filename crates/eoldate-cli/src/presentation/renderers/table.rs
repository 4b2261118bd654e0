use super::traits::CycleRenderer;
use crate::presentation::formatters::{spread_cell, spread_width};
use crate::presentation::view_models::{CycleReport, DisplayCell, DisplayRow, Palette};
use anyhow::Result;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table};
use std::io::Write;

const HEADERS: [&str; 6] = ["CYCLE", "LATEST", "RELEASED", "SUPPORT", "EOL", "LTS"];
const LTS_COLUMN: usize = 5;

/// Interactive terminal table with per-row status colors.
pub struct TableRenderer {
    palette: Palette,
}

impl TableRenderer {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    fn build_table(&self, rows: &[DisplayRow]) -> Table {
        let widths = ColumnWidths::measure(rows);

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL_CONDENSED)
            .apply_modifier(UTF8_ROUND_CORNERS);
        if self.palette.enabled {
            table.enforce_styling();
        } else {
            table.force_no_tty();
        }

        table.set_header(HEADERS.iter().enumerate().map(|(col, title)| {
            let cell = Cell::new(title)
                .add_attribute(Attribute::Bold)
                .fg(Color::AnsiValue(self.palette.table_header));
            if col == LTS_COLUMN {
                cell.set_alignment(CellAlignment::Center)
            } else {
                cell
            }
        }));

        for row in rows {
            let color = Color::AnsiValue(self.palette.row_color(row.is_eol));
            let text = |s: String| Cell::new(s).fg(color);

            let lts = if row.lts {
                Cell::new("✔").fg(Color::AnsiValue(self.palette.lts))
            } else {
                Cell::new("")
            };

            table.add_row(vec![
                text(row.cycle.clone()),
                text(row.latest.clone()),
                text(spread(&row.released, widths.released)),
                text(spread(&row.support, widths.support)),
                text(spread(&row.eol, widths.eol)),
                lts.set_alignment(CellAlignment::Center),
            ]);
        }

        table
    }

    fn summary_line(&self, report: &CycleReport) -> String {
        let summary = report.summary;
        let mut line = format!("{} active", summary.active);
        if summary.eol > 0 && !report.show_all {
            line.push_str(&format!(", {} EOL (use --all to show)", summary.eol));
        } else if summary.eol > 0 {
            line.push_str(&format!(", {} EOL", summary.eol));
        }
        self.palette.dim(&line)
    }
}

fn spread(cell: &DisplayCell, width: usize) -> String {
    spread_cell(cell.relative(), cell.absolute(), width)
}

/// Widest `relative + gap + absolute` per temporal column.
#[derive(Debug, Default, PartialEq, Eq)]
struct ColumnWidths {
    released: usize,
    support: usize,
    eol: usize,
}

impl ColumnWidths {
    fn measure(rows: &[DisplayRow]) -> Self {
        let width = |cell: &DisplayCell| spread_width(cell.relative(), cell.absolute());
        rows.iter().fold(Self::default(), |acc, row| Self {
            released: acc.released.max(width(&row.released)),
            support: acc.support.max(width(&row.support)),
            eol: acc.eol.max(width(&row.eol)),
        })
    }
}

impl CycleRenderer for TableRenderer {
    fn render(&self, report: &CycleReport, out: &mut dyn Write) -> Result<()> {
        writeln!(out)?;
        writeln!(
            out,
            "{}",
            self.palette
                .title(&format!("Release cycles for {}", report.product))
        )?;
        writeln!(out)?;
        writeln!(out, "{}", self.build_table(&report.rows))?;
        writeln!(out)?;
        writeln!(out, "{}", self.summary_line(report))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::renderers::tests::{eol_row, render_to_string, sample_report};

    fn plain() -> TableRenderer {
        TableRenderer::new(Palette::plain())
    }

    #[test]
    fn test_column_widths_skip_flag_only_cells() {
        let report = sample_report();
        let widths = ColumnWidths::measure(&report.rows);

        // "1y 3m ago" + 1 + "2024-10-07"
        assert_eq!(widths.released, 20);
        // "in 1y 8m" + 1 + "2027-10-01"; "Active" alone is narrower
        assert_eq!(widths.support, 19);
        // "in 4y 10m" + 1 + "2030-10-31"
        assert_eq!(widths.eol, 20);
    }

    #[test]
    fn test_cells_right_align_absolute_dates() {
        let output = render_to_string(&plain(), &sample_report());

        assert!(output.contains("3m ago    2025-10-07"));
        assert!(output.contains("1y 3m ago 2024-10-07"));
        assert!(output.contains("in 3y 9m  2029-10-31"));
    }

    #[test]
    fn test_layout_and_summary() {
        let output = render_to_string(&plain(), &sample_report());

        assert!(output.starts_with("\nRelease cycles for python\n\n╭"));
        assert!(output.contains("CYCLE"));
        assert!(output.contains("✔"));
        assert!(output.ends_with("\n\n2 active, 1 EOL (use --all to show)\n"));
        assert!(!output.contains('\u{1b}'));
    }

    #[test]
    fn test_summary_when_showing_all() {
        let mut report = sample_report();
        report.rows.push(eol_row());
        report.show_all = true;

        let output = render_to_string(&plain(), &report);
        assert!(output.ends_with("2 active, 1 EOL\n"));
        assert!(output.contains("Ended"));
    }

    #[test]
    fn test_summary_without_eol_cycles() {
        let mut report = sample_report();
        report.summary.eol = 0;

        let output = render_to_string(&plain(), &report);
        assert!(output.ends_with("\n2 active\n"));
    }

    #[test]
    fn test_colored_output_uses_row_palette() {
        let output = render_to_string(&TableRenderer::new(Palette::default()), &sample_report());
        assert!(output.contains("\u{1b}[38;5;42m"));
    }
}
