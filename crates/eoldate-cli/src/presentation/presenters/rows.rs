use crate::presentation::presenters::relative::RelativeProjector;
use crate::presentation::view_models::{CycleReport, DisplayCell, DisplayRow};
use chrono::{DateTime, Utc};
use eoldate_types::{CycleSummary, ReleaseCycle, format_date};

/// Flatten cycles into display rows, dropping EOL cycles unless `show_all`.
///
/// Input order is kept. EOL status is evaluated once per cycle and shared by
/// the filter and the row.
pub fn prepare_rows(
    cycles: &[ReleaseCycle],
    show_all: bool,
    projector: &RelativeProjector,
) -> Vec<DisplayRow> {
    let now = projector.now();
    cycles
        .iter()
        .filter_map(|cycle| {
            let is_eol = cycle.is_eol(now);
            if is_eol && !show_all {
                return None;
            }
            Some(to_row(cycle, is_eol, projector))
        })
        .collect()
}

fn to_row(cycle: &ReleaseCycle, is_eol: bool, projector: &RelativeProjector) -> DisplayRow {
    DisplayRow {
        cycle: cycle.cycle.clone(),
        latest: cycle.latest.clone(),
        released: DisplayCell {
            label: projector.release(cycle.release_date),
            raw: cycle.release_date.map(format_date).unwrap_or_default(),
        },
        support: DisplayCell {
            label: projector.support(&cycle.support),
            raw: cycle.support.raw_value(),
        },
        eol: DisplayCell {
            label: projector.eol(&cycle.eol),
            raw: cycle.eol.raw_value(),
        },
        lts: cycle.is_lts(),
        is_eol,
    }
}

/// Build the report for one product with a single sampled `now`.
pub fn present_cycles(
    product: &str,
    cycles: &[ReleaseCycle],
    show_all: bool,
    now: DateTime<Utc>,
) -> CycleReport {
    let projector = RelativeProjector::new(now);
    CycleReport {
        product: product.to_string(),
        rows: prepare_rows(cycles, show_all, &projector),
        summary: CycleSummary::tally(cycles, now),
        show_all,
    }
}
