use crate::presentation::components::{PickerAction, ProductPicker};
use crate::presentation::view_models::Palette;
use anyhow::{Result, bail};
use crossterm::{
    cursor::{MoveToColumn, MoveUp},
    event::{self, Event, KeyEventKind},
    queue,
    terminal::{Clear, ClearType, disable_raw_mode, enable_raw_mode},
};
use is_terminal::IsTerminal;
use std::io::{self, Write};

/// Restores cooked mode on every exit path, including `?` and panics.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

/// Ask the user to choose among `candidates` on stderr.
///
/// Fails instead of blocking when stdin is not a terminal.
pub fn pick_product(query: &str, candidates: Vec<String>, palette: Palette) -> Result<String> {
    if !io::stdin().is_terminal() {
        bail!(
            "no exact match for '{}'; candidates: {}",
            query,
            candidates.join(", ")
        );
    }

    let mut picker = ProductPicker::new(candidates);
    let mut err = io::stderr();
    let _guard = RawModeGuard::enable()?;

    let mut drawn = 0;
    loop {
        drawn = redraw(&mut err, &picker, query, palette, drawn)?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match picker.handle_input(key) {
            Some(PickerAction::Select(name)) => {
                clear(&mut err, drawn)?;
                tracing::info!(product = %name, "selected product");
                return Ok(name);
            }
            Some(PickerAction::Cancel) => {
                clear(&mut err, drawn)?;
                bail!("selection cancelled");
            }
            None => {}
        }
    }
}

fn redraw(
    out: &mut impl Write,
    picker: &ProductPicker,
    query: &str,
    palette: Palette,
    drawn: usize,
) -> Result<usize> {
    clear(out, drawn)?;

    let mut lines = vec![format!(
        "{} {}",
        palette.title(&format!("No exact match for '{}'. Select a product:", query)),
        picker.query()
    )];
    for (index, name) in picker.visible().iter().enumerate() {
        if index == picker.selected() {
            lines.push(palette.paint(&format!("> {}", name), palette.active));
        } else {
            lines.push(format!("  {}", name));
        }
    }
    lines.push(palette.dim("↑/↓ move, type to filter, enter select, esc cancel"));

    // Raw mode: explicit carriage returns.
    for (index, line) in lines.iter().enumerate() {
        if index > 0 {
            write!(out, "\r\n")?;
        }
        write!(out, "{}", line)?;
    }
    out.flush()?;
    Ok(lines.len())
}

/// Erase the `drawn` lines of the previous frame, leaving the cursor at
/// the start of the first one.
fn clear(out: &mut impl Write, drawn: usize) -> Result<()> {
    if drawn > 1 {
        queue!(out, MoveUp((drawn - 1) as u16))?;
    }
    if drawn > 0 {
        queue!(out, MoveToColumn(0), Clear(ClearType::FromCursorDown))?;
    }
    out.flush()?;
    Ok(())
}
