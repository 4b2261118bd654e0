pub mod common;
pub mod cycle;

pub use common::{OutputFormat, Palette};
pub use cycle::{CycleReport, DisplayCell, DisplayRow, RelativeLabel};
