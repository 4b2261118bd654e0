pub mod cell;
pub mod duration;

pub use cell::{combine_label, escape_html, escape_markdown, spread_cell, spread_width};
pub use duration::format_duration;
