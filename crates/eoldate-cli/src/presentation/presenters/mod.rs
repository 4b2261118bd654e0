pub mod relative;
pub mod rows;

pub use relative::RelativeProjector;
pub use rows::{prepare_rows, present_cycles};
