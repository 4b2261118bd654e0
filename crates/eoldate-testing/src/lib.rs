//! Testing infrastructure for eol-date tests.
//!
//! - `fixtures`: a fixed clock and release-cycle builders
//! - `TestWorld`: temp directory with a feed file and config for CLI runs

pub mod fixtures;
pub mod world;

pub use fixtures::{CycleBuilder, days_after, days_before, fixed_now};
pub use world::TestWorld;
