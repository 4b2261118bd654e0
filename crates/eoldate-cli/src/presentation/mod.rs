//! # Presentation Layer
//!
//! Adapted MVVM: data only flows one way.
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] --> io::Write
//!                  (projection)       (rows)         (table/md/csv/html)
//! ```
//!
//! The interactive product picker is a Component: it owns its query and
//! cursor, and `ui::picker` only forwards keys and draws.
//!
//! ## Rules
//!
//! ### 1. Raw data survives to the ViewModel
//! Every temporal cell keeps its machine value (`raw`) next to the human
//! label. CSV prints only raw values; the table prints only labels.
//!
//! ### 2. One `now` per report
//! Presenters never read the clock. The handler samples it once and the
//! `RelativeProjector` carries it, so the filter, the labels and the summary
//! can't disagree about what has ended.
//!
//! ### 3. Renderers fail only on I/O
//! Anything that can go wrong with the data was absorbed during decoding.
//!
//! ## Directory Guide
//!
//! | If you need to... | Go to... |
//! |-------------------|----------|
//! | Add a field to a row | **`view_models/`** |
//! | Change which cycles are shown | **`presenters/rows.rs`** |
//! | Change "in 1y 6m" wording | **`formatters/duration.rs`** |
//! | Add an output format | **`renderers/`** + `OutputFormat` |
//! | Change picker keys | **`components/product_picker.rs`** |

pub mod components;
pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;

pub use renderers::{CycleRenderer, render_report};
pub use view_models::{OutputFormat, Palette};
