// eol-date layout
//
// - eoldate-types decodes catalog documents. Decoding is total: odd field
//   values degrade to a flag or to "unknown", never to an error.
// - eoldate-api fetches documents and searches product names.
// - This crate samples `now` once per run and pushes cycles through
//   presenter -> view model -> renderer. Only I/O can fail past decoding.

mod args;
mod commands;
pub mod config;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;
mod ui;

pub use args::Cli;
pub use commands::run;
