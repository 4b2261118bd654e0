use crate::Result;
use eoldate_types::ReleaseCycle;

/// Where product names and release cycles come from.
///
/// Responsibilities:
/// - List every product name the source knows about
/// - Return the ordered cycle list for one product
pub trait CycleSource {
    /// All product names, in source order
    fn products(&self) -> Result<Vec<String>>;

    /// Release cycles for `product`, newest first as published
    fn cycles(&self, product: &str) -> Result<Vec<ReleaseCycle>>;
}
