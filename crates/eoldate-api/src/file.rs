use crate::error::DecodeSource;
use crate::traits::CycleSource;
use crate::{Error, Result};
use eoldate_types::{ReleaseCycle, parse_cycles};
use std::path::PathBuf;

/// A product document saved to disk (e.g. `curl .../python.json > python.json`).
///
/// The file is served as the only product, under whatever name it was given.
pub struct FileSource {
    product: String,
    path: PathBuf,
}

impl FileSource {
    pub fn new(product: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            product: product.into(),
            path: path.into(),
        }
    }
}

impl CycleSource for FileSource {
    fn products(&self) -> Result<Vec<String>> {
        Ok(vec![self.product.clone()])
    }

    fn cycles(&self, product: &str) -> Result<Vec<ReleaseCycle>> {
        tracing::debug!(path = %self.path.display(), product, "reading release cycles from file");
        let body = std::fs::read_to_string(&self.path)?;
        parse_cycles(&body).map_err(|err| Error::Decode {
            what: format!("cycles in {}", self.path.display()),
            source: DecodeSource::Cycles(err),
        })
    }
}
