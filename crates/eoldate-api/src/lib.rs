pub mod client;
pub mod error;
pub mod file;
pub mod search;
pub mod traits;

pub use client::{CatalogClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::{Error, Result};
pub use file::FileSource;
pub use search::{DEFAULT_SIMILAR_LIMIT, find_exact, find_similar};
pub use traits::CycleSource;
