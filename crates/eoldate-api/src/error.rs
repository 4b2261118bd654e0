use std::fmt;

/// Result type for eoldate-api operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while talking to the catalog
#[derive(Debug)]
pub enum Error {
    /// Local document could not be read
    Io(std::io::Error),

    /// Transport failure (DNS, TLS, timeout, connection reset)
    Http(reqwest::Error),

    /// The catalog answered with a non-success status
    Status { status: u16, product: Option<String> },

    /// The catalog has no document for this product
    ProductNotFound(String),

    /// The response body was not the expected JSON shape
    Decode { what: String, source: DecodeSource },
}

#[derive(Debug)]
pub enum DecodeSource {
    Json(serde_json::Error),
    Cycles(eoldate_types::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Http(err) => write!(f, "request failed: {}", err),
            Error::Status {
                status,
                product: Some(product),
            } => write!(f, "API returned status {} for product {}", status, product),
            Error::Status {
                status,
                product: None,
            } => write!(f, "API returned status {}", status),
            Error::ProductNotFound(name) => write!(f, "product {} not found", name),
            Error::Decode { what, source } => write!(f, "failed to decode {}: {}", what, source),
        }
    }
}

impl fmt::Display for DecodeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeSource::Json(err) => write!(f, "{}", err),
            DecodeSource::Cycles(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Http(err) => Some(err),
            Error::Decode {
                source: DecodeSource::Json(err),
                ..
            } => Some(err),
            Error::Decode {
                source: DecodeSource::Cycles(err),
                ..
            } => Some(err),
            Error::Status { .. } | Error::ProductNotFound(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err)
    }
}
