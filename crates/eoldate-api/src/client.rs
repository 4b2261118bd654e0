use crate::error::DecodeSource;
use crate::traits::CycleSource;
use crate::{Error, Result};
use eoldate_types::{ReleaseCycle, parse_cycles};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://endoflife.date/api";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Blocking client for the endoflife.date JSON API.
pub struct CatalogClient {
    http: Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("eol-date/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn products_url(&self) -> String {
        format!("{}/all.json", self.base_url)
    }

    pub fn product_url(&self, product: &str) -> String {
        format!("{}/{}.json", self.base_url, product)
    }

    /// `GET {base}/all.json`
    pub fn fetch_products(&self) -> Result<Vec<String>> {
        let url = self.products_url();
        tracing::debug!(%url, "fetching product list");

        let response = self.http.get(&url).send()?;
        if response.status() != StatusCode::OK {
            return Err(Error::Status {
                status: response.status().as_u16(),
                product: None,
            });
        }

        let body = response.text()?;
        serde_json::from_str(&body).map_err(|err| Error::Decode {
            what: "products".to_string(),
            source: DecodeSource::Json(err),
        })
    }

    /// `GET {base}/{product}.json`
    pub fn fetch_cycles(&self, product: &str) -> Result<Vec<ReleaseCycle>> {
        let url = self.product_url(product);
        tracing::debug!(%url, product, "fetching release cycles");

        let response = self.http.get(&url).send()?;
        match response.status() {
            StatusCode::OK => {}
            StatusCode::NOT_FOUND => return Err(Error::ProductNotFound(product.to_string())),
            status => {
                return Err(Error::Status {
                    status: status.as_u16(),
                    product: Some(product.to_string()),
                });
            }
        }

        let body = response.text()?;
        let cycles = parse_cycles(&body).map_err(|err| Error::Decode {
            what: format!("cycles for {}", product),
            source: DecodeSource::Cycles(err),
        })?;
        tracing::debug!(product, count = cycles.len(), "decoded release cycles");
        Ok(cycles)
    }
}

impl CycleSource for CatalogClient {
    fn products(&self) -> Result<Vec<String>> {
        self.fetch_products()
    }

    fn cycles(&self, product: &str) -> Result<Vec<ReleaseCycle>> {
        self.fetch_cycles(product)
    }
}
