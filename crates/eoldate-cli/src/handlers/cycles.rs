use crate::presentation::presenters::present_cycles;
use crate::presentation::renderers::render_report;
use crate::presentation::view_models::{OutputFormat, Palette};
use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use eoldate_api::{CycleSource, DEFAULT_SIMILAR_LIMIT, find_exact, find_similar};
use std::io::Write;

pub struct CycleRequest<'a> {
    pub query: &'a str,
    pub show_all: bool,
    pub format: OutputFormat,
    pub palette: Palette,
    pub now: DateTime<Utc>,
}

/// Map a user query to a catalog product name.
///
/// An exact (case-insensitive) hit wins; otherwise `select` chooses among
/// the substring matches.
pub fn resolve_product<F>(source: &dyn CycleSource, query: &str, select: F) -> Result<String>
where
    F: FnOnce(&str, Vec<String>) -> Result<String>,
{
    let products = source
        .products()
        .context("failed to fetch product list")?;

    if let Some(product) = find_exact(&products, query) {
        return Ok(product.to_string());
    }

    let candidates = find_similar(&products, query, DEFAULT_SIMILAR_LIMIT);
    if candidates.is_empty() {
        bail!("no products found matching '{}'", query);
    }

    tracing::debug!(query, candidates = candidates.len(), "no exact match");
    select(query, candidates)
}

pub fn handle<F>(
    source: &dyn CycleSource,
    request: &CycleRequest<'_>,
    select: F,
    out: &mut dyn Write,
) -> Result<()>
where
    F: FnOnce(&str, Vec<String>) -> Result<String>,
{
    let product = resolve_product(source, request.query, select)?;

    let cycles = source
        .cycles(&product)
        .context("failed to fetch product details")?;
    tracing::debug!(product = %product, cycles = cycles.len(), "fetched cycles");

    let report = present_cycles(&product, &cycles, request.show_all, request.now);
    render_report(&report, request.format, request.palette, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use eoldate_api::Error as ApiError;
    use eoldate_testing::fixtures::{fixed_now, sample_cycles};
    use eoldate_types::ReleaseCycle;

    struct FakeSource {
        products: Vec<String>,
        cycles: Vec<ReleaseCycle>,
    }

    impl FakeSource {
        fn new(products: &[&str]) -> Self {
            Self {
                products: products.iter().map(|p| p.to_string()).collect(),
                cycles: sample_cycles(),
            }
        }
    }

    impl CycleSource for FakeSource {
        fn products(&self) -> eoldate_api::Result<Vec<String>> {
            Ok(self.products.clone())
        }

        fn cycles(&self, product: &str) -> eoldate_api::Result<Vec<ReleaseCycle>> {
            if self.products.iter().any(|p| p == product) {
                Ok(self.cycles.clone())
            } else {
                Err(ApiError::ProductNotFound(product.to_string()))
            }
        }
    }

    fn never_select(_: &str, _: Vec<String>) -> Result<String> {
        panic!("picker should not run")
    }

    fn request(query: &str) -> CycleRequest<'_> {
        CycleRequest {
            query,
            show_all: false,
            format: OutputFormat::Csv,
            palette: Palette::plain(),
            now: fixed_now(),
        }
    }

    #[test]
    fn test_exact_match_skips_picker() {
        let source = FakeSource::new(&["nodejs", "python", "pypy"]);
        let product = resolve_product(&source, "Python", never_select).unwrap();
        assert_eq!(product, "python");
    }

    #[test]
    fn test_similar_matches_go_to_picker() {
        let source = FakeSource::new(&["python", "pypy", "nodejs"]);
        let product = resolve_product(&source, "py", |query, candidates| {
            assert_eq!(query, "py");
            assert_eq!(candidates, vec!["pypy", "python"]);
            Ok(candidates[1].clone())
        })
        .unwrap();
        assert_eq!(product, "python");
    }

    #[test]
    fn test_no_candidates_is_an_error() {
        let source = FakeSource::new(&["python"]);
        let err = resolve_product(&source, "cobol", never_select).unwrap_err();
        assert_eq!(err.to_string(), "no products found matching 'cobol'");
    }

    #[test]
    fn test_picker_errors_propagate() {
        let source = FakeSource::new(&["python", "pypy"]);
        let err = resolve_product(&source, "py", |_, _| bail!("selection cancelled"))
            .unwrap_err();
        assert_eq!(err.to_string(), "selection cancelled");
    }

    #[test]
    fn test_handle_renders_filtered_cycles() {
        let source = FakeSource::new(&["python"]);
        let mut out = Vec::new();

        handle(&source, &request("python"), never_select, &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.starts_with("CYCLE,LATEST,RELEASED,SUPPORT,EOL,LTS\n"));
        assert!(output.contains("3.14,"));
        assert!(!output.contains("2.7,"));
    }

    #[test]
    fn test_handle_adds_fetch_context() {
        struct Broken;
        impl CycleSource for Broken {
            fn products(&self) -> eoldate_api::Result<Vec<String>> {
                Err(ApiError::Status {
                    status: 503,
                    product: None,
                })
            }
            fn cycles(&self, _: &str) -> eoldate_api::Result<Vec<ReleaseCycle>> {
                unreachable!()
            }
        }

        let mut out = Vec::new();
        let err = handle(&Broken, &request("python"), never_select, &mut out).unwrap_err();
        assert_eq!(
            format!("{:#}", err),
            "failed to fetch product list: API returned status 503"
        );
    }
}
