//! `CatalogClient` against a local mock of the catalog.
//!
//! The client is blocking, so the mock server is started and configured on a
//! private runtime and every request is made from the plain test thread.

use eoldate_api::{CatalogClient, DEFAULT_TIMEOUT, Error};
use eoldate_types::TemporalValue;
use tokio::runtime::Runtime;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct Catalog {
    server: MockServer,
    runtime: Runtime,
}

impl Catalog {
    fn start() -> Self {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("runtime");
        let server = runtime.block_on(MockServer::start());
        Self { server, runtime }
    }

    fn respond(&self, route: &str, response: ResponseTemplate) {
        self.runtime.block_on(
            Mock::given(method("GET"))
                .and(path(route))
                .respond_with(response)
                .mount(&self.server),
        );
    }

    fn client(&self) -> CatalogClient {
        CatalogClient::new(self.server.uri(), DEFAULT_TIMEOUT).expect("client")
    }
}

#[test]
fn test_fetch_products_ok() {
    let catalog = Catalog::start();
    catalog.respond(
        "/all.json",
        ResponseTemplate::new(200).set_body_string(r#"["nodejs", "python", "rust"]"#),
    );

    let products = catalog.client().fetch_products().unwrap();
    assert_eq!(products, vec!["nodejs", "python", "rust"]);
}

#[test]
fn test_fetch_products_error_status() {
    let catalog = Catalog::start();
    catalog.respond("/all.json", ResponseTemplate::new(503));

    let err = catalog.client().fetch_products().unwrap_err();
    assert!(matches!(
        err,
        Error::Status {
            status: 503,
            product: None
        }
    ));
    assert_eq!(err.to_string(), "API returned status 503");
}

#[test]
fn test_fetch_products_missing_list_is_a_status_error() {
    let catalog = Catalog::start();
    catalog.respond("/all.json", ResponseTemplate::new(404));

    let err = catalog.client().fetch_products().unwrap_err();
    assert!(matches!(err, Error::Status { status: 404, .. }));
}

#[test]
fn test_fetch_products_malformed_body() {
    let catalog = Catalog::start();
    catalog.respond(
        "/all.json",
        ResponseTemplate::new(200).set_body_string(r#"{"products": []}"#),
    );

    let err = catalog.client().fetch_products().unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
    assert!(err.to_string().starts_with("failed to decode products:"));
}

#[test]
fn test_fetch_cycles_ok() {
    let catalog = Catalog::start();
    catalog.respond(
        "/python.json",
        ResponseTemplate::new(200).set_body_string(
            r#"[{"cycle": "3.13", "eol": "2029-10-31", "support": true, "lts": false, "latest": "3.13.11"}]"#,
        ),
    );

    let cycles = catalog.client().fetch_cycles("python").unwrap();
    assert_eq!(cycles.len(), 1);
    assert_eq!(cycles[0].cycle, "3.13");
    assert_eq!(cycles[0].support, TemporalValue::Flag(true));
}

#[test]
fn test_fetch_cycles_not_found() {
    let catalog = Catalog::start();
    catalog.respond("/cobol.json", ResponseTemplate::new(404));

    let err = catalog.client().fetch_cycles("cobol").unwrap_err();
    assert!(matches!(err, Error::ProductNotFound(ref name) if name == "cobol"));
    assert_eq!(err.to_string(), "product cobol not found");
}

#[test]
fn test_fetch_cycles_error_status_names_product() {
    let catalog = Catalog::start();
    catalog.respond("/python.json", ResponseTemplate::new(503));

    let err = catalog.client().fetch_cycles("python").unwrap_err();
    assert!(matches!(
        err,
        Error::Status {
            status: 503,
            product: Some(ref name)
        } if name == "python"
    ));
    assert_eq!(err.to_string(), "API returned status 503 for product python");
}

#[test]
fn test_fetch_cycles_malformed_body() {
    let catalog = Catalog::start();
    catalog.respond(
        "/python.json",
        ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"),
    );

    let err = catalog.client().fetch_cycles("python").unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
    assert!(
        err.to_string()
            .starts_with("failed to decode cycles for python:")
    );
}
