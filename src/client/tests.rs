//! Tests for the client module

use super::*;
use crate::error::Error;
use crate::models::{Breed, Fact};
use crate::transport::StubTransport;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use test_case::test_case;

fn fact(text: &str) -> Value {
    json!({"fact": text, "length": text.len()})
}

fn breed(name: &str) -> Value {
    json!({
        "breed": name,
        "country": "Unknown",
        "origin": "Natural",
        "coat": "Short",
        "pattern": "Solid"
    })
}

fn envelope(current: i64, last: i64, data: Vec<Value>) -> Value {
    json!({
        "current_page": current,
        "data": data,
        "first_page_url": "https://catfact.ninja/facts?page=1",
        "from": 1,
        "last_page": last,
        "last_page_url": format!("https://catfact.ninja/facts?page={last}"),
        "next_page_url": null,
        "path": "https://catfact.ninja/facts",
        "per_page": "3",
        "prev_page_url": null,
        "to": 3,
        "total": 9
    })
}

fn stub_client(stub: &Arc<StubTransport>) -> CatFactsClient {
    CatFactsClient::from_url_str("http://test")
        .unwrap()
        .with_transport(Arc::clone(stub))
}

// ============================================================================
// Construction Tests
// ============================================================================

#[test]
fn test_new_uses_default_base_url() {
    let client = CatFactsClient::new();
    assert_eq!(client.base_url().as_str(), "https://catfact.ninja/");
    assert_eq!(client.page_size(), DEFAULT_PAGE_SIZE);
    assert_eq!(client.page_size(), 10);
}

#[test]
fn test_default_matches_new() {
    let client = CatFactsClient::default();
    assert_eq!(client.base_url().as_str(), "https://catfact.ninja/");
}

#[test_case("not a url" ; "no scheme")]
#[test_case("http://" ; "empty host")]
#[test_case("" ; "empty")]
fn test_from_url_str_invalid(input: &str) {
    let err = CatFactsClient::from_url_str(input).unwrap_err();
    assert!(matches!(err, Error::InvalidUrl(_)));
}

#[test]
fn test_from_url() {
    let url = url::Url::parse("http://localhost:8080/api/").unwrap();
    let client = CatFactsClient::from_url(url.clone());
    assert_eq!(client.base_url(), &url);
}

#[test]
fn test_setters_chain() {
    let client = CatFactsClient::new()
        .with_page_size(50)
        .with_transport(StubTransport::new())
        .with_page_size(75);

    assert_eq!(client.page_size(), 75);
    assert_eq!(client.base_url().as_str(), "https://catfact.ninja/");
}

#[test]
fn test_debug_hides_transport() {
    let client = CatFactsClient::new().with_page_size(3);
    let debug = format!("{client:?}");
    assert!(debug.contains("CatFactsClient"));
    assert!(debug.contains("page_size: 3"));
}

// ============================================================================
// get_random_fact Tests
// ============================================================================

#[tokio::test]
async fn test_get_random_fact() {
    let stub = Arc::new(StubTransport::new().respond_json(&fact("Cats can jump high.")));
    let client = stub_client(&stub);

    let result = client.get_random_fact().await.unwrap();

    assert_eq!(
        result,
        Fact {
            fact: "Cats can jump high.".to_string(),
            length: 19,
        }
    );
    assert_eq!(stub.requests(), vec!["http://test/fact"]);
}

#[test_case(r#"{"length": 4}"# ; "missing fact")]
#[test_case(r#"{"fact": 42, "length": 2}"# ; "fact not a string")]
#[test_case(r#"["fact"]"# ; "array")]
#[test_case("Service Unavailable" ; "not json")]
#[tokio::test]
async fn test_get_random_fact_decode_error(body: &'static str) {
    let stub = Arc::new(StubTransport::new().respond_body(body));
    let client = stub_client(&stub);

    let err = client.get_random_fact().await.unwrap_err();

    assert!(matches!(err, Error::Decode { .. }));
    assert_eq!(stub.request_count(), 1);
}

#[tokio::test]
async fn test_get_random_fact_transport_error() {
    let stub = Arc::new(StubTransport::new().fail("dns failure"));
    let client = stub_client(&stub);

    let err = client.get_random_fact().await.unwrap_err();

    assert!(matches!(err, Error::Transport { .. }));
    assert!(err.is_retryable());
}

// ============================================================================
// list_all_* Tests
// ============================================================================

#[tokio::test]
async fn test_list_all_facts_three_pages() {
    let stub = Arc::new(
        StubTransport::new()
            .respond_json(&envelope(1, 3, vec![fact("a"), fact("b"), fact("c")]))
            .respond_json(&envelope(2, 3, vec![fact("d"), fact("e"), fact("f")]))
            .respond_json(&envelope(3, 3, vec![fact("g")])),
    );
    let client = stub_client(&stub).with_page_size(3);

    let facts = client.list_all_facts().await.unwrap();

    let texts: Vec<&str> = facts.iter().map(|f| f.fact.as_str()).collect();
    assert_eq!(texts, vec!["a", "b", "c", "d", "e", "f", "g"]);
    assert_eq!(
        stub.requests(),
        vec![
            "http://test/facts?limit=3&page=1",
            "http://test/facts?limit=3&page=2",
            "http://test/facts?limit=3&page=3",
        ]
    );
}

#[tokio::test]
async fn test_list_all_facts_single_page() {
    let stub = Arc::new(StubTransport::new().respond_json(&envelope(1, 1, vec![fact("only")])));
    let client = stub_client(&stub);

    let facts = client.list_all_facts().await.unwrap();

    assert_eq!(facts.len(), 1);
    assert_eq!(stub.request_count(), 1);
}

#[tokio::test]
async fn test_list_all_breeds_empty_collection() {
    let stub = Arc::new(StubTransport::new().respond_json(&json!({
        "current_page": 1,
        "data": [],
        "from": null,
        "last_page": 1,
        "next_page_url": null,
        "per_page": "10",
        "prev_page_url": null,
        "to": null,
        "total": 0
    })));
    let client = stub_client(&stub);

    let breeds = client.list_all_breeds().await.unwrap();

    assert!(breeds.is_empty());
    assert_eq!(stub.requests(), vec!["http://test/breeds?limit=10&page=1"]);
}

#[tokio::test]
async fn test_list_all_breeds_in_page_order() {
    let stub = Arc::new(
        StubTransport::new()
            .respond_json(&envelope(1, 2, vec![breed("Abyssinian"), breed("Aegean")]))
            .respond_json(&envelope(2, 2, vec![breed("Bambino")])),
    );
    let client = stub_client(&stub).with_page_size(2);

    let breeds = client.list_all_breeds().await.unwrap();

    assert_eq!(
        breeds.iter().map(|b| b.breed.as_str()).collect::<Vec<_>>(),
        vec!["Abyssinian", "Aegean", "Bambino"]
    );
    assert_eq!(
        breeds[0],
        Breed {
            breed: "Abyssinian".to_string(),
            country: "Unknown".to_string(),
            origin: "Natural".to_string(),
            coat: "Short".to_string(),
            pattern: "Solid".to_string(),
        }
    );
}

#[tokio::test]
async fn test_list_all_breeds_transport_error_on_page_two() {
    let stub = Arc::new(
        StubTransport::new()
            .respond_json(&envelope(1, 3, vec![breed("Abyssinian")]))
            .fail("connection reset by peer"),
    );
    let client = stub_client(&stub);

    let result = client.list_all_breeds().await;

    match result {
        Err(Error::Transport { url, .. }) => {
            assert_eq!(url, "http://test/breeds?limit=10&page=2");
        }
        other => panic!("Expected Transport error, got {other:?}"),
    }
    assert_eq!(stub.request_count(), 2);
}

#[tokio::test]
async fn test_list_all_facts_decode_error_on_later_page() {
    let stub = Arc::new(
        StubTransport::new()
            .respond_json(&envelope(1, 2, vec![fact("a")]))
            .respond_json(&json!({"current_page": 2, "last_page": 2})),
    );
    let client = stub_client(&stub);

    let err = client.list_all_facts().await.unwrap_err();

    assert!(matches!(err, Error::Decode { .. }));
    assert!(err.to_string().contains("page 2 of http://test/facts"));
}

#[tokio::test]
async fn test_page_size_applies_to_later_requests() {
    let stub = Arc::new(
        StubTransport::new()
            .respond_json(&envelope(1, 1, vec![]))
            .respond_json(&envelope(1, 1, vec![])),
    );
    let client = stub_client(&stub);

    client.list_all_facts().await.unwrap();
    let client = client.with_page_size(250);
    client.list_all_breeds().await.unwrap();

    assert_eq!(
        stub.requests(),
        vec![
            "http://test/facts?limit=10&page=1",
            "http://test/breeds?limit=250&page=1",
        ]
    );
}

#[tokio::test]
async fn test_base_url_with_path() {
    let stub = Arc::new(StubTransport::new().respond_json(&fact("x")));
    let client = CatFactsClient::from_url_str("http://test/api/v1/")
        .unwrap()
        .with_transport(Arc::clone(&stub));

    client.get_random_fact().await.unwrap();
    assert_eq!(stub.requests(), vec!["http://test/api/v1/fact"]);
}

// ============================================================================
// ClientConfig Tests
// ============================================================================

#[test]
fn test_client_config_defaults() {
    let config = ClientConfig::from_json_str("{}").unwrap();
    assert_eq!(config, ClientConfig::default());
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
}

#[test]
fn test_client_config_full() {
    let config = ClientConfig::from_json_str(
        r#"{
            "base_url": "http://localhost:9000",
            "page_size": 100,
            "timeout_secs": 5,
            "user_agent": "tests/1.0"
        }"#,
    )
    .unwrap();

    let transport = config.transport_config();
    assert_eq!(transport.timeout, Duration::from_secs(5));
    assert_eq!(transport.user_agent, "tests/1.0");

    let client = config.build_client().unwrap();
    assert_eq!(client.base_url().as_str(), "http://localhost:9000/");
    assert_eq!(client.page_size(), 100);
}

#[test]
fn test_client_config_rejects_unknown_field() {
    let err = ClientConfig::from_json_str(r#"{"pagesize": 5}"#).unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
}

#[test]
fn test_client_config_bad_url_fails_on_build() {
    let config = ClientConfig::from_json_str(r#"{"base_url": "nope"}"#).unwrap();
    let err = config.build_client().unwrap_err();
    assert!(matches!(err, Error::InvalidUrl(_)));
}

#[test]
fn test_client_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"page_size": 42}}"#).unwrap();

    let config = ClientConfig::from_file(file.path()).unwrap();
    assert_eq!(config.page_size, 42);
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
}

#[test]
fn test_client_config_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = ClientConfig::from_file(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
