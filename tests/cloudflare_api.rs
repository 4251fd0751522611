//! HTTP-level tests of the Cloudflare provider against a mock API server.

use ddnsgw::error::Error;
use ddnsgw::{CloudflareDns, DnsProvider, RecordChange};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ZONE: &str = "Z123";
const TOKEN: &str = "cf-test-token";

async fn provider(server: &MockServer) -> CloudflareDns {
    CloudflareDns::with_base_url(TOKEN, server.uri()).unwrap()
}

fn upsert_body() -> serde_json::Value {
    json!({
        "type": "A",
        "name": "home.example.org",
        "content": "203.0.113.9",
        "ttl": 300,
    })
}

#[tokio::test]
async fn existing_record_is_replaced() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/zones/{ZONE}/dns_records")))
        .and(query_param("name", "home.example.org"))
        .and(query_param("type", "A"))
        .and(header("authorization", format!("Bearer {TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "result": [{"id": "rec1", "name": "home.example.org", "content": "198.51.100.7"}],
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path(format!("/zones/{ZONE}/dns_records/rec1")))
        .and(body_json(upsert_body()))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"success": true, "result": {}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let change = RecordChange::upsert_a("home.example.org.", "203.0.113.9");
    provider(&server).await.upsert_a(ZONE, &change).await.unwrap();
}

#[tokio::test]
async fn absent_record_is_created() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/zones/{ZONE}/dns_records")))
        .and(query_param("name", "home.example.org"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"success": true, "result": []})),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(format!("/zones/{ZONE}/dns_records")))
        .and(body_json(upsert_body()))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"success": true, "result": {}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let change = RecordChange::upsert_a("home.example.org", "203.0.113.9");
    provider(&server).await.upsert_a(ZONE, &change).await.unwrap();
}

#[tokio::test]
async fn api_error_status_propagates() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/zones/{ZONE}/dns_records")))
        .respond_with(ResponseTemplate::new(403).set_body_string("permission denied"))
        .mount(&server)
        .await;

    let change = RecordChange::upsert_a("home.example.org", "203.0.113.9");
    let err = provider(&server)
        .await
        .upsert_a(ZONE, &change)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::ProviderApi { status: 403, .. }));
}

#[tokio::test]
async fn malformed_lookup_response_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/zones/{ZONE}/dns_records")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"success": true, "result": "nope"})),
        )
        .mount(&server)
        .await;

    let change = RecordChange::upsert_a("home.example.org", "203.0.113.9");
    let err = provider(&server)
        .await
        .upsert_a(ZONE, &change)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::ProviderResponse(_)));
}
