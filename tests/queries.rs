mod common;

// 3rd party crates
use reqwest::{Method, StatusCode};
use serde_json::json;

// Project imports
use dnsimple_ddns::providers::dnsimple::errors::DnsimpleError;
use dnsimple_ddns::providers::dnsimple::functions::{
    list_domains, whoami, zone_info, zone_record, zone_record_id, zone_records,
};

use common::MockTransport;

#[tokio::test]
async fn query_paths_follow_the_api_layout() {
    let transport = MockTransport::new();
    transport.push_response(Ok(json!({ "data": { "account": { "id": 19 } } })));
    transport.push_response(Ok(json!({ "data": [] })));
    transport.push_response(Ok(json!({ "data": { "name": "example.com" } })));
    transport.push_response(Ok(json!({ "data": [] })));

    whoami(&transport).await.unwrap();
    list_domains(&transport, "19").await.unwrap();
    zone_info(&transport, "19", "example.com").await.unwrap();
    zone_records(&transport, "19", "example.com").await.unwrap();

    let calls = transport.recorded_calls();
    let paths: Vec<&str> = calls.iter().map(|c| c.path.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "whoami",
            "19/domains",
            "19/zones/example.com",
            "19/zones/example.com/records",
        ]
    );
    assert!(calls.iter().all(|c| c.method == Method::GET));
    assert!(calls.iter().all(|c| c.body.is_none()));
}

#[tokio::test]
async fn zone_record_returns_every_match() {
    let transport = MockTransport::new();
    transport.push_response(Ok(json!({
        "data": [
            { "id": 1, "name": "www", "type": "A", "content": "198.51.100.1" },
            { "id": 2, "name": "www", "type": "TXT", "content": "v=spf1 -all" },
            { "id": 3, "name": "mail", "type": "A", "content": "198.51.100.3" }
        ]
    })));

    let result = zone_record(&transport, "19", "example.com", "www")
        .await
        .unwrap();

    let matches = result.as_array().unwrap();
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0]["id"], 1);
    assert_eq!(matches[1]["id"], 2);
}

#[tokio::test]
async fn zone_record_with_no_match_is_an_empty_set() {
    let transport = MockTransport::new();
    transport.push_response(Ok(json!({ "data": [] })));

    let result = zone_record(&transport, "19", "example.com", "www")
        .await
        .unwrap();

    assert_eq!(result, json!([]));
}

#[tokio::test]
async fn zone_record_id_returns_the_first_matching_id() {
    let transport = MockTransport::new();
    transport.push_response(Ok(json!({
        "data": [
            { "id": 64, "name": "www", "type": "A", "content": "198.51.100.1" },
            { "id": 65, "name": "www", "type": "AAAA", "content": "2001:db8::1" }
        ]
    })));

    let result = zone_record_id(&transport, "19", "example.com", "www")
        .await
        .unwrap();

    assert_eq!(result, json!(64));
}

#[tokio::test]
async fn zone_record_id_for_a_missing_name_is_an_error() {
    let transport = MockTransport::new();
    transport.push_response(Ok(json!({ "data": [] })));

    let err = zone_record_id(&transport, "19", "example.com", "www")
        .await
        .unwrap_err();

    match err {
        DnsimpleError::RecordNotFound { zone, name } => {
            assert_eq!(zone, "example.com");
            assert_eq!(name, "www");
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[tokio::test]
async fn record_entry_without_an_id_is_a_parse_failure() {
    let transport = MockTransport::new();
    transport.push_response(Ok(json!({
        "data": [ { "name": "www", "type": "A", "content": "198.51.100.1" } ]
    })));

    let err = zone_record_id(&transport, "19", "example.com", "www")
        .await
        .unwrap_err();

    assert!(matches!(err, DnsimpleError::MissingField("data[].id")));
}

#[tokio::test]
async fn unauthorized_response_surfaces_status_and_body() {
    let transport = MockTransport::new();
    transport.push_response(Err(DnsimpleError::Api {
        status: StatusCode::UNAUTHORIZED,
        body: r#"{"message":"Authentication failed"}"#.to_string(),
    }));

    let err = whoami(&transport).await.unwrap_err();

    match err {
        DnsimpleError::Api { status, body } => {
            assert_eq!(status, StatusCode::UNAUTHORIZED);
            assert!(body.contains("Authentication failed"));
        }
        other => panic!("unexpected error: {}", other),
    }
}
