//! Router tests for the Status Stub

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

async fn get(uri: &str) -> (StatusCode, Vec<u8>) {
    let response = status_stub::router()
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

#[tokio::test]
async fn status_route_echoes_requested_code() {
    for code in [200u16, 201, 404, 418, 500, 503] {
        let (status, body) = get(&format!("/status/{code}")).await;
        assert_eq!(status.as_u16(), code);
        assert!(body.is_empty());
    }
}

#[tokio::test]
async fn invalid_status_code_is_a_bad_request() {
    for code in ["abc", "42", "1000", "-1"] {
        let (status, body) = get(&format!("/status/{code}")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "code {code}");

        let json: Value = serde_json::from_slice(&body).unwrap();
        assert!(json["error"].as_str().unwrap().contains(code));
    }
}

#[tokio::test]
async fn health_reports_service_and_version() {
    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["service"], "status-stub");
    assert_eq!(json["version"], endpoint_core::VERSION);
}

#[tokio::test]
async fn zero_delay_answers_immediately() {
    let (status, body) = get("/delay/0").await;
    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["delay"], 0);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let (status, _) = get("/anything").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn spawned_stub_serves_over_tcp() {
    let addr = status_stub::spawn("127.0.0.1:0").await.unwrap();
    let stream = tokio::net::TcpStream::connect(addr).await;
    assert!(stream.is_ok());
}
