use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use serde_json::{Value, json};

use super::*;

type Captured = Arc<Mutex<Vec<Value>>>;

fn credentials(private_key: Option<&str>) -> RelayCredentials {
    RelayCredentials {
        service_id: "service_1".into(),
        template_id: "template_1".into(),
        public_key: "public_1".into(),
        private_key: private_key.map(str::to_owned),
    }
}

fn envelope() -> ContactEnvelope {
    ContactEnvelope {
        from_name: "A".into(),
        from_email: "a@b.com".into(),
        to_name: "Owner".into(),
        to_email: "owner@example.com".into(),
        message: "Hi".into(),
    }
}

/// Spawn a fake EmailJS endpoint answering every send with `status`.
async fn spawn_fake_relay(status: StatusCode, reply: &'static str) -> (String, Captured) {
    let captured: Captured = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route(
            SEND_PATH,
            post(move |State(captured): State<Captured>, axum::Json(body): axum::Json<Value>| async move {
                captured.lock().unwrap().push(body);
                (status, reply)
            }),
        )
        .with_state(captured.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}"), captured)
}

#[test]
fn send_url_joins_base_and_path() {
    let relay = EmailJsRelay::new("https://relay.example/").unwrap();
    assert_eq!(relay.send_url(), "https://relay.example/api/v1.0/email/send");
}

#[test]
fn request_body_matches_emailjs_schema() {
    let creds = credentials(None);
    let env = envelope();
    let value = serde_json::to_value(SendRequest::new(&creds, &env)).unwrap();
    assert_eq!(
        value,
        json!({
            "service_id": "service_1",
            "template_id": "template_1",
            "user_id": "public_1",
            "template_params": {
                "from_name": "A",
                "from_email": "a@b.com",
                "to_name": "Owner",
                "to_email": "owner@example.com",
                "message": "Hi",
            }
        })
    );
}

#[test]
fn request_body_includes_access_token_when_configured() {
    let creds = credentials(Some("private_1"));
    let env = envelope();
    let value = serde_json::to_value(SendRequest::new(&creds, &env)).unwrap();
    assert_eq!(value["accessToken"], "private_1");
}

#[tokio::test]
async fn send_succeeds_on_ok() {
    let (base, captured) = spawn_fake_relay(StatusCode::OK, "OK").await;
    let relay = EmailJsRelay::new(&base).unwrap();

    relay.send(&credentials(None), &envelope()).await.unwrap();

    let bodies = captured.lock().unwrap();
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0]["service_id"], "service_1");
    assert_eq!(bodies[0]["template_params"]["message"], "Hi");
}

#[tokio::test]
async fn send_reports_rejection_status_and_body() {
    let (base, _captured) = spawn_fake_relay(StatusCode::BAD_REQUEST, "The template ID is invalid").await;
    let relay = EmailJsRelay::new(&base).unwrap();

    let err = relay.send(&credentials(None), &envelope()).await.unwrap_err();

    match err {
        RelayError::Rejected { status, body } => {
            assert_eq!(status, 400);
            assert_eq!(body, "The template ID is invalid");
        }
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[tokio::test]
async fn send_reports_unreachable_relay() {
    // Bind then drop to get a port nobody is listening on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let relay = EmailJsRelay::new(&format!("http://{addr}")).unwrap();

    let err = relay.send(&credentials(None), &envelope()).await.unwrap_err();

    assert!(matches!(err, RelayError::Request(_)));
}
