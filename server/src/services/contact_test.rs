use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::*;

// =============================================================================
// MOCK RELAY
// =============================================================================

#[derive(Default)]
struct RecordingRelay {
    calls: AtomicUsize,
    sent: Mutex<Vec<ContactEnvelope>>,
    fail: bool,
}

impl RecordingRelay {
    fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }
}

#[async_trait]
impl MessageRelay for RecordingRelay {
    async fn send(&self, _credentials: &RelayCredentials, envelope: &ContactEnvelope) -> Result<(), RelayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.sent.lock().unwrap().push(envelope.clone());
        if self.fail {
            return Err(RelayError::Rejected { status: 500, body: "boom".into() });
        }
        Ok(())
    }
}

fn credentials() -> RelayCredentials {
    RelayCredentials {
        service_id: "s".into(),
        template_id: "t".into(),
        public_key: "p".into(),
        private_key: None,
    }
}

fn recipient() -> Recipient {
    Recipient { name: "Owner".into(), email: "owner@example.com".into() }
}

fn request(name: &str, email: &str, message: &str) -> ContactRequest {
    ContactRequest { name: name.into(), email: email.into(), message: message.into() }
}

fn service_with(relay: Arc<RecordingRelay>) -> ContactService {
    ContactService::new(Ok(credentials()), recipient(), relay)
}

// =============================================================================
// validate
// =============================================================================

#[test]
fn validate_trims_fields() {
    let msg = validate(&request("  A ", " a@b.com ", "\nHi\n")).unwrap();
    assert_eq!(msg, ValidatedMessage { name: "A".into(), email: "a@b.com".into(), message: "Hi".into() });
}

#[test]
fn validate_requires_each_field() {
    assert!(matches!(validate(&request(" ", "a@b.com", "Hi")), Err(ContactError::Invalid("name is required"))));
    assert!(matches!(validate(&request("A", "", "Hi")), Err(ContactError::Invalid("email is required"))));
    assert!(matches!(validate(&request("A", "a@b.com", "\t")), Err(ContactError::Invalid("message is required"))));
}

#[test]
fn validate_rejects_malformed_email() {
    for email in ["plain", "@b.com", "a@", "a@b@c", "a b@c.com"] {
        assert!(
            matches!(validate(&request("A", email, "Hi")), Err(ContactError::Invalid("email is malformed"))),
            "{email:?}"
        );
    }
}

#[test]
fn validate_enforces_length_caps() {
    let long_name = "n".repeat(MAX_NAME_CHARS + 1);
    let long_message = "m".repeat(MAX_MESSAGE_CHARS + 1);
    assert!(matches!(validate(&request(&long_name, "a@b.com", "Hi")), Err(ContactError::Invalid(_))));
    assert!(matches!(validate(&request("A", "a@b.com", &long_message)), Err(ContactError::Invalid(_))));
    assert!(validate(&request("A", "a@b.com", &"m".repeat(MAX_MESSAGE_CHARS))).is_ok());
}

#[test]
fn validate_accepts_anything_the_form_allows() {
    use client::state::contact::ContactField;

    let at_cap = |field: ContactField| "x".repeat(field.max_chars());
    let email = format!("{}@b.com", "e".repeat(ContactField::Email.max_chars() - 6));
    let msg = validate(&request(&at_cap(ContactField::Name), &email, &at_cap(ContactField::Message)));
    assert!(msg.is_ok(), "{msg:?}");
}

// =============================================================================
// deliver
// =============================================================================

#[tokio::test]
async fn deliver_addresses_fixed_recipient() {
    let relay = Arc::new(RecordingRelay::default());
    let service = service_with(relay.clone());

    service.deliver(&request("A", "a@b.com", "Hi")).await.unwrap();

    let sent = relay.sent.lock().unwrap();
    assert_eq!(
        *sent,
        vec![ContactEnvelope {
            from_name: "A".into(),
            from_email: "a@b.com".into(),
            to_name: "Owner".into(),
            to_email: "owner@example.com".into(),
            message: "Hi".into(),
        }]
    );
}

#[tokio::test]
async fn deliver_without_credentials_never_calls_relay() {
    let relay = Arc::new(RecordingRelay::default());
    let service = ContactService::new(
        Err(ConfigError::MissingVars(vec!["EMAILJS_SERVICE_ID"])),
        recipient(),
        relay.clone(),
    );

    let err = service.deliver(&request("A", "a@b.com", "Hi")).await.unwrap_err();

    assert!(matches!(err, ContactError::Configuration(ConfigError::MissingVars(_))));
    assert_eq!(relay.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn deliver_invalid_request_never_calls_relay() {
    let relay = Arc::new(RecordingRelay::default());
    let service = service_with(relay.clone());

    let err = service.deliver(&request("A", "", "Hi")).await.unwrap_err();

    assert!(matches!(err, ContactError::Invalid(_)));
    assert_eq!(relay.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn deliver_surfaces_relay_failure() {
    let relay = Arc::new(RecordingRelay::failing());
    let service = service_with(relay.clone());

    let err = service.deliver(&request("A", "a@b.com", "Hi")).await.unwrap_err();

    assert!(matches!(err, ContactError::Delivery(RelayError::Rejected { status: 500, .. })));
    assert_eq!(relay.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn deliver_does_not_retry() {
    let relay = Arc::new(RecordingRelay::failing());
    let service = service_with(relay.clone());

    let _ = service.deliver(&request("A", "a@b.com", "Hi")).await;

    assert_eq!(relay.calls.load(Ordering::SeqCst), 1);
}
