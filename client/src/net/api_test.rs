use super::*;

#[test]
fn service_unavailable_maps_to_configuration() {
    assert_eq!(
        contact_error_for_status(503, Some("service unavailable".into())),
        ContactError::Configuration("status 503: service unavailable".into())
    );
}

#[test]
fn rejected_content_is_not_reported_as_retryable() {
    let err = contact_error_for_status(422, Some("message is too long".into()));
    assert_eq!(err, ContactError::Invalid("status 422: message is too long".into()));
    assert_ne!(err.user_message(), crate::state::contact::RETRY_TEXT);
    for status in [400, 413, 415] {
        assert!(matches!(contact_error_for_status(status, None), ContactError::Invalid(_)), "{status}");
    }
}

#[test]
fn too_many_requests_maps_to_rate_limited() {
    let err = contact_error_for_status(429, None);
    assert_eq!(err, ContactError::RateLimited("status 429".into()));
    assert_eq!(err.user_message(), crate::state::contact::RATE_LIMITED_TEXT);
}

#[test]
fn upstream_failures_map_to_delivery() {
    for status in [500, 502, 504] {
        let err = contact_error_for_status(status, None);
        assert_eq!(err, ContactError::Delivery(format!("status {status}")));
    }
}

#[test]
fn default_transport_targets_contact_endpoint() {
    assert_eq!(HttpContactTransport::default().endpoint(), "/api/contact");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn ssr_transport_reports_delivery_error() {
    let transport = HttpContactTransport::default();
    let message = ContactMessage { name: "A".into(), email: "a@b.com".into(), message: "Hi".into() };
    let result = futures::executor::block_on(transport.deliver(&message));
    assert!(matches!(result, Err(ContactError::Delivery(_))));
}
