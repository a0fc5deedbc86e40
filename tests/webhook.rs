use inbound_client::{Error, WebhookPayload, parse_webhook_payload};

const EMAIL_RECEIVED: &str = include_str!("fixtures/email_received.json");

#[test]
fn parses_an_email_received_delivery() {
    let payload = parse_webhook_payload(EMAIL_RECEIVED.as_bytes()).expect("valid payload");

    assert_eq!(payload.event, "email.received");
    assert_eq!(payload.timestamp, "2025-09-16T16:47:50.163Z");
    assert_eq!(payload.email.id, "7U6TcAy-16qmzu297IVoL");
    assert_eq!(
        payload.email.message_id,
        "<test-yaZbgt70Z4J6XKIiAAEvZ@mail.inbound.new>"
    );
    assert_eq!(payload.email.subject, "Test Email - Inbound Email Service");
    assert_eq!(payload.email.recipient, "test@yourdomain.com");

    assert_eq!(payload.from_address(), "Inbound Test <test@example.com>");
    assert_eq!(payload.to_address(), "test@yourdomain.com");

    let parsed = &payload.email.parsed_data;
    assert_eq!(parsed.date_str(), Some("2025-09-16T16:47:50.163Z"));
    assert!(parsed.cc.is_none());
    assert!(parsed.reply_to.is_none());
    assert!(parsed.text_body.starts_with("This is a test email."));
    assert!(parsed.attachments.is_empty());

    let cleaned = payload.email.cleaned_content.as_ref().expect("cleaned content");
    assert!(cleaned.has_html && cleaned.has_text);

    let endpoint = payload.endpoint.as_ref().expect("endpoint");
    assert_eq!(endpoint.id, "LHbWZ1iEOofDXlViXWsDH");
    assert_eq!(endpoint.kind, "webhook");
}

#[test]
fn headers_are_flattened() {
    let payload: WebhookPayload = EMAIL_RECEIVED.parse().expect("valid payload");
    let headers = payload.headers();

    assert_eq!(
        headers["received"],
        vec!["from test-mta.inbound.new", "by test-mx.google.com"]
    );
    assert_eq!(headers["received-spf"], vec!["pass"]);
    assert_eq!(headers["dkim-signature"], vec!["v=1"]);
    assert_eq!(headers.len(), 3);
}

#[test]
fn from_slice_matches_reader_parsing() {
    let from_reader = parse_webhook_payload(EMAIL_RECEIVED.as_bytes()).unwrap();
    let from_slice = WebhookPayload::from_slice(EMAIL_RECEIVED.as_bytes()).unwrap();
    assert_eq!(from_reader, from_slice);
}

#[test]
fn truncated_body_is_rejected() {
    let truncated = &EMAIL_RECEIVED[..EMAIL_RECEIVED.len() / 2];
    let err = parse_webhook_payload(truncated.as_bytes()).unwrap_err();
    assert!(matches!(err, Error::WebhookParse(_)));
    assert!(err.to_string().starts_with("failed to parse webhook payload"));
}
