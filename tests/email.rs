mod common;

use httpmock::prelude::*;
use inbound_client::{
    IdempotencyOptions, PostEmailReplyRequest, PostEmailsRequest, PostScheduleEmailRequest,
};
use serde_json::json;

use common::{BEARER, client};

fn welcome_email() -> PostEmailsRequest {
    PostEmailsRequest {
        from: "hello@example.com".into(),
        to: vec!["a@example.com", "b@example.com"].into(),
        subject: "Welcome".into(),
        text: Some("Glad to have you.".into()),
        ..Default::default()
    }
}

#[tokio::test]
async fn send_posts_the_email_with_idempotency_key() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/emails")
                .header("Authorization", BEARER)
                .header("Idempotency-Key", "welcome-42")
                .json_body(json!({
                    "from": "hello@example.com",
                    "to": ["a@example.com", "b@example.com"],
                    "subject": "Welcome",
                    "text": "Glad to have you."
                }));
            then.status(200)
                .json_body(json!({"id": "email-1", "messageId": "<abc@example.com>"}));
        })
        .await;

    let response = client(&server)
        .email()
        .send(&welcome_email(), Some(&IdempotencyOptions::new("welcome-42")))
        .await
        .unwrap();

    mock.assert_async().await;
    let sent = response.into_result().expect("sent");
    assert_eq!(sent.id, "email-1");
    assert_eq!(sent.message_id.as_deref(), Some("<abc@example.com>"));
}

#[tokio::test]
async fn missing_or_empty_key_sends_no_header() {
    let server = MockServer::start_async().await;
    let keyed = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/emails")
                .header_exists("Idempotency-Key");
            then.status(409).json_body(json!({"error": "unexpected key"}));
        })
        .await;
    let plain = server
        .mock_async(|when, then| {
            when.method(POST).path("/emails");
            then.status(200).json_body(json!({"id": "email-2"}));
        })
        .await;

    let client = client(&server);
    let first = client.email().send(&welcome_email(), None).await.unwrap();
    let second = client
        .email()
        .send(&welcome_email(), Some(&IdempotencyOptions::default()))
        .await
        .unwrap();
    let third = client
        .email()
        .send(&welcome_email(), Some(&IdempotencyOptions::new("")))
        .await
        .unwrap();

    assert_eq!(keyed.hits_async().await, 0);
    assert_eq!(plain.hits_async().await, 3);
    for response in [first, second, third] {
        assert_eq!(response.data().map(|d| d.id.as_str()), Some("email-2"));
    }
}

#[tokio::test]
async fn send_with_scheduled_at_goes_to_the_schedule_route() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/emails/schedule")
                .json_body_partial(r#"{"scheduled_at": "in 1 hour"}"#);
            then.status(200).json_body(json!({
                "id": "sched-1",
                "scheduled_at": "2025-01-01T10:00:00Z",
                "status": "scheduled"
            }));
        })
        .await;

    let email = PostEmailsRequest {
        scheduled_at: Some("in 1 hour".into()),
        ..welcome_email()
    };
    let response = client(&server).email().send(&email, None).await.unwrap();

    mock.assert_async().await;
    let data = response.into_result().expect("scheduled");
    assert_eq!(data.status.as_deref(), Some("scheduled"));
    assert_eq!(data.scheduled_at.as_deref(), Some("2025-01-01T10:00:00Z"));
}

#[tokio::test]
async fn schedule_and_reply_forward_the_key() {
    let server = MockServer::start_async().await;
    let schedule = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/emails/schedule")
                .header("Idempotency-Key", "sched-key");
            then.status(200).json_body(json!({
                "id": "sched-2",
                "scheduled_at": "2025-01-02T09:00:00Z",
                "status": "scheduled",
                "timezone": "UTC"
            }));
        })
        .await;
    let reply = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/emails/email-9/reply")
                .header("Idempotency-Key", "reply-key");
            then.status(200).json_body(json!({
                "id": "reply-1",
                "messageId": "<r1@example.com>",
                "repliedToEmailId": "email-9",
                "isThreadReply": true
            }));
        })
        .await;

    let client = client(&server);
    let scheduled = client
        .email()
        .schedule(
            &PostScheduleEmailRequest {
                from: "hello@example.com".into(),
                to: "user@example.com".into(),
                subject: "Later".into(),
                text: Some("Tomorrow".into()),
                scheduled_at: "tomorrow at 9am".into(),
                ..Default::default()
            },
            Some(&IdempotencyOptions::new("sched-key")),
        )
        .await
        .unwrap();
    let replied = client
        .email()
        .reply(
            "email-9",
            &PostEmailReplyRequest {
                from: "support@example.com".into(),
                text: Some("On it".into()),
                ..Default::default()
            },
            Some(&IdempotencyOptions::new("reply-key")),
        )
        .await
        .unwrap();

    schedule.assert_async().await;
    reply.assert_async().await;
    assert_eq!(scheduled.data().map(|d| d.timezone.as_str()), Some("UTC"));
    let replied = replied.into_result().expect("replied");
    assert_eq!(replied.replied_to_email_id, "email-9");
    assert!(replied.is_thread_reply);
}

#[tokio::test]
async fn quick_reply_sends_plain_text() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/emails/email-1/reply")
                .header("Idempotency-Key", "qr-1")
                .json_body(json!({"from": "support@example.com", "text": "Thanks!"}));
            then.status(200)
                .json_body(json!({"id": "reply-2", "repliedToEmailId": "email-1"}));
        })
        .await;

    let response = client(&server)
        .quick_reply(
            "email-1",
            "Thanks!",
            "support@example.com",
            Some(&IdempotencyOptions::new("qr-1")),
        )
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.data().map(|d| d.id.as_str()), Some("reply-2"));
}

#[tokio::test]
async fn schedule_reminder_prefixes_the_body() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/emails/schedule")
                .header("Idempotency-Key", "reminder-1")
                .json_body(json!({
                    "from": "bot@example.com",
                    "to": "user@example.com",
                    "subject": "Renew passport",
                    "text": "Reminder: Renew passport",
                    "scheduled_at": "tomorrow at 9am"
                }));
            then.status(200).json_body(json!({
                "id": "sched-3",
                "scheduled_at": "2025-01-02T09:00:00Z",
                "status": "scheduled",
                "timezone": "UTC"
            }));
        })
        .await;

    let response = client(&server)
        .schedule_reminder(
            "user@example.com",
            "Renew passport",
            "tomorrow at 9am",
            "bot@example.com",
            Some(&IdempotencyOptions::new("reminder-1")),
        )
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.data().map(|d| d.id.as_str()), Some("sched-3"));
}

#[tokio::test]
async fn scheduled_listing_filters_by_status() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/emails/schedule")
                .query_param("limit", "5")
                .query_param("status", "scheduled");
            then.status(200).json_body(json!({
                "data": [{"id": "sched-1", "subject": "Later", "status": "scheduled"}],
                "pagination": {"limit": 5, "offset": 0, "total": 1, "hasMore": false}
            }));
        })
        .await;

    let params = inbound_client::GetScheduledEmailsRequest {
        limit: Some(5),
        status: Some("scheduled".into()),
        ..Default::default()
    };
    let response = client(&server)
        .email()
        .list_scheduled(Some(&params))
        .await
        .unwrap();

    mock.assert_async().await;
    let page = response.into_result().expect("page");
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].id, "sched-1");
}
