//! # Inbound Client
//! Asynchronous, typed wrapper around the Inbound email HTTP API: send and schedule email, read received mail and threads, manage domains, receiving addresses and delivery endpoints, and parse `email.received` webhooks, using [`Client`] and [`ClientBuilder`].
//!
//! ## Audience and uses
//! For Rust services that send transactional email or react to inbound mail through Inbound: configure a [`Client`] with your API key, call the resource services ([`Client::email`], [`Client::mail`], [`Client::domain`], [`Client::endpoint`], [`Client::thread`], [`Client::email_address`], [`Client::attachment`]), and decode webhook deliveries with [`parse_webhook_payload`].
//!
//! ## Runtime requirements
//! Async-only; run inside a Tokio (v1) runtime. HTTP calls use `reqwest`. Requests time out after 30 seconds unless configured otherwise; dropping a request future cancels it. No retries are performed.
//!
//! ## Out of scope
//! Not a webhook server, SMTP client or mail store. The crate mirrors the REST API and leaves retry policy and persistence to the caller.
//!
//! ## Errors
//! Every API call returns an [`ApiResponse`] envelope holding either data or an error message: unreachable hosts, non-2xx statuses and undecodable bodies all land there. The outer [`Result`] is only `Err` for a missing or malformed API key ([`Error::MissingApiKey`], [`Error::InvalidApiKey`]) and requests that could not be built ([`Error::Request`]). Webhook parsing fails with [`Error::WebhookParse`].
//!
//! ## Logging
//! Requests and failures are reported through `tracing` at `debug` and `warn` level. Install a subscriber in your application to see them.
//!
//! ## Example
//! ```no_run
//! use inbound_client::{Client, PostEmailsRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), inbound_client::Error> {
//!     let client = Client::new("your-api-key")?;
//!
//!     let email = PostEmailsRequest {
//!         from: "hello@yourdomain.com".into(),
//!         to: "user@example.com".into(),
//!         subject: "Hello World".into(),
//!         text: Some("Hello from Rust!".into()),
//!         ..Default::default()
//!     };
//!     let sent = client.email().send(&email, None).await?;
//!     match sent.into_result() {
//!         Ok(data) => println!("Sent: {}", data.id),
//!         Err(message) => eprintln!("Send failed: {message}"),
//!     }
//!
//!     if let Some(page) = client.mail().list(None).await?.data() {
//!         for email in &page.emails {
//!             println!("From: {}, Subject: {}", email.from, email.subject);
//!         }
//!     }
//!     Ok(())
//! }
//! ```

mod client;
mod error;
pub mod models;
mod query;
mod response;
pub mod services;
pub mod webhook;

pub use client::{Client, ClientBuilder};
pub use error::Error;
pub use models::*;
pub use query::{QueryBuilder, QueryParams, QueryValue, build_query_string};
pub use response::ApiResponse;
pub use webhook::{
    WebhookAddress, WebhookAddressGroup, WebhookAttachment, WebhookCleanedContent,
    WebhookEmailData, WebhookEndpointRef, WebhookParsedData, WebhookPayload,
    parse_webhook_payload,
};

/// Result type alias for Inbound client operations.
///
/// This is equivalent to `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
