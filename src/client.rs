//! Inbound async client implementation.

use std::fmt;
use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::models::{
    DomainSetup, EmailConfig, EndpointType, IdempotencyOptions, PostDomainsRequest,
    PostEmailReplyRequest, PostEmailReplyResponse, PostEndpointsRequest, PostEndpointsResponse,
    PostScheduleEmailRequest, PostScheduleEmailResponse, WebhookConfig,
};
use crate::response::READ_FAILURE;
use crate::services::{
    AttachmentService, DomainService, EmailAddressService, EmailService, EndpointService,
    MailService, ThreadService,
};
use crate::{ApiResponse, Error, Result};

const BASE_URL: &str = "https://inbound.new/api/v2";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT_VALUE: &str = concat!("inbound-client/", env!("CARGO_PKG_VERSION"));
const IDEMPOTENCY_KEY: &str = "Idempotency-Key";

/// Async client for the Inbound email API.
///
/// Cheap to clone; clones share one connection pool. Use [`Client::new`]
/// for defaults or [`Client::builder`] to override the base URL, timeout,
/// proxy or transport.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    auth: HeaderValue,
    base_url: String,
    proxy: Option<String>,
}

/// Completed HTTP exchange before the body is interpreted.
pub(crate) struct RawResponse {
    pub status: reqwest::StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl Client {
    /// Create a builder for configuring the client.
    pub fn builder(api_key: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(api_key)
    }

    /// Create a client with the default base URL and a 30 second timeout.
    ///
    /// # Examples
    /// ```no_run
    /// # use inbound_client::Client;
    /// # fn main() -> Result<(), inbound_client::Error> {
    /// let client = Client::new("your-api-key")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        ClientBuilder::new(api_key).build()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the proxy URL if one was configured.
    pub fn proxy(&self) -> Option<&str> {
        self.proxy.as_deref()
    }

    /// Received mail.
    pub fn mail(&self) -> MailService<'_> {
        MailService::new(self)
    }

    /// Sending, replying and scheduling.
    pub fn email(&self) -> EmailService<'_> {
        EmailService::new(self)
    }

    /// Receiving addresses. Same as `client.email().address()`.
    pub fn email_address(&self) -> EmailAddressService<'_> {
        EmailAddressService::new(self)
    }

    pub fn domain(&self) -> DomainService<'_> {
        DomainService::new(self)
    }

    pub fn endpoint(&self) -> EndpointService<'_> {
        EndpointService::new(self)
    }

    pub fn thread(&self) -> ThreadService<'_> {
        ThreadService::new(self)
    }

    pub fn attachment(&self) -> AttachmentService<'_> {
        AttachmentService::new(self)
    }

    /// Reply to a received email with a plain-text message.
    ///
    /// # Examples
    /// ```no_run
    /// # use inbound_client::Client;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), inbound_client::Error> {
    /// let client = Client::new("your-api-key")?;
    /// let reply = client
    ///     .quick_reply("email-id", "Thanks, we're on it.", "support@example.com", None)
    ///     .await?;
    /// if let Some(message) = reply.error() {
    ///     eprintln!("reply failed: {message}");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn quick_reply(
        &self,
        email_id: &str,
        message: &str,
        from: &str,
        options: Option<&IdempotencyOptions>,
    ) -> Result<ApiResponse<PostEmailReplyResponse>> {
        let params = PostEmailReplyRequest {
            from: from.to_string(),
            text: Some(message.to_string()),
            ..Default::default()
        };
        self.email().reply(email_id, &params, options).await
    }

    /// Register a domain and, when `webhook_url` is given, a webhook
    /// endpoint named after it.
    ///
    /// A failed domain step is returned as the envelope error. Once the
    /// domain exists it is always returned; a failed webhook step is reported
    /// in [`DomainSetup::endpoint_error`] instead.
    pub async fn setup_domain(
        &self,
        domain: &str,
        webhook_url: Option<&str>,
    ) -> Result<ApiResponse<DomainSetup>> {
        let created = self
            .domain()
            .create(&PostDomainsRequest::new(domain))
            .await?;
        let domain_data = match created.into_result() {
            Ok(data) => data,
            Err(message) => return Ok(ApiResponse::failure(message)),
        };

        let Some(url) = webhook_url.filter(|url| !url.is_empty()) else {
            return Ok(ApiResponse::success(DomainSetup {
                domain: domain_data,
                ..Default::default()
            }));
        };

        let params = PostEndpointsRequest {
            name: format!("{domain} Webhook"),
            kind: EndpointType::Webhook,
            description: None,
            config: WebhookConfig {
                url: url.to_string(),
                timeout: 30_000,
                retry_attempts: 3,
                headers: Default::default(),
            }
            .into(),
        };
        let (endpoint, endpoint_error) = self
            .endpoint()
            .create(&params)
            .await?
            .into_parts();
        if let Some(message) = &endpoint_error {
            tracing::warn!(domain, error = %message, "webhook endpoint was not created");
        }

        Ok(ApiResponse::success(DomainSetup {
            domain: domain_data,
            endpoint,
            endpoint_error,
        }))
    }

    /// Create an endpoint that forwards mail to `to`.
    pub async fn create_forwarder(
        &self,
        from: &str,
        to: &str,
    ) -> Result<ApiResponse<PostEndpointsResponse>> {
        let params = PostEndpointsRequest {
            name: format!("Forward {from} to {to}"),
            kind: EndpointType::Email,
            description: None,
            config: EmailConfig {
                email: to.to_string(),
            }
            .into(),
        };
        self.endpoint().create(&params).await
    }

    /// Schedule a `Reminder: <subject>` email for `when` (ISO 8601 or natural
    /// language such as "tomorrow at 9am").
    pub async fn schedule_reminder(
        &self,
        to: &str,
        subject: &str,
        when: &str,
        from: &str,
        options: Option<&IdempotencyOptions>,
    ) -> Result<ApiResponse<PostScheduleEmailResponse>> {
        let params = PostScheduleEmailRequest {
            from: from.to_string(),
            to: to.into(),
            subject: subject.to_string(),
            text: Some(format!("Reminder: {subject}")),
            scheduled_at: when.to_string(),
            ..Default::default()
        };
        self.email().schedule(&params, options).await
    }

    /// Start a request against `path` with authentication and, when a
    /// non-empty key was given, the idempotency header.
    pub(crate) fn request(
        &self,
        method: Method,
        path: &str,
        options: Option<&IdempotencyOptions>,
    ) -> RequestBuilder {
        let mut builder = self
            .http
            .request(method, format!("{}{}", self.base_url, path))
            .headers(self.headers());

        if let Some(key) = options.and_then(IdempotencyOptions::key) {
            builder = builder.header(IDEMPOTENCY_KEY, key);
        }

        builder
    }

    /// `GET path`, decoding the body as `T`.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<ApiResponse<T>> {
        self.execute(self.request(Method::GET, path, None)).await
    }

    /// Send `body` as JSON with `method`, decoding the reply as `T`.
    pub(crate) async fn send_json<T, B>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        options: Option<&IdempotencyOptions>,
    ) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(self.request(method, path, options).json(body))
            .await
    }

    /// Bodiless call with `method`, decoding the reply as `T`.
    pub(crate) async fn send_empty<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
    ) -> Result<ApiResponse<T>> {
        self.execute(self.request(method, path, None)).await
    }

    /// Run `builder` and classify the outcome into the envelope.
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<ApiResponse<T>> {
        Ok(self
            .dispatch(builder)
            .await?
            .and_then(|raw| ApiResponse::from_http(raw.status, &raw.body)))
    }

    /// Send the request and read the whole body.
    ///
    /// Only a request that cannot be built is an `Err`; transport failures
    /// become an error envelope carrying the transport's message.
    pub(crate) async fn dispatch(
        &self,
        builder: RequestBuilder,
    ) -> Result<ApiResponse<RawResponse>> {
        let request = builder.build()?;
        let method = request.method().clone();
        let url = request.url().clone();
        let idempotent = request.headers().contains_key(IDEMPOTENCY_KEY);

        tracing::debug!(%method, %url, idempotent, "sending request");

        let response = match self.http.execute(request).await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(%method, %url, error = %err, "request failed before a response");
                return Ok(ApiResponse::failure(err.to_string()));
            }
        };

        let status = response.status();
        let headers = response.headers().clone();
        tracing::debug!(%method, %url, %status, "received response");

        match response.bytes().await {
            Ok(body) => Ok(ApiResponse::success(RawResponse {
                status,
                headers,
                body: body.to_vec(),
            })),
            Err(err) => {
                tracing::warn!(%method, %url, error = %err, "failed to read response body");
                Ok(ApiResponse::failure(READ_FAILURE))
            }
        }
    }

    /// Build headers sent with every request.
    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, self.auth.clone());
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("proxy", &self.proxy)
            .finish_non_exhaustive()
    }
}

/// Builder for configuring an Inbound client.
///
/// Start with [`Client::builder`] to override defaults.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    api_key: String,
    base_url: String,
    timeout: Duration,
    proxy: Option<String>,
    danger_accept_invalid_certs: bool,
    user_agent: String,
    http: Option<reqwest::Client>,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    ///
    /// Defaults:
    /// - Base URL `https://inbound.new/api/v2`
    /// - 30 second timeout
    /// - No proxy
    /// - `danger_accept_invalid_certs = false`
    /// - `inbound-client/<version>` user agent
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            proxy: None,
            danger_accept_invalid_certs: false,
            user_agent: USER_AGENT_VALUE.to_string(),
            http: None,
        }
    }

    /// Override the API root, e.g. for a staging deployment or a test server.
    ///
    /// An empty string keeps the default.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        if !base_url.is_empty() {
            self.base_url = base_url.trim_end_matches('/').to_string();
        }
        self
    }

    /// Per-request timeout covering connect, send and body read.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a proxy URL (e.g., "http://127.0.0.1:8080" or "socks5://...").
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Control whether to accept invalid TLS certificates (default: false).
    pub fn danger_accept_invalid_certs(mut self, value: bool) -> Self {
        self.danger_accept_invalid_certs = value;
        self
    }

    /// Override the default user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Use a pre-built `reqwest::Client`.
    ///
    /// Timeout, proxy, TLS and user-agent settings on this builder are then
    /// ignored in favour of the given client's own.
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Build the client.
    ///
    /// Fails with [`Error::MissingApiKey`] for an empty key,
    /// [`Error::InvalidApiKey`] for a key that cannot be sent as a header, or
    /// [`Error::Request`] when the HTTP client cannot be created (for
    /// example, an invalid proxy URL).
    ///
    /// # Examples
    /// ```no_run
    /// # use inbound_client::Client;
    /// # use std::time::Duration;
    /// # fn main() -> Result<(), inbound_client::Error> {
    /// let client = Client::builder("your-api-key")
    ///     .timeout(Duration::from_secs(10))
    ///     .user_agent("my-app/1.0")
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn build(self) -> Result<Client> {
        if self.api_key.is_empty() {
            return Err(Error::MissingApiKey);
        }

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", self.api_key))
            .map_err(|_| Error::InvalidApiKey)?;
        auth.set_sensitive(true);

        let http = match self.http {
            Some(http) => http,
            None => {
                let mut builder = reqwest::Client::builder()
                    .timeout(self.timeout)
                    .user_agent(self.user_agent)
                    .danger_accept_invalid_certs(self.danger_accept_invalid_certs);

                if let Some(proxy_url) = &self.proxy {
                    builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
                }

                builder.build()?
            }
        };

        Ok(Client {
            http,
            auth,
            base_url: self.base_url,
            proxy: self.proxy,
        })
    }
}

/// Percent-encode one path segment.
pub(crate) fn segment(value: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_api_key_is_rejected() {
        let err = Client::new("").unwrap_err();
        assert!(matches!(err, Error::MissingApiKey));
        assert_eq!(err.to_string(), "API key is required");
    }

    #[test]
    fn api_key_must_be_a_valid_header_value() {
        let err = Client::new("bad\nkey").unwrap_err();
        assert!(matches!(err, Error::InvalidApiKey));
    }

    #[test]
    fn defaults_and_overrides() {
        let client = Client::new("test-api-key").unwrap();
        assert_eq!(client.base_url(), "https://inbound.new/api/v2");
        assert_eq!(client.proxy(), None);

        let client = Client::builder("test-api-key")
            .base_url("https://custom-api.example.com/")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "https://custom-api.example.com");

        let client = Client::builder("test-api-key").base_url("").build().unwrap();
        assert_eq!(client.base_url(), "https://inbound.new/api/v2");
    }

    #[test]
    fn debug_output_hides_the_key() {
        let client = Client::new("secret-key").unwrap();
        let debug = format!("{client:?}");
        assert!(!debug.contains("secret-key"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn request_carries_auth_and_idempotency_headers() {
        let client = Client::new("test-api-key").unwrap();

        let request = client
            .request(Method::POST, "/emails", Some(&IdempotencyOptions::new("key-1")))
            .build()
            .unwrap();
        assert_eq!(request.url().as_str(), "https://inbound.new/api/v2/emails");
        assert_eq!(request.headers()[AUTHORIZATION], "Bearer test-api-key");
        assert_eq!(request.headers()[CONTENT_TYPE], "application/json");
        assert_eq!(request.headers()[IDEMPOTENCY_KEY], "key-1");

        let request = client
            .request(Method::POST, "/emails", Some(&IdempotencyOptions::new("")))
            .build()
            .unwrap();
        assert!(!request.headers().contains_key(IDEMPOTENCY_KEY));

        let request = client.request(Method::POST, "/emails", None).build().unwrap();
        assert!(!request.headers().contains_key(IDEMPOTENCY_KEY));
    }

    #[test]
    fn path_segments_are_escaped() {
        assert_eq!(segment("my document.pdf"), "my%20document.pdf");
        assert_eq!(segment("a/b"), "a%2Fb");
    }

    #[tokio::test]
    async fn malformed_base_url_is_a_build_error() {
        let client = Client::builder("test-api-key")
            .base_url("not a url")
            .build()
            .unwrap();
        let result = client.domain().list(None).await;
        assert!(matches!(result, Err(Error::Request(_))));
    }
}
