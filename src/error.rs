//! Error types for the Inbound client.

/// Errors returned by the client.
///
/// Runtime failures of an API call (unreachable host, non-2xx status,
/// undecodable body) are reported inside [`ApiResponse`](crate::ApiResponse)
/// instead. This type only covers configuration mistakes, requests that
/// could not be built, and webhook payloads that could not be decoded.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The client was configured without an API key.
    #[error("API key is required")]
    MissingApiKey,

    /// The API key contains characters that are not allowed in an HTTP
    /// header, such as control characters.
    #[error("API key is not a valid header value")]
    InvalidApiKey,

    /// The HTTP client or an outgoing request could not be constructed
    /// (invalid base URL, proxy, header value or request body).
    #[error("failed to build request: {0}")]
    Request(#[from] reqwest::Error),

    /// An inbound webhook document was not valid JSON or had the wrong shape.
    #[error("failed to parse webhook payload: {0}")]
    WebhookParse(#[source] serde_json::Error),
}
