//! The `{ data, error }` envelope returned by every API call.

use reqwest::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;

pub(crate) const PARSE_FAILURE: &str = "Failed to parse response";
pub(crate) const READ_FAILURE: &str = "Failed to read response body";

/// Outcome of a single API call.
///
/// Exactly one of [`data`](Self::data) and [`error`](Self::error) is set.
/// Unreachable hosts, error statuses and undecodable bodies all end up as
/// an error message here, so callers only need one check:
///
/// ```no_run
/// # use inbound_client::Client;
/// # #[tokio::main]
/// # async fn main() -> Result<(), inbound_client::Error> {
/// let client = Client::new("your-api-key")?;
/// let response = client.domain().list(None).await?;
/// match response.error() {
///     Some(message) => eprintln!("request failed: {message}"),
///     None => println!("{:?}", response.data()),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    data: Option<T>,
    error: Option<String>,
}

/// Error body shape used by the API for failed calls.
#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Envelope carrying a payload.
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
        }
    }

    /// Envelope carrying an error message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            data: None,
            error: Some(message.into()),
        }
    }

    /// The payload, if the call succeeded.
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// The error message, if the call failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_success(&self) -> bool {
        self.data.is_some()
    }

    /// Split into `(data, error)`.
    pub fn into_parts(self) -> (Option<T>, Option<String>) {
        (self.data, self.error)
    }

    /// Convert into a `Result`, with the error message as `Err`.
    pub fn into_result(self) -> std::result::Result<T, String> {
        match (self.data, self.error) {
            (Some(data), _) => Ok(data),
            (None, Some(error)) => Err(error),
            (None, None) => Err(PARSE_FAILURE.to_string()),
        }
    }

    /// Map the payload, keeping an error untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        ApiResponse {
            data: self.data.map(f),
            error: self.error,
        }
    }

    /// Chain a second step that only runs when this one succeeded.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> ApiResponse<U>) -> ApiResponse<U> {
        match self.data {
            Some(data) => f(data),
            None => ApiResponse {
                data: None,
                error: self.error,
            },
        }
    }
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Classify a completed HTTP exchange.
    ///
    /// Statuses >= 400 become an error, preferring the server's
    /// `{"error": "..."}` message over a synthesized `HTTP <code>: <reason>`.
    /// Anything else is decoded as `T`.
    pub(crate) fn from_http(status: StatusCode, body: &[u8]) -> Self {
        if let Some(message) = error_message(status, body) {
            return Self::failure(message);
        }

        match serde_json::from_slice(body) {
            Ok(data) => Self::success(data),
            Err(err) => {
                tracing::warn!(
                    %status,
                    error = %err,
                    "response body did not match the expected shape"
                );
                Self::failure(PARSE_FAILURE)
            }
        }
    }
}

impl<T> From<ApiResponse<T>> for std::result::Result<T, String> {
    fn from(response: ApiResponse<T>) -> Self {
        response.into_result()
    }
}

/// Error message for a failed status, or `None` if the status is a success.
///
/// The fallback names the code once, followed by the canonical reason
/// phrase: `HTTP 404: Not Found`, not `HTTP 404: 404 Not Found`.
pub(crate) fn error_message(status: StatusCode, body: &[u8]) -> Option<String> {
    if status.as_u16() < 400 {
        return None;
    }

    let message = serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| {
            format!(
                "HTTP {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )
        });

    Some(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: String,
        count: u32,
    }

    #[test]
    fn success_body_is_decoded() {
        let response =
            ApiResponse::<Item>::from_http(StatusCode::OK, br#"{"id":"a","count":3}"#);
        assert_eq!(
            response.data(),
            Some(&Item {
                id: "a".into(),
                count: 3
            })
        );
        assert!(response.error().is_none());
    }

    #[test]
    fn server_error_message_is_preferred() {
        let response = ApiResponse::<Item>::from_http(
            StatusCode::UNAUTHORIZED,
            br#"{"error":"Invalid API key"}"#,
        );
        assert_eq!(response.error(), Some("Invalid API key"));
        assert!(response.data().is_none());
    }

    #[test]
    fn unknown_error_body_falls_back_to_status() {
        let response =
            ApiResponse::<Item>::from_http(StatusCode::NOT_FOUND, b"<html>not here</html>");
        assert_eq!(response.error(), Some("HTTP 404: Not Found"));

        let response =
            ApiResponse::<Item>::from_http(StatusCode::BAD_GATEWAY, br#"{"error":""}"#);
        assert_eq!(response.error(), Some("HTTP 502: Bad Gateway"));
    }

    #[test]
    fn undecodable_success_body_is_a_parse_failure() {
        let response = ApiResponse::<Item>::from_http(StatusCode::OK, br#"{"id":1}"#);
        assert_eq!(response.error(), Some(PARSE_FAILURE));
        assert!(response.data().is_none());

        let response = ApiResponse::<Item>::from_http(StatusCode::OK, b"");
        assert_eq!(response.error(), Some(PARSE_FAILURE));
    }

    #[test]
    fn redirect_range_is_not_an_error() {
        let response = ApiResponse::<serde_json::Value>::from_http(
            StatusCode::NOT_MODIFIED,
            br#"{"error":"ignored"}"#,
        );
        assert!(response.is_success());
    }

    #[test]
    fn and_then_short_circuits_on_error() {
        let failed: ApiResponse<u32> = ApiResponse::failure("boom");
        let chained = failed.and_then(|n| ApiResponse::success(n + 1));
        assert_eq!(chained.into_result(), Err("boom".to_string()));

        let ok = ApiResponse::success(1).and_then(|n| ApiResponse::success(n + 1));
        assert_eq!(ok.into_result(), Ok(2));
    }
}
