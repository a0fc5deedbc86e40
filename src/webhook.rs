//! Parsing for inbound `email.received` webhook deliveries.
//!
//! The client does not host an HTTP listener. Hand the request body your
//! server received to [`parse_webhook_payload`] (or
//! [`WebhookPayload::from_slice`]) and read the typed fields.

use std::collections::HashMap;
use std::fmt;
use std::io::Read;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};
use serde_json::Value;

use crate::{Error, Result};

/// Root of a webhook delivery.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebhookPayload {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub event: String,
    /// ISO 8601 timestamp, kept as sent.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub timestamp: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub email: WebhookEmailData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<WebhookEndpointRef>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WebhookEmailData {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub message_id: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub from: WebhookAddressGroup,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub to: WebhookAddressGroup,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub recipient: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub subject: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub received_at: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub parsed_data: WebhookParsedData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cleaned_content: Option<WebhookCleanedContent>,
}

/// An address line as written plus its parsed entries.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebhookAddressGroup {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub text: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub addresses: Vec<WebhookAddress>,
}

impl WebhookAddressGroup {
    /// The first address formatted for display, or `""` if there is none.
    pub fn first_formatted(&self) -> String {
        self.addresses
            .first()
            .map(ToString::to_string)
            .unwrap_or_default()
    }
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebhookAddress {
    pub name: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub address: String,
}

impl fmt::Display for WebhookAddress {
    /// `Name <address>` when a name is present, the bare address otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => write!(f, "{name} <{}>", self.address),
            _ => f.write_str(&self.address),
        }
    }
}

/// The message as parsed by the server.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WebhookParsedData {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub message_id: String,
    /// Senders emit either a timestamp string or a structured date, so the
    /// raw value is kept.
    pub date: Value,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub subject: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub from: WebhookAddressGroup,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub to: WebhookAddressGroup,
    pub cc: Option<WebhookAddressGroup>,
    pub bcc: Option<WebhookAddressGroup>,
    pub reply_to: Option<WebhookAddressGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_reply_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub references: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub text_body: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub html_body: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub attachments: Vec<WebhookAttachment>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub headers: HashMap<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
}

impl WebhookParsedData {
    /// The `date` field when it was sent as a plain string.
    pub fn date_str(&self) -> Option<&str> {
        self.date.as_str()
    }
}

/// Server-sanitized bodies and attachments.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WebhookCleanedContent {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub html: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub text: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub has_html: bool,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub has_text: bool,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub attachments: Vec<WebhookAttachment>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub headers: HashMap<String, Value>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WebhookAttachment {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub filename: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub content_type: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub content_id: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub url: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub download_url: String,
}

/// The endpoint the delivery was routed through.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebhookEndpointRef {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub name: String,
    #[serde(rename = "type")]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub kind: String,
}

/// Parse one webhook JSON document from `reader`.
///
/// # Examples
/// ```
/// let body = br#"{"event":"email.received","timestamp":"2025-09-16T16:47:50.163Z",
///     "email":{"from":{"text":"Ann <a@x.com>",
///     "addresses":[{"name":"Ann","address":"a@x.com"}]}}}"#;
/// let payload = inbound_client::parse_webhook_payload(&body[..])?;
/// assert_eq!(payload.from_address(), "Ann <a@x.com>");
/// # Ok::<(), inbound_client::Error>(())
/// ```
pub fn parse_webhook_payload<R: Read>(reader: R) -> Result<WebhookPayload> {
    serde_json::from_reader(reader).map_err(|err| {
        tracing::debug!(error = %err, "rejected webhook payload");
        Error::WebhookParse(err)
    })
}

impl WebhookPayload {
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        parse_webhook_payload(bytes)
    }

    /// First sender, as `Name <address>` or a bare address.
    pub fn from_address(&self) -> String {
        self.email.from.first_formatted()
    }

    /// First recipient, as `Name <address>` or a bare address.
    pub fn to_address(&self) -> String {
        self.email.to.first_formatted()
    }

    /// Parsed headers flattened to name → values.
    ///
    /// A string becomes one value. Arrays keep their string elements and are
    /// dropped when none are left. Objects contribute their `text` field, or
    /// `value` if there is no `text`. Anything else is left out.
    pub fn headers(&self) -> HashMap<String, Vec<String>> {
        normalize_headers(&self.email.parsed_data.headers)
    }
}

impl FromStr for WebhookPayload {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_webhook_payload(s.as_bytes())
    }
}

fn normalize_headers(raw: &HashMap<String, Value>) -> HashMap<String, Vec<String>> {
    raw.iter()
        .filter_map(|(name, value)| header_values(value).map(|values| (name.clone(), values)))
        .collect()
}

fn header_values(value: &Value) -> Option<Vec<String>> {
    match value {
        Value::String(s) => Some(vec![s.clone()]),
        Value::Array(items) => {
            let strings: Vec<String> = items
                .iter()
                .filter_map(|item| item.as_str().map(String::from))
                .collect();
            (!strings.is_empty()).then_some(strings)
        }
        Value::Object(map) => map
            .get("text")
            .and_then(Value::as_str)
            .or_else(|| map.get("value").and_then(Value::as_str))
            .map(|s| vec![s.to_string()]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn group(addresses: Vec<WebhookAddress>) -> WebhookAddressGroup {
        WebhookAddressGroup {
            text: String::new(),
            addresses,
        }
    }

    fn address(name: Option<&str>, address: &str) -> WebhookAddress {
        WebhookAddress {
            name: name.map(String::from),
            address: address.to_string(),
        }
    }

    #[test]
    fn address_formatting() {
        assert_eq!(group(vec![]).first_formatted(), "");
        assert_eq!(
            group(vec![address(Some("Ann"), "a@x.com")]).first_formatted(),
            "Ann <a@x.com>"
        );
        assert_eq!(group(vec![address(None, "a@x.com")]).first_formatted(), "a@x.com");
        assert_eq!(
            group(vec![address(Some(""), "a@x.com")]).first_formatted(),
            "a@x.com"
        );
    }

    #[test]
    fn only_first_address_is_formatted() {
        let to = group(vec![
            address(Some("Ann"), "a@x.com"),
            address(Some("Bob"), "b@x.com"),
        ]);
        assert_eq!(to.first_formatted(), "Ann <a@x.com>");
    }

    #[test]
    fn header_shapes_are_normalized() {
        let raw: HashMap<String, Value> = serde_json::from_value(json!({
            "k1": "v",
            "k2": ["a", "b"],
            "k3": {"text": "t"},
            "k4": {"novalue": 1}
        }))
        .unwrap();
        let headers = normalize_headers(&raw);

        assert_eq!(headers.len(), 3);
        assert_eq!(headers["k1"], vec!["v"]);
        assert_eq!(headers["k2"], vec!["a", "b"]);
        assert_eq!(headers["k3"], vec!["t"]);
        assert!(!headers.contains_key("k4"));
    }

    #[test]
    fn mixed_arrays_keep_only_strings() {
        let raw: HashMap<String, Value> = serde_json::from_value(json!({
            "mixed": ["a", 1, null, "b", {"x": 1}],
            "numbers": [1, 2],
            "count": 3,
            "value-only": {"value": "v=1", "params": {"a": "rsa-sha256"}},
            "both": {"text": "t", "value": "v"}
        }))
        .unwrap();
        let headers = normalize_headers(&raw);

        assert_eq!(headers["mixed"], vec!["a", "b"]);
        assert!(!headers.contains_key("numbers"));
        assert!(!headers.contains_key("count"));
        assert_eq!(headers["value-only"], vec!["v=1"]);
        assert_eq!(headers["both"], vec!["t"]);
    }

    #[test]
    fn structural_mismatch_is_an_error() {
        let err = WebhookPayload::from_str(r#"{"email": []}"#).unwrap_err();
        assert!(matches!(err, Error::WebhookParse(_)));

        let err = WebhookPayload::from_slice(b"{not json").unwrap_err();
        assert!(err.to_string().starts_with("failed to parse webhook payload"));
    }

    #[test]
    fn date_keeps_either_shape() {
        let payload: WebhookPayload =
            r#"{"email":{"parsedData":{"date":"2025-09-16T16:47:50.163Z"}}}"#
                .parse()
                .unwrap();
        assert_eq!(
            payload.email.parsed_data.date_str(),
            Some("2025-09-16T16:47:50.163Z")
        );

        let payload: WebhookPayload =
            r#"{"email":{"parsedData":{"date":{"year":2025,"month":9,"day":16}}}}"#
                .parse()
                .unwrap();
        assert_eq!(payload.email.parsed_data.date_str(), None);
        assert_eq!(payload.email.parsed_data.date["year"], 2025);
    }

    #[test]
    fn null_fields_decode_as_empty() {
        let payload = parse_webhook_payload(
            &br#"{"event":"email.received","timestamp":"t","email":{"subject":null,
                "from":{"text":null,"addresses":null},
                "parsedData":{"htmlBody":null,"attachments":null,"headers":null}}}"#[..],
        )
        .unwrap();

        assert_eq!(payload.email.subject, "");
        assert_eq!(payload.from_address(), "");
        assert_eq!(payload.email.parsed_data.html_body, "");
        assert!(payload.email.parsed_data.attachments.is_empty());
        assert!(payload.headers().is_empty());
    }
}
