//! Types shared across resources.

use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};

/// Pagination block attached to list responses.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Pagination {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub limit: u32,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub offset: u32,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub total: u64,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub has_more: bool,
}

/// Per-call options for write operations that support deduplication.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdempotencyOptions {
    pub idempotency_key: Option<String>,
}

impl IdempotencyOptions {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            idempotency_key: Some(key.into()),
        }
    }

    /// The key to send, treating an empty string as absent.
    pub fn key(&self) -> Option<&str> {
        self.idempotency_key.as_deref().filter(|k| !k.is_empty())
    }
}

/// One address or a list of addresses.
///
/// The API accepts both shapes for `to`, `cc`, `bcc` and `replyTo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Recipients {
    One(String),
    Many(Vec<String>),
}

impl Recipients {
    /// All addresses, regardless of shape.
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            Recipients::One(address) => vec![address.clone()],
            Recipients::Many(addresses) => addresses.clone(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Recipients::One(_) => 1,
            Recipients::Many(addresses) => addresses.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Recipients {
    fn default() -> Self {
        Recipients::Many(Vec::new())
    }
}

impl From<&str> for Recipients {
    fn from(address: &str) -> Self {
        Recipients::One(address.to_string())
    }
}

impl From<String> for Recipients {
    fn from(address: String) -> Self {
        Recipients::One(address)
    }
}

impl From<Vec<String>> for Recipients {
    fn from(addresses: Vec<String>) -> Self {
        Recipients::Many(addresses)
    }
}

impl From<Vec<&str>> for Recipients {
    fn from(addresses: Vec<&str>) -> Self {
        Recipients::Many(addresses.into_iter().map(String::from).collect())
    }
}

/// Attachment for an outgoing email, given either as a remote `path` or as
/// base64 `content`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentData {
    /// Remote file URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Base64 encoded content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub filename: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Content ID for inline images (max 128 chars).
    #[serde(
        default,
        rename = "content_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub content_id: Option<String>,
}

/// Name/value tag attached to an email.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailTag {
    pub name: String,
    pub value: String,
}

impl EmailTag {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn recipients_keep_their_shape() {
        let one: Recipients = serde_json::from_value(json!("a@x.com")).unwrap();
        assert_eq!(one, Recipients::One("a@x.com".into()));
        assert_eq!(serde_json::to_value(&one).unwrap(), json!("a@x.com"));

        let many: Recipients = serde_json::from_value(json!(["a@x.com", "b@x.com"])).unwrap();
        assert_eq!(many.len(), 2);
        assert_eq!(
            serde_json::to_value(&many).unwrap(),
            json!(["a@x.com", "b@x.com"])
        );
    }

    #[test]
    fn empty_idempotency_key_is_absent() {
        assert_eq!(IdempotencyOptions::default().key(), None);
        assert_eq!(IdempotencyOptions::new("").key(), None);
        assert_eq!(IdempotencyOptions::new("k-1").key(), Some("k-1"));
    }

    #[test]
    fn attachment_uses_wire_names() {
        let attachment = AttachmentData {
            content: Some("aGVsbG8=".into()),
            filename: "hello.txt".into(),
            content_type: Some("text/plain".into()),
            content_id: Some("logo".into()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&attachment).unwrap(),
            json!({
                "content": "aGVsbG8=",
                "filename": "hello.txt",
                "contentType": "text/plain",
                "content_id": "logo"
            })
        );
    }
}
