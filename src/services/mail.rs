use reqwest::Method;

use crate::client::segment;
use crate::models::{
    BulkMailRequest, GetMailByIdResponse, GetMailRequest, GetMailResponse, MailUpdates,
    PostMailRequest, PostMailResponse,
};
use crate::query::build_query_string;
use crate::{ApiResponse, Client, Result};

/// Received mail (`/mail`).
#[derive(Debug, Clone, Copy)]
pub struct MailService<'a> {
    client: &'a Client,
}

impl<'a> MailService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List received emails, optionally filtered.
    ///
    /// # Examples
    /// ```no_run
    /// # use inbound_client::{Client, GetMailRequest};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), inbound_client::Error> {
    /// let client = Client::new("your-api-key")?;
    /// let filter = GetMailRequest {
    ///     limit: Some(20),
    ///     search: Some("invoice".into()),
    ///     ..Default::default()
    /// };
    /// if let Some(page) = client.mail().list(Some(&filter)).await?.data() {
    ///     for email in &page.emails {
    ///         println!("{}: {}", email.from, email.subject);
    ///     }
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list(
        &self,
        params: Option<&GetMailRequest>,
    ) -> Result<ApiResponse<GetMailResponse>> {
        let path = format!("/mail{}", build_query_string(params));
        self.client.get(&path).await
    }

    pub async fn get(&self, id: &str) -> Result<ApiResponse<GetMailByIdResponse>> {
        self.client.get(&format!("/mail/{}", segment(id))).await
    }

    /// The conversation an email belongs to.
    pub async fn thread(&self, id: &str) -> Result<ApiResponse<serde_json::Value>> {
        self.client.get(&format!("/mail/{}/thread", segment(id))).await
    }

    pub async fn mark_read(&self, id: &str) -> Result<ApiResponse<serde_json::Value>> {
        self.update(
            id,
            MailUpdates {
                is_read: Some(true),
                ..Default::default()
            },
        )
        .await
    }

    pub async fn mark_unread(&self, id: &str) -> Result<ApiResponse<serde_json::Value>> {
        self.update(
            id,
            MailUpdates {
                is_read: Some(false),
                ..Default::default()
            },
        )
        .await
    }

    pub async fn archive(&self, id: &str) -> Result<ApiResponse<serde_json::Value>> {
        self.update(
            id,
            MailUpdates {
                is_archived: Some(true),
                ..Default::default()
            },
        )
        .await
    }

    pub async fn unarchive(&self, id: &str) -> Result<ApiResponse<serde_json::Value>> {
        self.update(
            id,
            MailUpdates {
                is_archived: Some(false),
                ..Default::default()
            },
        )
        .await
    }

    /// Reply through the mailbox endpoint.
    pub async fn reply(&self, params: &PostMailRequest) -> Result<ApiResponse<PostMailResponse>> {
        self.client
            .send_json(Method::POST, "/mail", params, None)
            .await
    }

    /// Apply the same read/archive change to several emails.
    pub async fn bulk(
        &self,
        email_ids: &[String],
        updates: &MailUpdates,
    ) -> Result<ApiResponse<serde_json::Value>> {
        let body = BulkMailRequest { email_ids, updates };
        self.client
            .send_json(Method::POST, "/mail/bulk", &body, None)
            .await
    }

    async fn update(
        &self,
        id: &str,
        updates: MailUpdates,
    ) -> Result<ApiResponse<serde_json::Value>> {
        self.client
            .send_json(Method::PATCH, &format!("/mail/{}", segment(id)), &updates, None)
            .await
    }
}
