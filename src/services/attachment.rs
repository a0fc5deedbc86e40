use reqwest::Method;

use crate::client::segment;
use crate::models::AttachmentDownload;
use crate::response::error_message;
use crate::{ApiResponse, Client, Result};

/// Attachment downloads (`/attachments`).
#[derive(Debug, Clone, Copy)]
pub struct AttachmentService<'a> {
    client: &'a Client,
}

impl<'a> AttachmentService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Download `filename` from email `email_id` as raw bytes.
    ///
    /// Failed statuses are reported like any other call: the server's
    /// message if it sent one, `HTTP <code>: <reason>` otherwise.
    ///
    /// # Examples
    /// ```no_run
    /// # use inbound_client::Client;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), inbound_client::Error> {
    /// let client = Client::new("your-api-key")?;
    /// let download = client.attachment().download("email-id", "report.pdf").await?;
    /// if let Some(file) = download.data() {
    ///     std::fs::write("report.pdf", &file.data).expect("write attachment");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn download(
        &self,
        email_id: &str,
        filename: &str,
    ) -> Result<ApiResponse<AttachmentDownload>> {
        let path = format!("/attachments/{}/{}", segment(email_id), segment(filename));
        let raw = self
            .client
            .dispatch(self.client.request(Method::GET, &path, None))
            .await?;

        Ok(raw.and_then(|raw| match error_message(raw.status, &raw.body) {
            Some(message) => ApiResponse::failure(message),
            None => ApiResponse::success(AttachmentDownload {
                data: raw.body,
                headers: raw.headers,
            }),
        }))
    }
}
