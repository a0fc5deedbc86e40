use reqwest::Method;

use super::EmailAddressService;
use crate::client::segment;
use crate::models::{
    DeleteScheduledEmailResponse, GetEmailByIdResponse, GetScheduledEmailResponse,
    GetScheduledEmailsRequest, GetScheduledEmailsResponse, IdempotencyOptions,
    PostEmailReplyRequest, PostEmailReplyResponse, PostEmailsRequest, PostEmailsResponse,
    PostScheduleEmailRequest, PostScheduleEmailResponse,
};
use crate::query::build_query_string;
use crate::{ApiResponse, Client, Result};

/// Outbound email (`/emails`).
#[derive(Debug, Clone, Copy)]
pub struct EmailService<'a> {
    client: &'a Client,
}

impl<'a> EmailService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Receiving addresses, grouped under email.
    pub fn address(&self) -> EmailAddressService<'a> {
        EmailAddressService::new(self.client)
    }

    /// Send an email, or schedule it when `params.scheduled_at` is set.
    ///
    /// # Examples
    /// ```no_run
    /// # use inbound_client::{Client, IdempotencyOptions, PostEmailsRequest};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), inbound_client::Error> {
    /// let client = Client::new("your-api-key")?;
    /// let email = PostEmailsRequest {
    ///     from: "hello@yourdomain.com".into(),
    ///     to: vec!["a@example.com", "b@example.com"].into(),
    ///     subject: "Welcome".into(),
    ///     text: Some("Glad to have you.".into()),
    ///     ..Default::default()
    /// };
    /// let sent = client
    ///     .email()
    ///     .send(&email, Some(&IdempotencyOptions::new("welcome-42")))
    ///     .await?;
    /// println!("{:?}", sent.into_result());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn send(
        &self,
        params: &PostEmailsRequest,
        options: Option<&IdempotencyOptions>,
    ) -> Result<ApiResponse<PostEmailsResponse>> {
        let path = if params.scheduled_at.is_some() {
            "/emails/schedule"
        } else {
            "/emails"
        };
        self.client
            .send_json(Method::POST, path, params, options)
            .await
    }

    pub async fn get(&self, id: &str) -> Result<ApiResponse<GetEmailByIdResponse>> {
        self.client.get(&format!("/emails/{}", segment(id))).await
    }

    /// Reply to the email `id`.
    pub async fn reply(
        &self,
        id: &str,
        params: &PostEmailReplyRequest,
        options: Option<&IdempotencyOptions>,
    ) -> Result<ApiResponse<PostEmailReplyResponse>> {
        let path = format!("/emails/{}/reply", segment(id));
        self.client
            .send_json(Method::POST, &path, params, options)
            .await
    }

    /// Schedule an email for later delivery.
    pub async fn schedule(
        &self,
        params: &PostScheduleEmailRequest,
        options: Option<&IdempotencyOptions>,
    ) -> Result<ApiResponse<PostScheduleEmailResponse>> {
        self.client
            .send_json(Method::POST, "/emails/schedule", params, options)
            .await
    }

    pub async fn list_scheduled(
        &self,
        params: Option<&GetScheduledEmailsRequest>,
    ) -> Result<ApiResponse<GetScheduledEmailsResponse>> {
        let path = format!("/emails/schedule{}", build_query_string(params));
        self.client.get(&path).await
    }

    pub async fn get_scheduled(&self, id: &str) -> Result<ApiResponse<GetScheduledEmailResponse>> {
        self.client
            .get(&format!("/emails/schedule/{}", segment(id)))
            .await
    }

    /// Cancel a scheduled email. Only emails still in `scheduled` state can
    /// be cancelled.
    pub async fn cancel(&self, id: &str) -> Result<ApiResponse<DeleteScheduledEmailResponse>> {
        self.client
            .send_empty(Method::DELETE, &format!("/emails/schedule/{}", segment(id)))
            .await
    }
}
