use reqwest::Method;

use crate::client::segment;
use crate::models::{
    GetThreadByIdResponse, GetThreadStatsResponse, GetThreadsRequest, GetThreadsResponse,
    PostThreadActionsRequest, PostThreadActionsResponse, ThreadAction,
};
use crate::query::build_query_string;
use crate::{ApiResponse, Client, Result};

/// Conversation threads (`/threads`).
#[derive(Debug, Clone, Copy)]
pub struct ThreadService<'a> {
    client: &'a Client,
}

impl<'a> ThreadService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        params: Option<&GetThreadsRequest>,
    ) -> Result<ApiResponse<GetThreadsResponse>> {
        let path = format!("/threads{}", build_query_string(params));
        self.client.get(&path).await
    }

    /// A thread with all of its messages.
    pub async fn get(&self, id: &str) -> Result<ApiResponse<GetThreadByIdResponse>> {
        self.client.get(&format!("/threads/{}", segment(id))).await
    }

    pub async fn perform_action(
        &self,
        id: &str,
        params: &PostThreadActionsRequest,
    ) -> Result<ApiResponse<PostThreadActionsResponse>> {
        let path = format!("/threads/{}/actions", segment(id));
        self.client
            .send_json(Method::POST, &path, params, None)
            .await
    }

    pub async fn stats(&self) -> Result<ApiResponse<GetThreadStatsResponse>> {
        self.client.get("/threads/stats").await
    }

    pub async fn mark_as_read(&self, id: &str) -> Result<ApiResponse<PostThreadActionsResponse>> {
        self.action(id, ThreadAction::MarkAsRead).await
    }

    pub async fn mark_as_unread(
        &self,
        id: &str,
    ) -> Result<ApiResponse<PostThreadActionsResponse>> {
        self.action(id, ThreadAction::MarkAsUnread).await
    }

    pub async fn archive(&self, id: &str) -> Result<ApiResponse<PostThreadActionsResponse>> {
        self.action(id, ThreadAction::Archive).await
    }

    pub async fn unarchive(&self, id: &str) -> Result<ApiResponse<PostThreadActionsResponse>> {
        self.action(id, ThreadAction::Unarchive).await
    }

    async fn action(
        &self,
        id: &str,
        action: ThreadAction,
    ) -> Result<ApiResponse<PostThreadActionsResponse>> {
        self.perform_action(id, &PostThreadActionsRequest { action })
            .await
    }
}
