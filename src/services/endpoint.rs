use reqwest::Method;

use crate::client::segment;
use crate::models::{
    DeleteEndpointByIdResponse, GetEndpointByIdResponse, GetEndpointsRequest,
    GetEndpointsResponse, PostEndpointsRequest, PostEndpointsResponse, PutEndpointByIdRequest,
    PutEndpointByIdResponse,
};
use crate::query::build_query_string;
use crate::{ApiResponse, Client, Result};

/// Delivery endpoints (`/endpoints`): webhooks, forwarding addresses and
/// address groups.
#[derive(Debug, Clone, Copy)]
pub struct EndpointService<'a> {
    client: &'a Client,
}

impl<'a> EndpointService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn create(
        &self,
        params: &PostEndpointsRequest,
    ) -> Result<ApiResponse<PostEndpointsResponse>> {
        self.client
            .send_json(Method::POST, "/endpoints", params, None)
            .await
    }

    pub async fn list(
        &self,
        params: Option<&GetEndpointsRequest>,
    ) -> Result<ApiResponse<GetEndpointsResponse>> {
        let path = format!("/endpoints{}", build_query_string(params));
        self.client.get(&path).await
    }

    pub async fn get(&self, id: &str) -> Result<ApiResponse<GetEndpointByIdResponse>> {
        self.client.get(&format!("/endpoints/{}", segment(id))).await
    }

    pub async fn update(
        &self,
        id: &str,
        params: &PutEndpointByIdRequest,
    ) -> Result<ApiResponse<PutEndpointByIdResponse>> {
        let path = format!("/endpoints/{}", segment(id));
        self.client
            .send_json(Method::PUT, &path, params, None)
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<ApiResponse<DeleteEndpointByIdResponse>> {
        self.client
            .send_empty(Method::DELETE, &format!("/endpoints/{}", segment(id)))
            .await
    }

    /// Send a test delivery to the endpoint.
    pub async fn test(&self, id: &str) -> Result<ApiResponse<serde_json::Value>> {
        self.client
            .send_empty(Method::POST, &format!("/endpoints/{}/test", segment(id)))
            .await
    }
}
