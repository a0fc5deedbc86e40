use reqwest::Method;

use crate::client::segment;
use crate::models::{
    DeleteEmailAddressByIdResponse, GetEmailAddressByIdResponse, GetEmailAddressesRequest,
    GetEmailAddressesResponse, PostEmailAddressesRequest, PostEmailAddressesResponse,
    PutEmailAddressByIdRequest, PutEmailAddressByIdResponse,
};
use crate::query::build_query_string;
use crate::{ApiResponse, Client, Result};

/// Receiving addresses (`/email-addresses`).
#[derive(Debug, Clone, Copy)]
pub struct EmailAddressService<'a> {
    client: &'a Client,
}

impl<'a> EmailAddressService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn create(
        &self,
        params: &PostEmailAddressesRequest,
    ) -> Result<ApiResponse<PostEmailAddressesResponse>> {
        self.client
            .send_json(Method::POST, "/email-addresses", params, None)
            .await
    }

    pub async fn list(
        &self,
        params: Option<&GetEmailAddressesRequest>,
    ) -> Result<ApiResponse<GetEmailAddressesResponse>> {
        let path = format!("/email-addresses{}", build_query_string(params));
        self.client.get(&path).await
    }

    pub async fn get(&self, id: &str) -> Result<ApiResponse<GetEmailAddressByIdResponse>> {
        self.client
            .get(&format!("/email-addresses/{}", segment(id)))
            .await
    }

    /// Change routing or activation of an address.
    pub async fn update(
        &self,
        id: &str,
        params: &PutEmailAddressByIdRequest,
    ) -> Result<ApiResponse<PutEmailAddressByIdResponse>> {
        let path = format!("/email-addresses/{}", segment(id));
        self.client
            .send_json(Method::PUT, &path, params, None)
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<ApiResponse<DeleteEmailAddressByIdResponse>> {
        self.client
            .send_empty(Method::DELETE, &format!("/email-addresses/{}", segment(id)))
            .await
    }
}
