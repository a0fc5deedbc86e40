#![allow(dead_code)]

use httpmock::MockServer;
use inbound_client::Client;

pub const API_KEY: &str = "test-api-key";
pub const BEARER: &str = "Bearer test-api-key";

pub fn client(server: &MockServer) -> Client {
    Client::builder(API_KEY)
        .base_url(server.base_url())
        .build()
        .expect("client builds")
}
