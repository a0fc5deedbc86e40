//! Typed request and response bodies, grouped by resource.

mod common;
mod domain;
mod email;
mod email_address;
mod endpoint;
mod mail;
mod thread;

pub use common::{AttachmentData, EmailTag, IdempotencyOptions, Pagination, Recipients};
pub use domain::{
    CatchAllEndpoint, DnsRecord, DomainStats, DomainWithStats, DomainsMeta,
    GetDomainByIdResponse, GetDomainsRequest, GetDomainsResponse, PostDomainsRequest,
    PostDomainsResponse, PutDomainByIdRequest, PutDomainByIdResponse, VerificationCheck,
};
pub use email::{
    DeleteScheduledEmailResponse, GetEmailByIdResponse, GetScheduledEmailResponse,
    GetScheduledEmailsRequest, GetScheduledEmailsResponse, LastEvent, PostEmailReplyRequest,
    PostEmailReplyResponse, PostEmailsRequest, PostEmailsResponse, PostScheduleEmailRequest,
    PostScheduleEmailResponse, ScheduledEmailItem,
};
pub use email_address::{
    DeleteEmailAddressByIdResponse, DomainInfo, EmailAddressCleanup, EmailAddressWithDomain,
    GetEmailAddressByIdResponse, GetEmailAddressesRequest, GetEmailAddressesResponse,
    PostEmailAddressesRequest, PostEmailAddressesResponse, PutEmailAddressByIdRequest,
    PutEmailAddressByIdResponse, RoutingInfo,
};
pub use endpoint::{
    DeleteEndpointByIdResponse, DeliveryStats, EmailConfig, EmailGroupConfig, EndpointCleanup,
    EndpointConfig, EndpointType, EndpointWithStats, GetEndpointByIdResponse,
    GetEndpointsRequest, GetEndpointsResponse, PostEndpointsRequest, PostEndpointsResponse,
    PutEndpointByIdRequest, PutEndpointByIdResponse, WebhookConfig,
};
pub(crate) use mail::BulkMailRequest;
pub use mail::{
    EmailItem, GetMailByIdResponse, GetMailRequest, GetMailResponse, MailStatus, MailUpdates,
    PostMailRequest, PostMailResponse, TimeRange,
};
pub use thread::{
    GetThreadByIdResponse, GetThreadStatsResponse, GetThreadsFilters, GetThreadsRequest,
    GetThreadsResponse, MostActiveThread, PostThreadActionsRequest, PostThreadActionsResponse,
    ThreadAction, ThreadAttachment, ThreadDistribution, ThreadLatestMessage, ThreadMessage,
    ThreadMetadata, ThreadRecentActivity, ThreadSummary, ThreadUnreadStats,
};

use reqwest::header::HeaderMap;

/// Raw attachment bytes with the headers the server sent alongside them.
#[derive(Debug, Clone)]
pub struct AttachmentDownload {
    pub data: Vec<u8>,
    pub headers: HeaderMap,
}

impl AttachmentDownload {
    /// The `Content-Type` header, if present and valid UTF-8.
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
    }
}

/// Result of [`Client::setup_domain`](crate::Client::setup_domain).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DomainSetup {
    pub domain: PostDomainsResponse,
    /// Webhook endpoint created for the domain, when a URL was given.
    pub endpoint: Option<PostEndpointsResponse>,
    /// Why the webhook endpoint could not be created.
    pub endpoint_error: Option<String>,
}
