//! Resource services. Each method maps to one REST endpoint and returns the
//! `{ data, error }` envelope.

mod attachment;
mod domain;
mod email;
mod email_address;
mod endpoint;
mod mail;
mod thread;

pub use attachment::AttachmentService;
pub use domain::DomainService;
pub use email::EmailService;
pub use email_address::EmailAddressService;
pub use endpoint::EndpointService;
pub use mail::MailService;
pub use thread::ThreadService;
