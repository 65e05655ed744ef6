//! Typed Rust client for the SeeMe SMS gateway HTTP API.
//!
//! The design is a domain layer of strong types, a transport layer for
//! wire-format quirks (query encoding, JSON/XML/form-encoded decoding), and a
//! small client layer orchestrating requests. API keys carry an embedded MD5
//! checksum which is verified locally at construction, so a mistyped key
//! fails before the first network call.
//!
//! ```rust,no_run
//! use seeme::{MessageText, PhoneNumber, SeeMeClient, SendSms};
//!
//! fn main() -> Result<(), seeme::SeeMeError> {
//!     let mut client = SeeMeClient::new("your-api-key-with-checksum")?;
//!     let request = SendSms::new(
//!         PhoneNumber::new("36201234567")?,
//!         MessageText::new("hello")?,
//!     );
//!     let response = client.send_sms(request)?;
//!     println!("{response:?}");
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    API_VERSION, DEFAULT_ENDPOINT, FileLog, HttpClientTransport, HttpResponse, HttpTransport,
    LogSink, SeeMeClient, SeeMeClientBuilder, SeeMeError, UrlFetchTransport,
};
pub use domain::{
    ApiKey, CallbackIp, CallbackSpec, CallbackUrl, MessageText, PhoneNumber, Reference,
    ResponseFormat, ResponsePayload, SendOptions, SendSms, SenderId, ValidationError,
};
