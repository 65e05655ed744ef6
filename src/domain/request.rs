use crate::domain::value::{CallbackSpec, CallbackUrl, MessageText, PhoneNumber, Reference, SenderId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Wire format the gateway should answer in (`format`).
pub enum ResponseFormat {
    /// URL-encoded `key=value` pairs.
    StringForm,
    #[default]
    Json,
    Xml,
}

impl ResponseFormat {
    /// Query field name used by the gateway (`format`).
    pub const FIELD: &'static str = "format";

    /// Wire token for this format.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::StringForm => "string",
            Self::Json => "json",
            Self::Xml => "xml",
        }
    }
}

#[derive(Debug, Clone, Default)]
/// Optional parameters for [`SendSms`].
pub struct SendOptions {
    pub sender: Option<SenderId>,
    pub reference: Option<Reference>,
    pub callback: Option<CallbackSpec>,
    pub callback_url: Option<CallbackUrl>,
}

#[derive(Debug, Clone)]
/// A single-recipient SMS submission.
///
/// All fields are validated at construction of their value types, so a
/// `SendSms` can always be encoded into a well-formed request.
pub struct SendSms {
    number: PhoneNumber,
    message: MessageText,
    options: SendOptions,
}

impl SendSms {
    /// Create a request with default (empty) options.
    pub fn new(number: PhoneNumber, message: MessageText) -> Self {
        Self::with_options(number, message, SendOptions::default())
    }

    /// Create a request with explicit options.
    pub fn with_options(number: PhoneNumber, message: MessageText, options: SendOptions) -> Self {
        Self {
            number,
            message,
            options,
        }
    }

    pub fn number(&self) -> &PhoneNumber {
        &self.number
    }

    pub fn message(&self) -> &MessageText {
        &self.message
    }

    pub fn options(&self) -> &SendOptions {
        &self.options
    }
}
