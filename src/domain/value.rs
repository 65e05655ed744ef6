use std::fmt;
use std::net::Ipv4Addr;

use md5::{Digest, Md5};

use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SeeMe API key (`key`).
///
/// Invariant: the last [`ApiKey::CHECKSUM_LEN`] characters equal the first
/// [`ApiKey::CHECKSUM_LEN`] hex characters of the MD5 digest of the rest of
/// the key. This lets the client reject mistyped keys without a network
/// round-trip.
pub struct ApiKey(String);

impl ApiKey {
    /// Query field name used by the gateway (`key`).
    pub const FIELD: &'static str = "key";

    /// Length of the embedded checksum suffix.
    pub const CHECKSUM_LEN: usize = 4;

    /// Create a validated [`ApiKey`]. The value is trimmed before the
    /// checksum check.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if !Self::checksum_matches(trimmed) {
            return Err(ValidationError::InvalidApiKey);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Check the embedded checksum of a key.
    ///
    /// Keys too short to carry a checksum are invalid, never a panic. The
    /// comparison is exact (lowercase hex, case-sensitive).
    pub fn checksum_matches(key: &str) -> bool {
        let Some(split) = key.len().checked_sub(Self::CHECKSUM_LEN) else {
            return false;
        };
        if !key.is_char_boundary(split) {
            return false;
        }
        let (body, checksum) = key.split_at(split);
        let digest = hex::encode(Md5::digest(body.as_bytes()));
        digest[..Self::CHECKSUM_LEN] == *checksum
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Recipient phone number in international format, digits only (`number`).
///
/// Invariant: non-empty after trimming and consists solely of ASCII digits.
/// A leading `+` is rejected; the gateway expects e.g. `36201234567`.
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Query field name used by the gateway (`number`).
    pub const FIELD: &'static str = "number";

    /// Create a validated [`PhoneNumber`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::NotNumeric { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated number.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS message text (`message`), UTF-8.
///
/// Invariant: non-empty after trimming. The trimmed form is what gets sent.
pub struct MessageText(String);

impl MessageText {
    /// Query field name used by the gateway (`message`).
    pub const FIELD: &'static str = "message";

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the message text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Sender ID shown to the recipient (`sender`).
///
/// Invariant: non-empty after trimming. The value must be enabled for your
/// gateway account.
pub struct SenderId(String);

impl SenderId {
    /// Query field name used by the gateway (`sender`).
    pub const FIELD: &'static str = "sender";

    /// Create a validated [`SenderId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated sender id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Caller-chosen reference echoed back in delivery reports (`reference`).
///
/// Invariant: non-empty after trimming. Numeric references are accepted via
/// `From<u64>`.
pub struct Reference(String);

impl Reference {
    /// Query field name used by the gateway (`reference`).
    pub const FIELD: &'static str = "reference";

    /// Create a validated [`Reference`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated reference.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for Reference {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Delivery-status event codes the gateway should notify on (`callback`).
///
/// Invariant: a comma-separated list of one-or-two-digit event codes, e.g.
/// `1,2,10`. The literal `all` expands to every event
/// ([`CallbackSpec::ALL_EVENTS`]).
pub struct CallbackSpec(String);

impl CallbackSpec {
    /// Query field name used by the gateway (`callback`).
    pub const FIELD: &'static str = "callback";

    /// Expansion of the `all` shorthand.
    pub const ALL_EVENTS: &'static str = "1,2,3,4,5,6,7,8,9,10";

    /// Subscribe to every delivery-status event.
    pub fn all() -> Self {
        Self(Self::ALL_EVENTS.to_owned())
    }

    /// Create a validated [`CallbackSpec`]. `all` is expanded to
    /// [`CallbackSpec::ALL_EVENTS`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed == "all" {
            return Ok(Self::all());
        }
        let well_formed = !trimmed.is_empty()
            && trimmed.split(',').all(|part| {
                (1..=2).contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
            });
        if !well_formed {
            return Err(ValidationError::InvalidCallbackSpec);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the expanded, validated event list.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// URL the gateway delivers status callbacks to (`callbackurl`).
///
/// Invariant: non-empty after trimming. The gateway validates reachability on
/// its side.
pub struct CallbackUrl(String);

impl CallbackUrl {
    /// Query field name used by the gateway (`callbackurl`).
    pub const FIELD: &'static str = "callbackurl";

    /// Create a validated [`CallbackUrl`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated URL.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// IPv4 address callbacks are accepted from (`ip`).
///
/// Parsing rejects anything that is not a leading-zero-free dotted quad with
/// octets in `0..=255`.
pub struct CallbackIp(Ipv4Addr);

impl CallbackIp {
    /// Query field name used by the gateway (`ip`).
    pub const FIELD: &'static str = "ip";

    /// Parse and validate a dotted-quad IPv4 address.
    pub fn new(value: &str) -> Result<Self, ValidationError> {
        value
            .trim()
            .parse::<Ipv4Addr>()
            .map(Self)
            .map_err(|_| ValidationError::InvalidIp)
    }

    /// The validated address.
    pub fn addr(self) -> Ipv4Addr {
        self.0
    }
}

impl From<Ipv4Addr> for CallbackIp {
    fn from(value: Ipv4Addr) -> Self {
        Self(value)
    }
}

impl fmt::Display for CallbackIp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
