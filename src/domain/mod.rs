//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{ResponseFormat, SendOptions, SendSms};
pub use response::ResponsePayload;
pub(crate) use response::field_as_string;
pub use validation::ValidationError;
pub use value::{
    ApiKey, CallbackIp, CallbackSpec, CallbackUrl, MessageText, PhoneNumber, Reference, SenderId,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_rejects_bad_checksum() {
        assert!(matches!(
            ApiKey::new("not-a-real-key"),
            Err(ValidationError::InvalidApiKey)
        ));
    }

    #[test]
    fn phone_number_rejects_plus_prefix() {
        let err = PhoneNumber::new("+36201234567").unwrap_err();
        assert_eq!(err.code(), "2");
        assert_eq!(err.to_string(), "Only numbers are allowed: number");
    }

    #[test]
    fn callback_spec_all_matches_fixed_expansion() {
        assert_eq!(CallbackSpec::all().as_str(), CallbackSpec::ALL_EVENTS);
    }

    #[test]
    fn callback_ip_rejects_out_of_range_octet() {
        let err = CallbackIp::new("256.1.1.1").unwrap_err();
        assert_eq!(err.code(), "15");
    }
}
