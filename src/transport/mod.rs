//! Transport layer: wire-format details (query encoding, response decoding).

mod decode;
mod query;

pub use decode::{DecodeError, decode_payload};
pub use query::{
    build_request_url, encode_balance_params, encode_send_sms_params, encode_set_ip_params,
};
