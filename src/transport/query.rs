use url::Url;

use crate::domain::{
    ApiKey, CallbackIp, CallbackSpec, CallbackUrl, MessageText, PhoneNumber, Reference,
    ResponseFormat, SendSms, SenderId,
};

pub fn encode_send_sms_params(request: &SendSms) -> Vec<(String, String)> {
    let mut params = Vec::<(String, String)>::new();
    params.push((
        PhoneNumber::FIELD.to_owned(),
        request.number().as_str().to_owned(),
    ));
    params.push((
        MessageText::FIELD.to_owned(),
        request.message().as_str().to_owned(),
    ));

    let options = request.options();
    if let Some(sender) = options.sender.as_ref() {
        params.push((SenderId::FIELD.to_owned(), sender.as_str().to_owned()));
    }
    if let Some(reference) = options.reference.as_ref() {
        params.push((Reference::FIELD.to_owned(), reference.as_str().to_owned()));
    }
    if let Some(callback) = options.callback.as_ref() {
        params.push((CallbackSpec::FIELD.to_owned(), callback.as_str().to_owned()));
    }
    if let Some(callback_url) = options.callback_url.as_ref() {
        params.push((
            CallbackUrl::FIELD.to_owned(),
            callback_url.as_str().to_owned(),
        ));
    }

    params
}

pub fn encode_balance_params() -> Vec<(String, String)> {
    vec![("method".to_owned(), "balance".to_owned())]
}

pub fn encode_set_ip_params(ip: &CallbackIp) -> Vec<(String, String)> {
    vec![
        ("method".to_owned(), "setip".to_owned()),
        (CallbackIp::FIELD.to_owned(), ip.to_string()),
    ]
}

/// Append the fixed and per-operation parameters to the endpoint as a
/// URL-encoded query string.
///
/// Parameter order is what the gateway has always seen: `key` first, then the
/// operation's fields, then `format` and `apiVersion`.
pub fn build_request_url(
    endpoint: &Url,
    key: &ApiKey,
    format: ResponseFormat,
    api_version: &str,
    params: &[(String, String)],
) -> Url {
    let mut url = endpoint.clone();
    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair(ApiKey::FIELD, key.as_str());
        for (name, value) in params {
            pairs.append_pair(name, value);
        }
        pairs.append_pair(ResponseFormat::FIELD, format.as_str());
        pairs.append_pair("apiVersion", api_version);
    }
    url
}
