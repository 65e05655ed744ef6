//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use url::Url;

use crate::domain::{
    ApiKey, CallbackIp, ResponseFormat, ResponsePayload, SendSms, ValidationError, field_as_string,
};
use crate::transport;

/// Production gateway endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://seeme.hu/gateway";

/// Gateway protocol version sent as `apiVersion` with every request.
pub const API_VERSION: &str = "2.0.1";

type BoxError = Box<dyn StdError + Send + Sync>;

#[derive(Debug, Clone)]
/// Raw result of one transport exchange.
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Injected transport capability: fetch the bytes behind a request URL.
///
/// The client performs exactly one blocking `get` per operation and imposes
/// no timeout of its own; implementations may.
pub trait HttpTransport: Send + Sync {
    fn get(&self, url: &Url) -> Result<HttpResponse, BoxError>;
}

#[derive(Debug, Clone)]
/// Minimal reference transport: a single GET, no redirect following.
pub struct UrlFetchTransport {
    client: reqwest::blocking::Client,
}

impl UrlFetchTransport {
    pub fn new() -> Result<Self, SeeMeError> {
        let client = reqwest::blocking::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|err| SeeMeError::Transport(Box::new(err)))?;
        Ok(Self { client })
    }
}

impl HttpTransport for UrlFetchTransport {
    fn get(&self, url: &Url) -> Result<HttpResponse, BoxError> {
        let response = self.client.get(url.as_str()).send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        Ok(HttpResponse { status, body })
    }
}

#[derive(Debug, Clone)]
/// Full reference transport: follows redirects (up to 10) and supports an
/// optional timeout and user-agent override.
pub struct HttpClientTransport {
    client: reqwest::blocking::Client,
}

impl HttpClientTransport {
    pub fn new() -> Result<Self, SeeMeError> {
        Self::with_settings(None, None)
    }

    fn with_settings(
        timeout: Option<Duration>,
        user_agent: Option<String>,
    ) -> Result<Self, SeeMeError> {
        let mut builder =
            reqwest::blocking::Client::builder().redirect(reqwest::redirect::Policy::limited(10));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = user_agent {
            builder = builder.user_agent(user_agent);
        }
        let client = builder
            .build()
            .map_err(|err| SeeMeError::Transport(Box::new(err)))?;
        Ok(Self { client })
    }
}

impl HttpTransport for HttpClientTransport {
    fn get(&self, url: &Url) -> Result<HttpResponse, BoxError> {
        let response = self.client.get(url.as_str()).send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        Ok(HttpResponse { status, body })
    }
}

/// Injected tracing capability. Write failures are fatal to the triggering
/// operation, never swallowed.
pub trait LogSink: Send + Sync {
    fn write_line(&self, line: &str) -> std::io::Result<()>;
}

#[derive(Debug, Clone)]
/// Appends timestamped entries to a log file, opening it per write so the
/// destination can be rotated out from under a long-lived client.
pub struct FileLog {
    path: PathBuf,
}

impl FileLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LogSink for FileLog {
    fn write_line(&self, line: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{} - {line}", Local::now().format("%Y-%m-%d %H:%M:%S"))
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`SeeMeClient`].
pub enum SeeMeError {
    /// A caller-supplied parameter failed local validation; nothing was sent.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The API key failed its checksum check at construction.
    #[error("invalid API key: {0}")]
    Credential(#[source] ValidationError),

    /// HTTP client / transport failure (DNS, TLS, connect errors, etc).
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// Non-successful HTTP status code returned by the server.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// Response body could not be decoded in the configured format.
    #[error("response decode error: {0}")]
    Decode(#[source] BoxError),

    /// The gateway explicitly reported an error (`result == "ERR"`).
    #[error("gateway error {code}: {message}")]
    Gateway { message: String, code: String },

    /// The gateway answered with a `result` discriminant this client does not
    /// know. Carries the raw payload for diagnosis.
    #[error("unrecognized gateway result (code {code:?}, message {message:?}): {raw}")]
    Unrecognized {
        code: Option<String>,
        message: Option<String>,
        raw: String,
    },

    /// The configured endpoint override is not a valid URL.
    #[error("invalid endpoint URL: {0}")]
    Endpoint(#[from] url::ParseError),

    /// The log sink could not be written to.
    #[error("log write failed: {0}")]
    Log(#[from] std::io::Error),
}

/// Builder for [`SeeMeClient`].
///
/// Use this to set a log destination, override the endpoint or response
/// format, or inject a custom transport. Unless a custom transport is given,
/// `build` creates an [`HttpClientTransport`] with the configured timeout and
/// user-agent.
pub struct SeeMeClientBuilder {
    key: ApiKey,
    endpoint: String,
    format: ResponseFormat,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    log_destination: Option<PathBuf>,
    log: Option<Box<dyn LogSink>>,
    http: Option<Arc<dyn HttpTransport>>,
}

impl SeeMeClientBuilder {
    fn new(key: ApiKey) -> Self {
        Self {
            key,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            format: ResponseFormat::default(),
            timeout: None,
            user_agent: None,
            log_destination: None,
            log: None,
            http: None,
        }
    }

    /// Override the gateway endpoint URL.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Response wire format to request (`string`, `json`, or `xml`).
    pub fn format(mut self, format: ResponseFormat) -> Self {
        self.format = format;
        self
    }

    /// Set a timeout on the default transport.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header of the default transport.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Append request/response traces to the file at `path`.
    pub fn log_destination(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_destination = Some(path.into());
        self
    }

    /// Send request/response traces to a custom sink instead of a file.
    pub fn log_sink(mut self, sink: Box<dyn LogSink>) -> Self {
        self.log = Some(sink);
        self
    }

    /// Inject a custom transport; `timeout` and `user_agent` are ignored.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.http = Some(transport);
        self
    }

    /// Build a [`SeeMeClient`].
    pub fn build(self) -> Result<SeeMeClient, SeeMeError> {
        let endpoint = Url::parse(&self.endpoint)?;
        let http = match self.http {
            Some(http) => http,
            None => Arc::new(HttpClientTransport::with_settings(
                self.timeout,
                self.user_agent,
            )?),
        };
        let log = match self.log {
            Some(sink) => Some(sink),
            None => self
                .log_destination
                .map(|path| Box::new(FileLog::new(path)) as Box<dyn LogSink>),
        };

        Ok(SeeMeClient {
            key: self.key,
            endpoint,
            format: self.format,
            http,
            log,
            last_result: None,
        })
    }
}

/// High-level SeeMe gateway client.
///
/// Each operation validates its inputs locally, performs one blocking GET
/// against the gateway, decodes the response in the configured format, and
/// either returns the decoded mapping (`result == "OK"`) or a typed error.
///
/// The client keeps the most recently decoded payload as instance state
/// ([`SeeMeClient::last_result`]). Operations take `&mut self`; a client
/// instance is meant to be used from one thread at a time.
pub struct SeeMeClient {
    key: ApiKey,
    endpoint: Url,
    format: ResponseFormat,
    http: Arc<dyn HttpTransport>,
    log: Option<Box<dyn LogSink>>,
    last_result: Option<ResponsePayload>,
}

impl std::fmt::Debug for SeeMeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeeMeClient")
            .field("key", &self.key)
            .field("endpoint", &self.endpoint)
            .field("format", &self.format)
            .field("last_result", &self.last_result)
            .finish_non_exhaustive()
    }
}

impl SeeMeClient {
    /// Create a client with the default endpoint, JSON responses, and the
    /// [`UrlFetchTransport`].
    ///
    /// Fails with [`SeeMeError::Credential`] when the key's embedded checksum
    /// does not verify.
    pub fn new(api_key: impl Into<String>) -> Result<Self, SeeMeError> {
        let key = ApiKey::new(api_key).map_err(SeeMeError::Credential)?;
        Ok(Self {
            key,
            endpoint: Url::parse(DEFAULT_ENDPOINT)?,
            format: ResponseFormat::default(),
            http: Arc::new(UrlFetchTransport::new()?),
            log: None,
            last_result: None,
        })
    }

    /// Create a client that traces requests and responses to a log file.
    pub fn with_log(
        api_key: impl Into<String>,
        destination: impl Into<PathBuf>,
    ) -> Result<Self, SeeMeError> {
        Ok(Self {
            log: Some(Box::new(FileLog::new(destination))),
            ..Self::new(api_key)?
        })
    }

    /// Start building a client with custom settings.
    pub fn builder(api_key: impl Into<String>) -> Result<SeeMeClientBuilder, SeeMeError> {
        let key = ApiKey::new(api_key).map_err(SeeMeError::Credential)?;
        Ok(SeeMeClientBuilder::new(key))
    }

    /// Submit an SMS.
    ///
    /// Returns the decoded gateway response on `result == "OK"`; maps
    /// `result == "ERR"` to [`SeeMeError::Gateway`] with the gateway's
    /// message and code verbatim.
    pub fn send_sms(&mut self, request: SendSms) -> Result<ResponsePayload, SeeMeError> {
        let params = transport::encode_send_sms_params(&request);
        self.call(&params)
    }

    /// Query the account balance.
    pub fn get_balance(&mut self) -> Result<ResponsePayload, SeeMeError> {
        let params = transport::encode_balance_params();
        self.call(&params)
    }

    /// Register the IP address delivery callbacks will originate from.
    pub fn set_callback_ip(&mut self, ip: CallbackIp) -> Result<ResponsePayload, SeeMeError> {
        let params = transport::encode_set_ip_params(&ip);
        self.call(&params)
    }

    /// The most recently decoded response payload, if any call has got far
    /// enough to decode one. Retained even when the call then surfaced a
    /// gateway error.
    pub fn last_result(&self) -> Option<&ResponsePayload> {
        self.last_result.as_ref()
    }

    fn call(&mut self, params: &[(String, String)]) -> Result<ResponsePayload, SeeMeError> {
        let url = transport::build_request_url(
            &self.endpoint,
            &self.key,
            self.format,
            API_VERSION,
            params,
        );

        self.log_line("----------------------------")?;
        self.log_line(&format!("GET: {url}"))?;

        let response = self.http.get(&url).map_err(SeeMeError::Transport)?;
        if !(200..=299).contains(&response.status) {
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(SeeMeError::HttpStatus {
                status: response.status,
                body,
            });
        }

        let payload = transport::decode_payload(self.format, &response.body)
            .map_err(|err| SeeMeError::Decode(Box::new(err)))?;
        self.last_result = Some(payload.clone());
        self.log_payload(&payload)?;

        dispatch(payload, &response.body)
    }

    fn log_line(&self, line: &str) -> Result<(), SeeMeError> {
        if let Some(log) = self.log.as_ref() {
            log.write_line(line)?;
        }
        Ok(())
    }

    fn log_payload(&self, payload: &ResponsePayload) -> Result<(), SeeMeError> {
        if self.log.is_none() {
            return Ok(());
        }
        for (key, value) in payload {
            let rendered = match value {
                serde_json::Value::String(text) => text.clone(),
                other => other.to_string(),
            };
            self.log_line(&format!("{key} => {rendered}"))?;
        }
        Ok(())
    }
}

/// Route a decoded payload on its `result` discriminant.
fn dispatch(payload: ResponsePayload, raw: &str) -> Result<ResponsePayload, SeeMeError> {
    match payload.get("result").and_then(serde_json::Value::as_str) {
        Some("OK") => Ok(payload),
        // Missing message/code on an ERR payload degrade to empty strings.
        Some("ERR") => Err(SeeMeError::Gateway {
            message: field_as_string(&payload, "message").unwrap_or_default(),
            code: field_as_string(&payload, "code").unwrap_or_default(),
        }),
        _ => Err(SeeMeError::Unrecognized {
            code: field_as_string(&payload, "code"),
            message: field_as_string(&payload, "message"),
            raw: raw.to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use serde_json::json;

    use crate::domain::{CallbackSpec, MessageText, PhoneNumber, SendOptions, SenderId};

    use super::*;

    // md5("test") = 098f6bcd..., so "test098f" carries a valid checksum.
    const VALID_KEY: &str = "test098f";

    #[derive(Clone)]
    struct FakeTransport {
        state: Arc<Mutex<FakeTransportState>>,
    }

    struct FakeTransportState {
        last_url: Option<Url>,
        response_status: u16,
        response_body: String,
    }

    impl FakeTransport {
        fn new(response_status: u16, response_body: impl Into<String>) -> Self {
            Self {
                state: Arc::new(Mutex::new(FakeTransportState {
                    last_url: None,
                    response_status,
                    response_body: response_body.into(),
                })),
            }
        }

        fn last_url(&self) -> Url {
            self.state.lock().unwrap().last_url.clone().unwrap()
        }

        fn last_query(&self) -> HashMap<String, String> {
            self.last_url()
                .query_pairs()
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect()
        }
    }

    impl HttpTransport for FakeTransport {
        fn get(&self, url: &Url) -> Result<HttpResponse, BoxError> {
            let mut state = self.state.lock().unwrap();
            state.last_url = Some(url.clone());
            Ok(HttpResponse {
                status: state.response_status,
                body: state.response_body.clone(),
            })
        }
    }

    fn make_client(format: ResponseFormat, transport: FakeTransport) -> SeeMeClient {
        SeeMeClient {
            key: ApiKey::new(VALID_KEY).unwrap(),
            endpoint: Url::parse("https://example.invalid/gateway").unwrap(),
            format,
            http: Arc::new(transport),
            log: None,
            last_result: None,
        }
    }

    fn send_request() -> SendSms {
        SendSms::new(
            PhoneNumber::new("36201234567").unwrap(),
            MessageText::new("hello").unwrap(),
        )
    }

    #[test]
    fn new_rejects_bad_checksum_and_accepts_valid_keys() {
        let err = SeeMeClient::new("definitely-not-valid").unwrap_err();
        assert!(matches!(err, SeeMeError::Credential(_)));

        let client = SeeMeClient::new(VALID_KEY).unwrap();
        assert!(client.last_result().is_none());
    }

    #[test]
    fn send_sms_builds_signed_url_and_returns_payload() {
        let transport = FakeTransport::new(200, r#"{"result":"OK","reference":"r-1"}"#);
        let mut client = make_client(ResponseFormat::Json, transport.clone());

        let payload = client.send_sms(send_request()).unwrap();
        assert_eq!(payload.get("result"), Some(&json!("OK")));
        assert_eq!(payload.get("reference"), Some(&json!("r-1")));

        let query = transport.last_query();
        assert_eq!(query.get("key").map(String::as_str), Some(VALID_KEY));
        assert_eq!(query.get("number").map(String::as_str), Some("36201234567"));
        assert_eq!(query.get("message").map(String::as_str), Some("hello"));
        assert_eq!(query.get("format").map(String::as_str), Some("json"));
        assert_eq!(query.get("apiVersion").map(String::as_str), Some("2.0.1"));
    }

    #[test]
    fn send_sms_forwards_optional_params() {
        let transport = FakeTransport::new(200, r#"{"result":"OK"}"#);
        let mut client = make_client(ResponseFormat::Json, transport.clone());

        let request = SendSms::with_options(
            PhoneNumber::new("36201234567").unwrap(),
            MessageText::new("hello").unwrap(),
            SendOptions {
                sender: Some(SenderId::new("Corp").unwrap()),
                reference: Some(crate::domain::Reference::from(7)),
                callback: Some(CallbackSpec::new("all").unwrap()),
                callback_url: Some(crate::domain::CallbackUrl::new("https://example.com/dlr").unwrap()),
            },
        );
        client.send_sms(request).unwrap();

        let query = transport.last_query();
        assert_eq!(query.get("sender").map(String::as_str), Some("Corp"));
        assert_eq!(query.get("reference").map(String::as_str), Some("7"));
        assert_eq!(
            query.get("callback").map(String::as_str),
            Some("1,2,3,4,5,6,7,8,9,10")
        );
        assert_eq!(
            query.get("callbackurl").map(String::as_str),
            Some("https://example.com/dlr")
        );
    }

    #[test]
    fn gateway_err_result_maps_to_gateway_error() {
        let body = r#"{"result":"ERR","message":"Insufficient balance","code":"9"}"#;
        let transport = FakeTransport::new(200, body);
        let mut client = make_client(ResponseFormat::Json, transport);

        let err = client.send_sms(send_request()).unwrap_err();
        match err {
            SeeMeError::Gateway { message, code } => {
                assert_eq!(message, "Insufficient balance");
                assert_eq!(code, "9");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn gateway_err_with_numeric_code_is_stringified() {
        let transport = FakeTransport::new(200, r#"{"result":"ERR","message":"no route","code":7}"#);
        let mut client = make_client(ResponseFormat::Json, transport);

        let err = client.send_sms(send_request()).unwrap_err();
        assert!(matches!(err, SeeMeError::Gateway { code, .. } if code == "7"));
    }

    #[test]
    fn gateway_err_tolerates_missing_message_and_code() {
        let transport = FakeTransport::new(200, r#"{"result":"ERR"}"#);
        let mut client = make_client(ResponseFormat::Json, transport);

        let err = client.send_sms(send_request()).unwrap_err();
        match err {
            SeeMeError::Gateway { message, code } => {
                assert_eq!(message, "");
                assert_eq!(code, "");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_result_discriminant_is_unrecognized() {
        let body = r#"{"status":"done"}"#;
        let transport = FakeTransport::new(200, body);
        let mut client = make_client(ResponseFormat::Json, transport);

        let err = client.get_balance().unwrap_err();
        match err {
            SeeMeError::Unrecognized { code, message, raw } => {
                assert_eq!(code, None);
                assert_eq!(message, None);
                assert_eq!(raw, body);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unknown_result_discriminant_is_unrecognized() {
        let transport =
            FakeTransport::new(200, r#"{"result":"MAYBE","message":"later","code":3}"#);
        let mut client = make_client(ResponseFormat::Json, transport);

        let err = client.get_balance().unwrap_err();
        match err {
            SeeMeError::Unrecognized { code, message, .. } => {
                assert_eq!(code.as_deref(), Some("3"));
                assert_eq!(message.as_deref(), Some("later"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_success_http_status_maps_to_http_status() {
        let transport = FakeTransport::new(500, "oops");
        let mut client = make_client(ResponseFormat::Json, transport);

        let err = client.get_balance().unwrap_err();
        assert!(matches!(
            err,
            SeeMeError::HttpStatus {
                status: 500,
                body: Some(_)
            }
        ));

        let transport = FakeTransport::new(503, "   ");
        let mut client = make_client(ResponseFormat::Json, transport);
        let err = client.get_balance().unwrap_err();
        assert!(matches!(
            err,
            SeeMeError::HttpStatus {
                status: 503,
                body: None
            }
        ));
    }

    #[test]
    fn get_balance_sets_method_param() {
        let transport = FakeTransport::new(200, r#"{"result":"OK","balance":"117"}"#);
        let mut client = make_client(ResponseFormat::Json, transport.clone());

        let payload = client.get_balance().unwrap();
        assert_eq!(payload.get("balance"), Some(&json!("117")));
        assert_eq!(
            transport.last_query().get("method").map(String::as_str),
            Some("balance")
        );
    }

    #[test]
    fn set_callback_ip_sets_method_and_ip_params() {
        let transport = FakeTransport::new(200, r#"{"result":"OK"}"#);
        let mut client = make_client(ResponseFormat::Json, transport.clone());

        client
            .set_callback_ip(CallbackIp::new("10.0.0.1").unwrap())
            .unwrap();

        let query = transport.last_query();
        assert_eq!(query.get("method").map(String::as_str), Some("setip"));
        assert_eq!(query.get("ip").map(String::as_str), Some("10.0.0.1"));
    }

    #[test]
    fn string_form_responses_are_decoded() {
        let transport = FakeTransport::new(200, "result=OK&balance=117");
        let mut client = make_client(ResponseFormat::StringForm, transport.clone());

        let payload = client.get_balance().unwrap();
        assert_eq!(payload.get("result"), Some(&json!("OK")));
        assert_eq!(payload.get("balance"), Some(&json!("117")));
        assert_eq!(
            transport.last_query().get("format").map(String::as_str),
            Some("string")
        );
    }

    #[test]
    fn xml_responses_are_decoded() {
        let body = "<response><result>OK</result><balance>117</balance></response>";
        let transport = FakeTransport::new(200, body);
        let mut client = make_client(ResponseFormat::Xml, transport.clone());

        let payload = client.get_balance().unwrap();
        assert_eq!(payload.get("result"), Some(&json!("OK")));
        assert_eq!(payload.get("balance"), Some(&json!("117")));
        assert_eq!(
            transport.last_query().get("format").map(String::as_str),
            Some("xml")
        );
    }

    #[test]
    fn undecodable_body_maps_to_decode_error() {
        let transport = FakeTransport::new(200, "{ not json }");
        let mut client = make_client(ResponseFormat::Json, transport);

        let err = client.get_balance().unwrap_err();
        assert!(matches!(err, SeeMeError::Decode(_)));
        assert!(client.last_result().is_none());
    }

    #[test]
    fn last_result_is_retained_even_after_gateway_error() {
        let transport = FakeTransport::new(200, r#"{"result":"ERR","message":"m","code":"1"}"#);
        let mut client = make_client(ResponseFormat::Json, transport);

        assert!(client.last_result().is_none());
        let _ = client.get_balance().unwrap_err();

        let last = client.last_result().unwrap();
        assert_eq!(last.get("result"), Some(&json!("ERR")));
        assert_eq!(last.get("code"), Some(&json!("1")));
    }

    #[test]
    fn builder_applies_endpoint_format_and_transport() {
        let transport = FakeTransport::new(200, "result=OK");
        let mut client = SeeMeClient::builder(VALID_KEY)
            .unwrap()
            .endpoint("https://example.invalid/gw")
            .format(ResponseFormat::StringForm)
            .transport(Arc::new(transport.clone()))
            .build()
            .unwrap();

        client.get_balance().unwrap();
        let url = transport.last_url();
        assert_eq!(url.host_str(), Some("example.invalid"));
        assert_eq!(url.path(), "/gw");
    }

    #[test]
    fn builder_rejects_invalid_endpoint() {
        let err = SeeMeClient::builder(VALID_KEY)
            .unwrap()
            .endpoint("not a url")
            .build()
            .unwrap_err();
        assert!(matches!(err, SeeMeError::Endpoint(_)));
    }

    #[test]
    fn file_log_receives_request_url_and_payload_entries() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("gateway.log");

        let transport = FakeTransport::new(200, r#"{"result":"OK","balance":"117"}"#);
        let mut client = SeeMeClient::builder(VALID_KEY)
            .unwrap()
            .endpoint("https://example.invalid/gateway")
            .log_destination(&log_path)
            .transport(Arc::new(transport))
            .build()
            .unwrap();

        client.get_balance().unwrap();

        let contents = std::fs::read_to_string(&log_path).unwrap();
        assert!(contents.contains("- ----------------------------"));
        assert!(contents.contains("- GET: https://example.invalid/gateway?key="));
        assert!(contents.contains("- result => OK"));
        assert!(contents.contains("- balance => 117"));
    }

    #[test]
    fn dispatch_is_case_sensitive_about_the_discriminant() {
        let transport = FakeTransport::new(200, r#"{"result":"ok"}"#);
        let mut client = make_client(ResponseFormat::Json, transport);
        let err = client.get_balance().unwrap_err();
        assert!(matches!(err, SeeMeError::Unrecognized { .. }));
    }
}
