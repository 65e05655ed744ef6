use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use serde_json::Value;
use url::form_urlencoded;

use crate::domain::{ResponseFormat, ResponsePayload};

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid XML response: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("truncated XML response")]
    TruncatedXml,

    #[error("expected a key/value mapping, got {got}")]
    NotAMapping { got: &'static str },
}

/// Decode a raw response body into the generic payload mapping, per the
/// configured wire format.
pub fn decode_payload(format: ResponseFormat, raw: &str) -> Result<ResponsePayload, DecodeError> {
    match format {
        ResponseFormat::StringForm => Ok(decode_form(raw)),
        ResponseFormat::Json => decode_json(raw),
        ResponseFormat::Xml => decode_xml(raw),
    }
}

fn decode_form(raw: &str) -> ResponsePayload {
    let mut payload = ResponsePayload::new();
    for (key, value) in form_urlencoded::parse(raw.trim().as_bytes()) {
        // Later duplicates win, like a naive key=value scan would.
        payload.insert(key.into_owned(), Value::String(value.into_owned()));
    }
    payload
}

fn decode_json(raw: &str) -> Result<ResponsePayload, DecodeError> {
    let value: Value = serde_json::from_str(raw)?;
    match value {
        Value::Object(map) => Ok(map),
        other => Err(DecodeError::NotAMapping {
            got: json_kind(&other),
        }),
    }
}

/// Normalize an XML document into the same mapping shape as JSON: the root's
/// child element names become keys, text-only elements become strings,
/// repeated sibling names become sequences.
fn decode_xml(raw: &str) -> Result<ResponsePayload, DecodeError> {
    let mut reader = Reader::from_str(raw);
    reader.config_mut().trim_text(true);

    loop {
        match reader.read_event()? {
            Event::Start(_) => {
                return match read_element(&mut reader)? {
                    Value::Object(map) => Ok(map),
                    _ => Err(DecodeError::NotAMapping { got: "a text-only element" }),
                };
            }
            Event::Empty(_) => return Ok(ResponsePayload::new()),
            Event::Eof => return Err(DecodeError::TruncatedXml),
            // Declarations, comments, processing instructions.
            _ => {}
        }
    }
}

fn read_element(reader: &mut Reader<&[u8]>) -> Result<Value, DecodeError> {
    let mut children = ResponsePayload::new();
    let mut text = String::new();

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                let name = element_name(&start);
                let child = read_element(reader)?;
                insert_child(&mut children, name, child);
            }
            Event::Empty(start) => {
                let name = element_name(&start);
                insert_child(&mut children, name, Value::String(String::new()));
            }
            Event::Text(t) => text.push_str(&t.unescape()?),
            Event::CData(c) => text.push_str(&String::from_utf8_lossy(&c.into_inner())),
            Event::End(_) => break,
            Event::Eof => return Err(DecodeError::TruncatedXml),
            _ => {}
        }
    }

    if children.is_empty() {
        Ok(Value::String(text))
    } else {
        // Mixed content: the element shape wins, stray text is dropped.
        Ok(Value::Object(children))
    }
}

fn element_name(start: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(start.local_name().as_ref()).into_owned()
}

fn insert_child(children: &mut ResponsePayload, name: String, child: Value) {
    match children.get_mut(&name) {
        Some(Value::Array(items)) => items.push(child),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, child]);
        }
        None => {
            children.insert(name, child);
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
