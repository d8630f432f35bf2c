use actix_web::HttpResponse;
use serde::{ser, Serialize};
use serde_json::ser::PrettyFormatter;

use crate::common::EventResponse;
use crate::error::HandlerError;

const INDENT: &[u8] = b" ";

pub fn write_event_response(response: EventResponse) -> Result<HttpResponse, HandlerError> {
    match response {
        EventResponse::Empty => Ok(HttpResponse::Ok().finish()),
        EventResponse::Indented(r) => serialize_and_write(to_indented_json(&r)),
        EventResponse::Compact(r) => serialize_and_write(serde_json::to_vec(&r)),
    }
}

fn to_indented_json<T: Serialize>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut serializer)?;
    let json = String::from_utf8(buf).map_err(<serde_json::Error as ser::Error>::custom)?;
    Ok(escape_html(&json).into_bytes())
}

// These characters only ever occur inside JSON strings, so escaping them in
// the finished document is safe.
fn escape_html(json: &str) -> String {
    let mut escaped = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => escaped.push_str("\\u003c"),
            '>' => escaped.push_str("\\u003e"),
            '&' => escaped.push_str("\\u0026"),
            '\u{2028}' => escaped.push_str("\\u2028"),
            '\u{2029}' => escaped.push_str("\\u2029"),
            c => escaped.push(c),
        }
    }
    escaped
}

fn serialize_and_write(body: Result<Vec<u8>, serde_json::Error>) -> Result<HttpResponse, HandlerError> {
    body.map(|j| HttpResponse::Ok().body(j))
        .map_err(HandlerError::Encode)
}
