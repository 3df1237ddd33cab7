//! Response writing with content-type/charset negotiation.
//!
//! This module provides [`write_response`], which sends exactly one
//! well-formed HTTP response through a [`ResponseSink`], plus conveniences
//! built on it for plain-text and JSON bodies.
//!
//! The charset rule: when the caller supplies a textual body and the
//! content-type does not already carry a `charset=` parameter, the helper
//! appends one derived from the encoding actually used to serialize the
//! body. The declared charset and the actual byte encoding therefore never
//! diverge. Raw byte bodies are written as-is, with no charset logic.
//!
//! The body length is not pre-computed, so the sink is always started with
//! [`PayloadSize::Chunked`]. The body channel is released on every exit
//! path, including encode and write failures.

use crate::json;
use crate::protocol::{PayloadSize, ResponseSink, SendError};
use encoding_rs::{Encoding, UTF_8};
use http::header;
use serde::Serialize;
use std::borrow::Cow;
use std::io::Write;
use tracing::error;

pub const STATUS_OK: u16 = 200;
pub const STATUS_MOVED_PERMANENTLY: u16 = 301;
pub const STATUS_FOUND: u16 = 302;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_FORBIDDEN: u16 = 403;
pub const STATUS_NOT_FOUND: u16 = 404;
pub const STATUS_SERVER_ERROR: u16 = 500;

pub const CONTENT_TYPE_JSON_UTF8: &str = "application/json; charset=UTF-8";
pub const CONTENT_TYPE_OCTET_STREAM: &str = "application/octet-stream";

/// The body of an outbound response: raw bytes, or text with a charset.
#[derive(Debug, Clone, Copy)]
pub struct Body<'a>(BodyKind<'a>);

#[derive(Debug, Clone, Copy)]
enum BodyKind<'a> {
    Raw(&'a [u8]),
    Text { text: &'a str, charset: &'static Encoding },
}

impl<'a> Body<'a> {
    /// A raw byte body, written as-is.
    pub fn raw(bytes: &'a [u8]) -> Self {
        Self(BodyKind::Raw(bytes))
    }

    /// A text body encoded as UTF-8.
    pub fn text(text: &'a str) -> Self {
        Self::text_with_charset(text, UTF_8)
    }

    /// A text body encoded with the given charset.
    pub fn text_with_charset(text: &'a str, charset: &'static Encoding) -> Self {
        Self(BodyKind::Text { text, charset })
    }

    fn charset(&self) -> Option<&'static Encoding> {
        match self.0 {
            BodyKind::Raw(_) => None,
            BodyKind::Text { charset, .. } => Some(charset),
        }
    }

    fn encode(&self) -> Result<Cow<'a, [u8]>, SendError> {
        match self.0 {
            BodyKind::Raw(bytes) => Ok(Cow::Borrowed(bytes)),
            BodyKind::Text { text, charset } => {
                let (bytes, _, had_errors) = charset.encode(text);
                if had_errors {
                    error!(charset = charset.name(), "text body contains characters the charset cannot represent");
                    return Err(SendError::unencodable_body(format!("text body is not encodable as {}", charset.name())));
                }
                Ok(bytes)
            }
        }
    }
}

/// Writes one HTTP response to the sink.
///
/// The status code is passed through unvalidated (the `STATUS_*` constants
/// exist purely as caller convenience). The effective content-type follows
/// the charset-append rule described in the module docs and is set as the
/// single `Content-Type` value of the sink.
///
/// The sink's body channel is consumed exactly once; calling this twice on
/// the same sink is invalid per the single-response contract of
/// [`ResponseSink`].
///
/// # Errors
///
/// Fails with [`SendError::Io`] if the sink cannot accept headers or the
/// body write fails, and [`SendError::UnencodableBody`] if a text body
/// contains characters its charset cannot represent. Failures are propagated
/// unchanged; no retry, no recovery. The body channel is closed even then.
pub fn write_response<S: ResponseSink>(
    sink: &mut S,
    status: u16,
    content_type: &str,
    body: Body<'_>,
) -> Result<(), SendError> {
    sink.insert_header(header::CONTENT_TYPE.as_str(), &negotiate_content_type(content_type, body));
    sink.start(status, PayloadSize::Chunked)?;

    let mut channel = sink.body_channel()?;
    let result = body.encode().and_then(|bytes| channel.write_all(&bytes).map_err(SendError::io));
    drop(channel);
    result
}

/// Writes a `text/plain` response encoded as UTF-8.
pub fn write_plain_text<S: ResponseSink>(sink: &mut S, status: u16, text: &str) -> Result<(), SendError> {
    write_plain_text_with_charset(sink, status, text, UTF_8)
}

/// Writes a `text/plain` response encoded with the given charset.
pub fn write_plain_text_with_charset<S: ResponseSink>(
    sink: &mut S,
    status: u16,
    text: &str,
    charset: &'static Encoding,
) -> Result<(), SendError> {
    write_response(sink, status, mime::TEXT_PLAIN.as_ref(), Body::text_with_charset(text, charset))
}

/// Serializes `value` to JSON and writes it with status 200 and
/// content-type [`CONTENT_TYPE_JSON_UTF8`].
pub fn write_json<S: ResponseSink, T: Serialize + ?Sized>(sink: &mut S, value: &T) -> Result<(), SendError> {
    let json = json::serialize(value)?;
    write_response(sink, STATUS_OK, CONTENT_TYPE_JSON_UTF8, Body::text(&json))
}

fn negotiate_content_type<'a>(content_type: &'a str, body: Body<'_>) -> Cow<'a, str> {
    match body.charset() {
        Some(charset) if !content_type.contains("charset=") => {
            Cow::Owned(format!("{content_type};charset={}", charset.name()))
        }
        _ => Cow::Borrowed(content_type),
    }
}
