//! Human-readable request/response dumps for logging.
//!
//! Pure formatting over already-validated in-memory data; no error
//! conditions. Bodies are bounded by [`left`], a character-counted
//! truncation primitive where `0` means unbounded and absence stays
//! absence.

use http::{HeaderMap, Method, Uri};

/// Renders a request as `METHOD URI`, one `Name: value` line per header
/// value (preserving header order and per-header value order), a blank
/// line, then the body truncated to `max_body_chars` characters
/// (`0` = unbounded). Lines are CRLF-separated.
pub fn format_request(
    method: &Method,
    uri: &Uri,
    headers: &HeaderMap,
    body: Option<&str>,
    max_body_chars: usize,
) -> String {
    let mut out = format!("{method} {uri}\r\n");

    for name in headers.keys() {
        for value in headers.get_all(name) {
            push_header_name(&mut out, name.as_str());
            out.push_str(": ");
            out.push_str(&String::from_utf8_lossy(value.as_bytes()));
            out.push_str("\r\n");
        }
    }

    out.push_str("\r\n");
    if let Some(body) = left(body, max_body_chars) {
        out.push_str(body);
    }
    out
}

/// Renders a response as the status code, CRLF, then the body truncated to
/// `max_body_chars` characters (`0` = unbounded).
pub fn format_response(status: u16, body: Option<&str>, max_body_chars: usize) -> String {
    let mut out = format!("{status}\r\n");
    if let Some(body) = left(body, max_body_chars) {
        out.push_str(body);
    }
    out
}

/// Returns at most the first `max_chars` characters of `text`, counted by
/// Unicode scalar value; a multi-byte sequence is never split. `0` means
/// unbounded, and `None` stays `None` (truncation applies to length, never
/// to presence).
pub fn left(text: Option<&str>, max_chars: usize) -> Option<&str> {
    let text = text?;
    if max_chars == 0 {
        return Some(text);
    }
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => Some(&text[..end]),
        None => Some(text),
    }
}

// `http` keeps header names lowercase; dumps use the conventional
// HTTP/1.x display casing (Host, Content-Type).
fn push_header_name(out: &mut String, name: &str) {
    let mut at_segment_start = true;
    for c in name.chars() {
        if at_segment_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_segment_start = c == '-';
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::header::{ACCEPT, HOST};
    use http::HeaderValue;

    #[test]
    fn request_renders_head_headers_and_truncated_body() {
        let mut headers = HeaderMap::new();
        headers.insert(HOST, HeaderValue::from_static("x"));

        let uri: Uri = "/a".parse().expect("uri");
        let dump = format_request(&Method::GET, &uri, &headers, Some("hello world"), 5);

        assert_eq!(dump, "GET /a\r\nHost: x\r\n\r\nhello");
    }

    #[test]
    fn multi_value_headers_render_one_line_per_value_in_order() {
        let mut headers = HeaderMap::new();
        headers.insert(HOST, HeaderValue::from_static("example.com"));
        headers.append(ACCEPT, HeaderValue::from_static("text/html"));
        headers.append(ACCEPT, HeaderValue::from_static("application/json"));

        let uri: Uri = "/".parse().expect("uri");
        let dump = format_request(&Method::POST, &uri, &headers, None, 0);

        assert_eq!(
            dump,
            "POST /\r\nHost: example.com\r\nAccept: text/html\r\nAccept: application/json\r\n\r\n"
        );
    }

    #[test]
    fn absent_body_renders_nothing_after_the_blank_line() {
        let headers = HeaderMap::new();
        let uri: Uri = "/ping".parse().expect("uri");
        let dump = format_request(&Method::GET, &uri, &headers, None, 5);

        assert_eq!(dump, "GET /ping\r\n\r\n");
    }

    #[test]
    fn response_renders_status_and_body() {
        assert_eq!(format_response(404, Some("not found"), 0), "404\r\nnot found");
        assert_eq!(format_response(500, None, 0), "500\r\n");
        assert_eq!(format_response(200, Some("hello world"), 5), "200\r\nhello");
    }

    #[test]
    fn left_takes_a_character_prefix() {
        assert_eq!(left(Some("hello world"), 5), Some("hello"));
        assert_eq!(left(Some("hi"), 5), Some("hi"));
        assert_eq!(left(Some(""), 5), Some(""));
    }

    #[test]
    fn left_zero_means_unbounded() {
        assert_eq!(left(Some("hello world"), 0), Some("hello world"));
    }

    #[test]
    fn left_preserves_absence() {
        assert_eq!(left(None, 5), None);
        assert_eq!(left(None, 0), None);
    }

    #[test]
    fn left_counts_characters_not_bytes() {
        assert_eq!(left(Some("héllo wörld"), 5), Some("héllo"));
        assert_eq!(left(Some("你好世界"), 2), Some("你好"));
    }
}
