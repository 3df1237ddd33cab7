//! The outbound response abstraction.
//!
//! A [`ResponseSink`] represents a single HTTP response instance: it accepts
//! header name/value pairs, is started exactly once with a status code and a
//! [`PayloadSize`] hint, and then yields a single-use writable body channel.
//! The channel is closed by dropping it, so releasing the body on every exit
//! path falls out of normal scoping.
//!
//! Any standard HTTP server response object satisfies this capability set;
//! [`BufferSink`] is an in-memory implementation used in tests and examples.

use crate::protocol::PayloadSize;
use bytes::{BufMut, Bytes, BytesMut};
use std::cell::{Cell, RefCell};
use std::io;
use std::rc::Rc;

/// A single outbound HTTP response.
///
/// Implementations must not be reused: after the body channel has been
/// obtained and dropped, the response is complete and starting it again is
/// invalid.
pub trait ResponseSink {
    /// The single-use writable body channel. Dropping it closes the body.
    type BodyChannel: io::Write;

    /// Adds a header name/value pair to the response.
    fn insert_header(&mut self, name: &str, value: &str);

    /// Starts the response with the given status code and payload size hint.
    ///
    /// The status code is passed through unvalidated.
    fn start(&mut self, status: u16, payload_size: PayloadSize) -> io::Result<()>;

    /// Obtains the writable body channel. Must be called at most once,
    /// after [`start`](ResponseSink::start).
    fn body_channel(&mut self) -> io::Result<Self::BodyChannel>;
}

/// An in-memory [`ResponseSink`] that records everything it is sent.
///
/// Useful for tests and examples; the body accumulates into a [`BytesMut`]
/// and the number of times the body channel has been closed is tracked so
/// the close-exactly-once discipline can be asserted.
#[derive(Debug, Default)]
pub struct BufferSink {
    headers: Vec<(String, String)>,
    head: Option<(u16, PayloadSize)>,
    body: Rc<RefCell<BytesMut>>,
    closed: Rc<Cell<usize>>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All headers in insertion order.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// First value of the named header, matched case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.iter().find(|(n, _)| n.eq_ignore_ascii_case(name)).map(|(_, v)| v.as_str())
    }

    /// Status code the response was started with, if started.
    pub fn status(&self) -> Option<u16> {
        self.head.map(|(status, _)| status)
    }

    /// Payload size hint the response was started with, if started.
    pub fn payload_size(&self) -> Option<PayloadSize> {
        self.head.map(|(_, payload_size)| payload_size)
    }

    /// Everything written to the body channel so far.
    pub fn body(&self) -> Bytes {
        self.body.borrow().clone().freeze()
    }

    /// How many times a body channel of this sink has been closed.
    pub fn close_count(&self) -> usize {
        self.closed.get()
    }
}

impl ResponseSink for BufferSink {
    type BodyChannel = BufferChannel;

    fn insert_header(&mut self, name: &str, value: &str) {
        self.headers.push((name.to_owned(), value.to_owned()));
    }

    fn start(&mut self, status: u16, payload_size: PayloadSize) -> io::Result<()> {
        self.head = Some((status, payload_size));
        Ok(())
    }

    fn body_channel(&mut self) -> io::Result<Self::BodyChannel> {
        Ok(BufferChannel { buffer: Rc::clone(&self.body), closed: Rc::clone(&self.closed) })
    }
}

/// Body channel of a [`BufferSink`]; counts its own close on drop.
#[derive(Debug)]
pub struct BufferChannel {
    buffer: Rc<RefCell<BytesMut>>,
    closed: Rc<Cell<usize>>,
}

impl io::Write for BufferChannel {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.borrow_mut().put_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for BufferChannel {
    fn drop(&mut self) {
        self.closed.set(self.closed.get() + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn buffer_sink_records_one_response() {
        let mut sink = BufferSink::new();
        sink.insert_header("Content-Type", "text/plain");
        sink.start(200, PayloadSize::Chunked).expect("start");

        {
            let mut channel = sink.body_channel().expect("body channel");
            channel.write_all(b"hello").expect("write body");
        }

        assert_eq!(sink.header("content-type"), Some("text/plain"));
        assert_eq!(sink.status(), Some(200));
        assert!(sink.payload_size().expect("payload size").is_chunked());
        assert_eq!(&sink.body()[..], b"hello");
        assert_eq!(sink.close_count(), 1);
    }

    #[test]
    fn channel_close_is_counted_without_writes() {
        let mut sink = BufferSink::new();
        sink.start(204, PayloadSize::Empty).expect("start");

        let channel = sink.body_channel().expect("body channel");
        drop(channel);

        assert_eq!(sink.close_count(), 1);
        assert!(sink.body().is_empty());
    }
}
