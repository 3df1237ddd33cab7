//! Protocol-level abstractions shared by the response helpers.
//!
//! This module provides the vocabulary the rest of the crate is written in:
//!
//! - **Payload sizing** ([`payload`]): [`PayloadSize`] describes how the body
//!   of an outbound response will be transferred
//! - **Response sink** ([`sink`]): [`ResponseSink`] abstracts over "a thing
//!   that can be sent exactly one HTTP response", [`BufferSink`] is an
//!   in-memory implementation for tests and examples
//! - **Error handling** ([`error`]): [`HttpError`] as the top-level error
//!   type over [`ParseError`] (codec failures) and [`SendError`] (response
//!   write failures)
//!
//! Everything here is transient: values are constructed and consumed within
//! a single response-write or format call, nothing persists across calls.

mod payload;
pub use payload::PayloadSize;

mod error;
pub use error::HttpError;
pub use error::ParseError;
pub use error::SendError;

mod sink;
pub use sink::BufferChannel;
pub use sink::BufferSink;
pub use sink::ResponseSink;
