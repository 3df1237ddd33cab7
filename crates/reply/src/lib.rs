//! HTTP response-writing and diagnostic-formatting helpers
//!
//! This crate provides a small set of reusable helper routines for HTTP
//! servers and clients: writing well-formed responses through a minimal
//! sink abstraction, converting between JSON text and generic mappings,
//! and rendering requests/responses as readable strings for logging.
//! It is not a server, a transport, or a routing framework — any
//! transport-layer component can call into it.
//!
//! # Features
//!
//! - Response writing with content-type/charset negotiation: the declared
//!   charset parameter always matches the byte encoding actually used
//! - Guaranteed single-use, always-released body channel (drop discipline)
//! - JSON responses and a blank-tolerant JSON-to-mapping codec
//! - Character-counted, never-byte-splitting body truncation for dumps
//!
//! # Example
//!
//! ```
//! use micro_reply::protocol::BufferSink;
//! use micro_reply::response::{self, STATUS_OK};
//!
//! let mut sink = BufferSink::new();
//! response::write_plain_text(&mut sink, STATUS_OK, "Hello World!").unwrap();
//!
//! assert_eq!(sink.status(), Some(200));
//! assert_eq!(sink.header("content-type"), Some("text/plain;charset=UTF-8"));
//! assert_eq!(&sink.body()[..], b"Hello World!");
//! ```
//!
//! # Architecture
//!
//! The crate is organized into several key modules:
//!
//! - [`protocol`]: Sink abstraction, payload sizing and error types
//! - [`response`]: Response writing and the status/content-type constants
//! - [`json`]: JSON text ↔ mapping codec
//! - [`diagnostic`]: Request/response dumps with bounded bodies
//!
//! # Concurrency
//!
//! Every operation is synchronous and stateless across invocations; there
//! is no shared mutable state. Distinct sinks may be driven concurrently
//! from multiple threads or tasks without any cross-call synchronization.

pub mod diagnostic;
pub mod json;
pub mod protocol;
pub mod response;
