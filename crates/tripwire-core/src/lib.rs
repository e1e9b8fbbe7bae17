//! # Tripwire Core
//!
//! The host-side request boundary for the Tripwire trigger runtime.
//!
//! This crate defines the interface a host process provides so that trigger
//! scripts can observe an in-flight HTTP request without owning it:
//! - [`RequestAccessor`] - read-only accessor operations over a request
//! - [`RequestHandle`] - the opaque, host-owned reference passed into an
//!   invocation
//! - [`StaticRequest`] - an owned in-memory request for hosts and tests
//!
//! The scripting crate consumes these types; it never parses, mutates, or
//! releases a request itself.

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod accessor;
pub mod request;

pub use accessor::{RequestAccessor, RequestHandle};
pub use request::StaticRequest;

// Re-export commonly used types
pub use bytes::Bytes;
