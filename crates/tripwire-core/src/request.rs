//! Owned in-memory request for hosts and tests

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use bytes::Bytes;

use crate::accessor::{RequestAccessor, RequestHandle};

/// An owned, in-memory HTTP request implementing [`RequestAccessor`].
///
/// Hosts that buffer requests before trigger evaluation can store them here
/// and hand out handles; the test suite uses it as its host stand-in. Fields
/// left unset are reported as unavailable through the accessor surface.
#[derive(Debug, Default)]
pub struct StaticRequest {
    method: Option<Bytes>,
    uri: Option<Bytes>,
    headers: Vec<(Bytes, Bytes)>,
    body: Option<Bytes>,
    body_released: AtomicBool,
}

impl StaticRequest {
    /// Create a request with the given method and URI
    pub fn new(method: impl Into<Bytes>, uri: impl Into<Bytes>) -> Self {
        Self {
            method: Some(method.into()),
            uri: Some(uri.into()),
            ..Self::default()
        }
    }

    /// Create a request that reports every field as unavailable
    pub fn unavailable() -> Self {
        Self::default()
    }

    /// Add a header
    pub fn with_header(mut self, name: impl Into<Bytes>, value: impl Into<Bytes>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Set the body
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Copy an `http` request into a `StaticRequest`
    pub fn from_http(req: &http::Request<Bytes>) -> Self {
        let mut out = Self::new(
            Bytes::copy_from_slice(req.method().as_str().as_bytes()),
            Bytes::from(req.uri().to_string()),
        );
        for (name, value) in req.headers() {
            out.headers.push((
                Bytes::copy_from_slice(name.as_str().as_bytes()),
                Bytes::copy_from_slice(value.as_bytes()),
            ));
        }
        out.body = Some(req.body().clone());
        out
    }

    /// Move this request behind a [`RequestHandle`]
    pub fn into_handle(self) -> RequestHandle {
        RequestHandle::new(Arc::new(self))
    }

    /// Whether the host marked the body buffer as released
    pub fn body_released(&self) -> bool {
        self.body_released.load(Ordering::Acquire)
    }
}

impl RequestAccessor for StaticRequest {
    fn method(&self) -> Option<&[u8]> {
        self.method.as_deref()
    }

    fn uri(&self) -> Option<&[u8]> {
        self.uri.as_deref()
    }

    fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    fn header(&self, name: &[u8]) -> Option<&[u8]> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_ref())
    }

    fn release_body(&self) {
        self.body_released.store(true, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_report_exact_bytes() {
        let req = StaticRequest::new("POST", "/hooks/deploy").with_body(&b"a\0b"[..]);

        assert_eq!(req.method(), Some(&b"POST"[..]));
        assert_eq!(req.uri(), Some(&b"/hooks/deploy"[..]));
        // Embedded NUL survives; length comes from the slice
        assert_eq!(req.body(), Some(&b"a\0b"[..]));
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let req = StaticRequest::new("GET", "/").with_header("Content-Type", "application/json");

        assert_eq!(req.header(b"content-type"), Some(&b"application/json"[..]));
        assert_eq!(req.header(b"CONTENT-TYPE"), Some(&b"application/json"[..]));
        assert_eq!(req.header(b"x-missing"), None);
    }

    #[test]
    fn test_unavailable_request_reports_nothing() {
        let req = StaticRequest::unavailable();

        assert_eq!(req.method(), None);
        assert_eq!(req.uri(), None);
        assert_eq!(req.body(), None);
    }

    #[test]
    fn test_release_body_is_bookkeeping_only() {
        let req = StaticRequest::new("GET", "/").with_body("payload");
        assert!(!req.body_released());

        req.release_body();
        assert!(req.body_released());
        // The buffer itself is untouched
        assert_eq!(req.body(), Some(&b"payload"[..]));
    }

    #[test]
    fn test_from_http_copies_all_fields() {
        let http_req = http::Request::builder()
            .method("PUT")
            .uri("/v1/items?id=7")
            .header("x-signature", "abc123")
            .body(Bytes::from_static(b"{\"id\":7}"))
            .unwrap();

        let req = StaticRequest::from_http(&http_req);
        assert_eq!(req.method(), Some(&b"PUT"[..]));
        assert_eq!(req.uri(), Some(&b"/v1/items?id=7"[..]));
        assert_eq!(req.header(b"X-Signature"), Some(&b"abc123"[..]));
        assert_eq!(req.body(), Some(&b"{\"id\":7}"[..]));
    }
}
