//! Read-only accessor operations over a host-owned request

use std::fmt;
use std::sync::Arc;

/// Read-only view of one in-flight HTTP request, provided by the host.
///
/// Every accessor returns the exact bytes the host parsed, as a
/// length-delimited slice. Payloads may contain embedded NUL bytes and must
/// never be treated as terminator-scanned strings. `None` signals that the
/// host has no data for that field (malformed or unavailable), which is not
/// an error at this boundary.
pub trait RequestAccessor: Send + Sync {
    /// HTTP method bytes, or `None` if unavailable
    fn method(&self) -> Option<&[u8]>;

    /// Request URI bytes, or `None` if unavailable
    fn uri(&self) -> Option<&[u8]>;

    /// Request body bytes, or `None` if unavailable
    ///
    /// An empty body is `Some(&[])`, not `None`.
    fn body(&self) -> Option<&[u8]>;

    /// Value of the named header, or `None` if not present
    ///
    /// Header name matching is ASCII-case-insensitive.
    fn header(&self, name: &[u8]) -> Option<&[u8]>;

    /// Notify the host that the body buffer is no longer needed.
    ///
    /// Host-side bookkeeping only. The scripting runtime never calls this;
    /// releasing request resources is entirely the host's responsibility.
    fn release_body(&self) {}
}

/// Opaque reference to a host-owned request.
///
/// The handle carries shared read access for the duration of one trigger
/// invocation; the host retains ownership of the request and guarantees it
/// outlives the invocation. This type defines no release operation.
#[derive(Clone)]
pub struct RequestHandle(Arc<dyn RequestAccessor>);

impl RequestHandle {
    /// Wrap a host request into a handle
    pub fn new(accessor: Arc<dyn RequestAccessor>) -> Self {
        Self(accessor)
    }

    /// Borrow the accessor surface of the underlying request
    pub fn accessor(&self) -> &dyn RequestAccessor {
        self.0.as_ref()
    }
}

impl fmt::Debug for RequestHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RequestHandle").finish()
    }
}

impl<A: RequestAccessor + 'static> From<Arc<A>> for RequestHandle {
    fn from(accessor: Arc<A>) -> Self {
        Self(accessor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedRequest;

    impl RequestAccessor for FixedRequest {
        fn method(&self) -> Option<&[u8]> {
            Some(b"GET")
        }

        fn uri(&self) -> Option<&[u8]> {
            None
        }

        fn body(&self) -> Option<&[u8]> {
            Some(b"")
        }

        fn header(&self, _name: &[u8]) -> Option<&[u8]> {
            None
        }
    }

    #[test]
    fn test_handle_shares_one_request() {
        let handle = RequestHandle::new(Arc::new(FixedRequest));
        let clone = handle.clone();

        assert_eq!(handle.accessor().method(), Some(&b"GET"[..]));
        assert_eq!(clone.accessor().method(), Some(&b"GET"[..]));
        assert_eq!(clone.accessor().uri(), None);
    }

    #[test]
    fn test_empty_body_is_present() {
        let handle = RequestHandle::new(Arc::new(FixedRequest));
        assert_eq!(handle.accessor().body(), Some(&b""[..]));
    }
}
