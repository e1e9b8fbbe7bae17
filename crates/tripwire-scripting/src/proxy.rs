//! Request capability object exposed to scripts

use std::fmt;

use rhai::{Dynamic, Engine};
use tripwire_core::RequestHandle;

/// The one object a trigger script can observe the current request through.
///
/// A proxy is allocated unbound by the invoker before any script code runs,
/// then bound to exactly one [`RequestHandle`]: set once, never reassigned,
/// and dropped with the invocation that created it. Scripts cannot construct one: no
/// constructor is registered with the engine, so the only proxy a script
/// ever sees is the already-bound `this` of its entry point.
///
/// The proxy borrows the request. It never releases or mutates it; request
/// lifetime stays entirely with the host.
#[derive(Clone, Default)]
pub struct RequestProxy {
    handle: Option<RequestHandle>,
}

impl RequestProxy {
    /// Allocate a proxy with an empty handle slot
    pub(crate) fn unbound() -> Self {
        Self::default()
    }

    /// Bind the host request into the slot. Invoker-only, called once.
    pub(crate) fn bind(&mut self, handle: RequestHandle) {
        debug_assert!(self.handle.is_none(), "proxy handle bound twice");
        self.handle = Some(handle);
    }

    /// `method()`: HTTP method as an exact-length byte string, or `()`
    fn method(&mut self) -> Dynamic {
        to_field(self.handle.as_ref().and_then(|h| h.accessor().method()))
    }

    /// `uri()`: request URI, same contract
    fn uri(&mut self) -> Dynamic {
        to_field(self.handle.as_ref().and_then(|h| h.accessor().uri()))
    }

    /// `body()`: request body, binary-safe, may be empty
    fn body(&mut self) -> Dynamic {
        to_field(self.handle.as_ref().and_then(|h| h.accessor().body()))
    }

    /// `header(name)`: named header value, or `()` if not present
    fn header(&mut self, name: &str) -> Dynamic {
        to_field(
            self.handle
                .as_ref()
                .and_then(|h| h.accessor().header(name.as_bytes())),
        )
    }
}

/// Copy an accessor payload across the boundary as a Blob.
///
/// Length comes from the slice, never from a terminator scan; embedded NUL
/// bytes survive. Absent host data becomes the unit value.
fn to_field(bytes: Option<&[u8]>) -> Dynamic {
    match bytes {
        Some(bytes) => Dynamic::from_blob(bytes.to_vec()),
        None => Dynamic::UNIT,
    }
}

/// Register the capability type and its read methods with the engine.
///
/// Done once at runtime start; deliberately registers no constructor.
pub(crate) fn register(engine: &mut Engine) {
    engine.register_type_with_name::<RequestProxy>("Request");
    engine.register_fn("method", RequestProxy::method);
    engine.register_fn("uri", RequestProxy::uri);
    engine.register_fn("body", RequestProxy::body);
    engine.register_fn("header", RequestProxy::header);
}

impl fmt::Debug for RequestProxy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestProxy")
            .field("bound", &self.handle.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tripwire_core::StaticRequest;

    #[test]
    fn test_unbound_proxy_reports_nothing() {
        let mut proxy = RequestProxy::unbound();
        assert!(proxy.method().is::<()>());
        assert!(proxy.uri().is::<()>());
        assert!(proxy.body().is::<()>());
        assert!(proxy.header("content-type").is::<()>());
    }

    #[test]
    fn test_bound_proxy_delegates_to_accessor() {
        let handle = StaticRequest::new("GET", "/status")
            .with_header("x-token", "s3cret")
            .with_body(&b"left\0right"[..])
            .into_handle();

        let mut proxy = RequestProxy::unbound();
        proxy.bind(handle);

        assert_eq!(proxy.method().cast::<rhai::Blob>(), b"GET".to_vec());
        assert_eq!(proxy.uri().cast::<rhai::Blob>(), b"/status".to_vec());
        assert_eq!(proxy.body().cast::<rhai::Blob>(), b"left\0right".to_vec());
        assert_eq!(proxy.header("X-Token").cast::<rhai::Blob>(), b"s3cret".to_vec());
        assert!(proxy.header("x-missing").is::<()>());
    }

    #[test]
    fn test_absent_field_is_unit_not_error() {
        let handle = StaticRequest::unavailable().into_handle();

        let mut proxy = RequestProxy::unbound();
        proxy.bind(handle);

        assert!(proxy.method().is::<()>());
        assert!(proxy.body().is::<()>());
    }
}
