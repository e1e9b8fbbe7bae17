//! # Tripwire Scripting
//!
//! Embedded [Rhai](https://rhai.rs) trigger evaluation for HTTP policy hosts.
//!
//! A *trigger* is a script-defined decision unit invoked once per HTTP
//! request. The host hands over a [`RequestHandle`](tripwire_core::RequestHandle)
//! and a script location; the script's `run_trigger` entry point reads the
//! request through a capability proxy and yields a result value. Any fault
//! inside script code (a bad path, a syntax error, a runtime error, or a
//! missing entry point) is contained and collapsed into one uniform absent
//! result. No path in this crate panics into or aborts the host.
//!
//! ## Usage
//!
//! ```no_run
//! use tripwire_core::StaticRequest;
//! use tripwire_scripting::{cleanup_runtime, invoke_trigger, start_runtime};
//!
//! start_runtime().expect("runtime start");
//!
//! let handle = StaticRequest::new("POST", "/hooks/deploy")
//!     .with_body("{}")
//!     .into_handle();
//! let result = invoke_trigger("triggers/deploy.rhai", handle);
//! if result.is_absent() {
//!     // trigger did not produce a result; host decides the fallback policy
//! }
//!
//! cleanup_runtime();
//! ```
//!
//! The runtime is process-wide: started once, shut down once, with
//! invocations serialized at [`invoke_trigger`].

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

mod barrier;
pub mod error;
pub mod invoker;
pub mod proxy;
pub mod runtime;
pub mod source;

pub use error::{Result, RuntimeError};
pub use invoker::{invoke_trigger, invoke_trigger_source, TriggerResult};
pub use runtime::{cleanup_runtime, start_runtime};
pub use source::ScriptSource;

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::error::{Result, RuntimeError};
    pub use crate::invoker::{invoke_trigger, invoke_trigger_source, TriggerResult};
    pub use crate::runtime::{cleanup_runtime, start_runtime};
    pub use crate::source::ScriptSource;
}
