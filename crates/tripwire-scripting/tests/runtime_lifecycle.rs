//! Lifecycle test for the process-wide runtime.
//!
//! Kept in its own test binary: the runtime is process-scoped and this is
//! the one place that exercises the full start-to-shutdown sequence.

use tripwire_core::StaticRequest;
use tripwire_scripting::{
    cleanup_runtime, invoke_trigger_source, start_runtime, RuntimeError, ScriptSource,
};

#[test]
fn test_runtime_lifecycle_is_once_per_process() {
    let source = ScriptSource::inline("fn run_trigger() { 1 }");

    // Invoking before start yields absent, never a panic
    let early = invoke_trigger_source(&source, StaticRequest::new("GET", "/").into_handle());
    assert!(early.is_absent());

    // Start exactly once; a second start is refused
    start_runtime().expect("first start");
    assert_eq!(start_runtime(), Err(RuntimeError::AlreadyStarted));

    // Start followed by cleanup with zero invocations in between
    cleanup_runtime();

    // The runtime is terminal after shutdown
    assert_eq!(start_runtime(), Err(RuntimeError::ShutDown));
    let late = invoke_trigger_source(&source, StaticRequest::new("GET", "/").into_handle());
    assert!(late.is_absent());

    // Redundant cleanup logs and returns; it must not panic
    cleanup_runtime();
}
