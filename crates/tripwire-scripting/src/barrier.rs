//! Fault barrier around script-executing calls

use rhai::EvalAltResult;
use tracing::debug;

/// Run a script-executing call and contain any fault it raises.
///
/// Rhai's evaluation APIs funnel every raisable condition (parse errors,
/// I/O failures while loading, runtime errors, arbitrary `throw`n values,
/// unresolved function lookups) through `EvalAltResult`. The barrier
/// consumes that channel wholesale: the caller gets the value or `None`,
/// never an unwind, and never a per-cause distinction.
pub(crate) fn protected<T>(
    stage: &str,
    call: impl FnOnce() -> Result<T, Box<EvalAltResult>>,
) -> Option<T> {
    match call() {
        Ok(value) => Some(value),
        Err(fault) => {
            debug!(stage = stage, fault = %fault, "script fault contained");
            None
        }
    }
}
