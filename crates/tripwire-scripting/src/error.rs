//! Runtime lifecycle error types

/// Result type alias using [`RuntimeError`]
pub type Result<T, E = RuntimeError> = std::result::Result<T, E>;

/// Errors reported by the runtime lifecycle operations.
///
/// Script-level faults are never surfaced here: load and execution failures
/// collapse into an absent [`TriggerResult`](crate::TriggerResult) so the
/// host sees one uniform "no result" outcome regardless of cause.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// `start_runtime` was called more than once
    #[error("script runtime is already started")]
    AlreadyStarted,

    /// The runtime was started after `cleanup_runtime`
    #[error("script runtime has been shut down and cannot be restarted")]
    ShutDown,
}
