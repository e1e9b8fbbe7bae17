//! Process-wide interpreter lifecycle

use std::fmt;

use parking_lot::{Mutex, MutexGuard};
use rhai::Engine;
use tracing::{debug, warn};

use crate::error::{Result, RuntimeError};
use crate::proxy;

/// The embedded interpreter instance.
///
/// Process-wide: created exactly once by [`start_runtime`], dropped exactly
/// once by [`cleanup_runtime`], never rebuilt. All access routes through the
/// lifecycle operations and the invoker's guarded entry. The interpreter is
/// not designed for concurrent entry from independent call stacks, so one
/// mutex serializes everything that touches it.
pub struct ScriptRuntime {
    engine: Engine,
}

impl ScriptRuntime {
    fn new() -> Self {
        let mut engine = Engine::new();

        // A pathologically nested script must fail to parse, not overflow
        // the host stack. No operation or time limits: bounding runaway
        // scripts is the host's job.
        engine.set_max_expr_depths(64, 32);

        proxy::register(&mut engine);

        Self { engine }
    }

    pub(crate) fn engine(&self) -> &Engine {
        &self.engine
    }
}

impl fmt::Debug for ScriptRuntime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScriptRuntime").finish()
    }
}

/// Lifecycle states of the process-wide runtime
pub(crate) enum RuntimeState {
    /// Not yet started
    Idle,
    /// Started and accepting invocations
    Running(ScriptRuntime),
    /// Shut down; terminal
    Stopped,
}

impl RuntimeState {
    /// The runtime, if currently accepting invocations
    pub(crate) fn running(&self) -> Option<&ScriptRuntime> {
        match self {
            Self::Running(runtime) => Some(runtime),
            _ => None,
        }
    }
}

static STATE: Mutex<RuntimeState> = Mutex::new(RuntimeState::Idle);

/// Lock the runtime state for the duration of one invocation
pub(crate) fn lock() -> MutexGuard<'static, RuntimeState> {
    STATE.lock()
}

/// Start the process-wide script runtime.
///
/// Must be called exactly once, before any invocation. Builds the engine and
/// registers the request capability type with it. Fails if the runtime is
/// already started or was already shut down; on failure no invocation may
/// proceed.
pub fn start_runtime() -> Result<()> {
    let mut state = STATE.lock();
    match *state {
        RuntimeState::Idle => {
            *state = RuntimeState::Running(ScriptRuntime::new());
            debug!("script runtime started");
            Ok(())
        }
        RuntimeState::Running(_) => Err(RuntimeError::AlreadyStarted),
        RuntimeState::Stopped => Err(RuntimeError::ShutDown),
    }
}

/// Shut down the process-wide script runtime.
///
/// Must be called exactly once at process end, after all invocations have
/// completed; dropping the engine releases all interpreter-owned resources.
/// The runtime cannot be started again afterwards. Calling this without a
/// running runtime logs a warning and does nothing.
pub fn cleanup_runtime() {
    let mut state = STATE.lock();
    match *state {
        RuntimeState::Running(_) => {
            *state = RuntimeState::Stopped;
            debug!("script runtime shut down");
        }
        _ => warn!("cleanup_runtime called without a running runtime"),
    }
}
