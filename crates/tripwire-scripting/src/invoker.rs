//! One request-evaluation pass: load, bind, call

use std::path::PathBuf;

use rhai::{CallFnOptions, Dynamic, Engine, Scope, AST};
use tracing::{debug, warn};
use tripwire_core::RequestHandle;

use crate::barrier;
use crate::proxy::RequestProxy;
use crate::runtime;
use crate::source::ScriptSource;

/// The well-known zero-argument entry point every trigger script defines
const ENTRY_POINT: &str = "run_trigger";

/// Outcome of one trigger invocation: a produced value, or absent.
///
/// Absent is the uniform sentinel for every failure along the way: a bad
/// script path, a syntax error, a top-level fault, a missing entry point, or
/// a runtime error during the call. The causes are collapsed; hosts that
/// need to know *why* must extend this boundary, not infer from the value.
/// A script that explicitly returns `()` is indistinguishable from absent,
/// matching the nil-result convention of trigger scripting.
#[derive(Debug, Clone)]
pub struct TriggerResult(Dynamic);

impl TriggerResult {
    pub(crate) fn absent() -> Self {
        Self(Dynamic::UNIT)
    }

    pub(crate) fn produced(value: Dynamic) -> Self {
        Self(value)
    }

    /// Whether the trigger failed to produce a usable result
    pub fn is_absent(&self) -> bool {
        self.0.is::<()>()
    }

    /// Borrow the produced value, if any
    pub fn value(&self) -> Option<&Dynamic> {
        if self.is_absent() {
            None
        } else {
            Some(&self.0)
        }
    }

    /// Take the produced value, if any
    pub fn into_value(self) -> Option<Dynamic> {
        if self.is_absent() {
            None
        } else {
            Some(self.0)
        }
    }
}

/// Evaluate the trigger script at `path` against one host request.
///
/// See [`invoke_trigger_source`] for the full contract.
pub fn invoke_trigger<P: Into<PathBuf>>(path: P, handle: RequestHandle) -> TriggerResult {
    invoke_trigger_source(&ScriptSource::file(path), handle)
}

/// Evaluate a trigger script against one host request.
///
/// Exactly one invocation runs at a time: the runtime lock is held for the
/// whole pass, so concurrent callers serialize here. Each invocation gets a
/// freshly compiled AST, a fresh scope, and a fresh proxy, and the proxy is
/// bound to `handle` only after the script has loaded cleanly. Script code runs at
/// exactly two points, script load and the entry-point call, and both are
/// behind the fault barrier; every failure surfaces as an absent result, and
/// nothing script-level can unwind into the host.
pub fn invoke_trigger_source(source: &ScriptSource, handle: RequestHandle) -> TriggerResult {
    let state = runtime::lock();
    let Some(rt) = state.running() else {
        warn!(script = %source.name(), "trigger invoked without a running runtime");
        return TriggerResult::absent();
    };
    let engine = rt.engine();

    // Fresh evaluator for this request; the handle slot stays empty until
    // the script has loaded.
    let mut proxy = RequestProxy::unbound();

    let Some(ast) = barrier::protected("load", || compile(engine, source)) else {
        return TriggerResult::absent();
    };
    let mut scope = Scope::new();
    let loaded = barrier::protected("load", || engine.run_ast_with_scope(&mut scope, &ast));
    if loaded.is_none() {
        return TriggerResult::absent();
    }

    proxy.bind(handle);

    // The `this` binding is what makes the loaded script trigger-eligible:
    // the entry point is looked up on the AST and called with the bound
    // proxy as its receiver. Lookup failure folds into the same barrier
    // outcome as any other fault.
    let mut this = Dynamic::from(proxy);
    let called: Option<Dynamic> = barrier::protected(ENTRY_POINT, || {
        let options = CallFnOptions::new().eval_ast(false).bind_this_ptr(&mut this);
        engine.call_fn_with_options(options, &mut scope, &ast, ENTRY_POINT, ())
    });

    match called {
        Some(value) => {
            debug!(script = %source.name(), "trigger produced a result");
            TriggerResult::produced(value)
        }
        None => TriggerResult::absent(),
    }
}

fn compile(engine: &Engine, source: &ScriptSource) -> Result<AST, Box<rhai::EvalAltResult>> {
    match source {
        ScriptSource::Inline { code, .. } => engine.compile(code).map_err(Into::into),
        ScriptSource::File { path } => engine.compile_file(path.clone()),
    }
}
