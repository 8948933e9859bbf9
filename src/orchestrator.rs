/// Background orchestration: the coordinating object behind the service worker
use std::cell::{OnceCell, RefCell};
use std::rc::Rc;

use thiserror::Error;

use crate::diagnostics::DiagnosticSink;

/// Failure raised while obtaining or initializing the orchestrator.
#[derive(Debug, Error)]
pub enum OrchestratorError {
    /// The orchestrator could not be produced for this context.
    #[error("orchestrator unavailable: {0}")]
    Unavailable(String),

    /// A host listener could not be registered during initialize().
    #[error("listener registration failed: {0}")]
    ListenerRegistration(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Constructed,
    Initialized,
}

/// Coordinates all background-side services of the extension.
///
/// Exactly one instance exists per background context, created lazily by
/// [`BackgroundContext::orchestrator`] and kept until the service worker is
/// torn down. Construction sets up internal state only; everything that
/// touches the host happens in [`initialize`](Self::initialize).
pub struct BackgroundOrchestrator {
    lifecycle: Lifecycle,
    sink: Rc<dyn DiagnosticSink>,
}

impl BackgroundOrchestrator {
    pub fn new(sink: Rc<dyn DiagnosticSink>) -> BackgroundOrchestrator {
        sink.info("BackgroundOrchestrator constructor: Instance created. Further setup in initialize().");
        BackgroundOrchestrator {
            lifecycle: Lifecycle::Constructed,
            sink,
        }
    }

    /// Register host event listeners and construct the subordinate managers.
    ///
    /// Repeated calls are no-ops, so a re-entered entry point cannot
    /// double-register listeners. The subordinate managers (DataManager,
    /// SyncManager, UIManager, MessageBrokerConnector) attach here once they
    /// exist; a registration that fails must be reported individually
    /// without aborting the rest of the setup.
    pub fn initialize(&mut self) -> Result<(), OrchestratorError> {
        if self.lifecycle == Lifecycle::Initialized {
            return Ok(());
        }

        self.sink
            .info("BackgroundOrchestrator: initialize() called. Setting up listeners and managers.");

        self.lifecycle = Lifecycle::Initialized;
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.lifecycle == Lifecycle::Initialized
    }
}

/// Composition root for the background context.
///
/// Owns the single orchestrator for the worker's lifetime and hands out
/// shared handles to it. The host is single-threaded, so a `OnceCell` is
/// enough to guarantee at most one construction.
pub struct BackgroundContext {
    sink: Rc<dyn DiagnosticSink>,
    orchestrator: OnceCell<Rc<RefCell<BackgroundOrchestrator>>>,
}

impl BackgroundContext {
    pub fn new(sink: Rc<dyn DiagnosticSink>) -> BackgroundContext {
        BackgroundContext {
            sink,
            orchestrator: OnceCell::new(),
        }
    }

    /// The context's orchestrator, constructed on first call.
    ///
    /// Every call returns a handle to the same instance.
    pub fn orchestrator(&self) -> Rc<RefCell<BackgroundOrchestrator>> {
        self.orchestrator
            .get_or_init(|| Rc::new(RefCell::new(BackgroundOrchestrator::new(self.sink.clone()))))
            .clone()
    }
}
