/// Startup sequences for the two extension entry points
use crate::bridge::{probe, RuntimeBridge};
use crate::diagnostics::DiagnosticSink;
use crate::orchestrator::OrchestratorError;

pub const BACKGROUND_STARTING: &str = "Tabitha Background Service Worker starting...";
pub const BACKGROUND_BRIDGE_READY: &str =
    "Tabitha Background: webextension-polyfill loaded and browser.runtime is available.";
pub const BACKGROUND_BRIDGE_MISSING: &str =
    "Tabitha Background: webextension-polyfill failed to load or browser.runtime not available.";
pub const BACKGROUND_ORCHESTRATOR_READY: &str =
    "Tabitha BackgroundOrchestrator instance obtained and initialize() called successfully.";
pub const ORCHESTRATOR_INIT_FAILED: &str =
    "Failed to initialize BackgroundOrchestrator. Critical extension functionalities may be affected.";
pub const BACKGROUND_COMPLETED: &str =
    "Tabitha Background Service Worker script execution completed. Core functionalities are now managed by BackgroundOrchestrator.";

pub const UI_BRIDGE_READY: &str =
    "Tabitha UI: webextension-polyfill loaded and browser.runtime is available.";
pub const UI_BRIDGE_MISSING: &str =
    "Tabitha UI: webextension-polyfill failed to load or browser.runtime not available.";

pub const ROOT_ELEMENT_MISSING: &str =
    "Failed to find the root element with ID 'app'. UI cannot be rendered.";

/// Run the background entry-point sequence: announce the start, check the
/// bridge, bring up the orchestrator, announce completion.
///
/// Every step runs. A failed bridge check and a failed orchestrator
/// bring-up are both reported and swallowed; the entry point never
/// propagates a failure into the host. `bring_up` covers obtaining the
/// orchestrator and calling `initialize()` on it, so a failure at either
/// stage lands in the same boundary.
pub fn run_background_startup<B, F>(bridge: &B, sink: &dyn DiagnosticSink, bring_up: F)
where
    B: RuntimeBridge,
    F: FnOnce() -> Result<(), OrchestratorError>,
{
    sink.info(BACKGROUND_STARTING);

    check_bridge(bridge, sink, BACKGROUND_BRIDGE_READY, BACKGROUND_BRIDGE_MISSING);

    match bring_up() {
        Ok(()) => sink.info(BACKGROUND_ORCHESTRATOR_READY),
        Err(error) => sink.error_with_cause(ORCHESTRATOR_INIT_FAILED, &error),
    }

    sink.info(BACKGROUND_COMPLETED);
}

/// Report bridge health for one entry point.
///
/// Returns the probe outcome; callers continue either way, leaving later
/// operations to fail individually if the bridge is truly unusable.
pub fn check_bridge<B: RuntimeBridge>(
    bridge: &B,
    sink: &dyn DiagnosticSink,
    ready: &str,
    missing: &str,
) -> bool {
    let healthy = probe(bridge);
    if healthy {
        sink.info(ready);
    } else {
        sink.error(missing);
    }
    healthy
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{MemorySink, Severity};
    use crate::orchestrator::BackgroundContext;
    use std::cell::Cell;
    use std::rc::Rc;

    struct FakeBridge(Option<&'static str>);

    impl RuntimeBridge for FakeBridge {
        fn runtime_id(&self) -> Option<String> {
            self.0.map(str::to_string)
        }
    }

    #[test]
    fn test_healthy_startup_log_order() {
        let sink = MemorySink::new();

        run_background_startup(&FakeBridge(Some("extension-id")), &sink, || Ok(()));

        assert_eq!(
            sink.messages(),
            vec![
                BACKGROUND_STARTING,
                BACKGROUND_BRIDGE_READY,
                BACKGROUND_ORCHESTRATOR_READY,
                BACKGROUND_COMPLETED,
            ]
        );
        assert!(sink.messages_at(Severity::Error).is_empty());
    }

    #[test]
    fn test_degraded_bridge_does_not_halt_startup() {
        let sink = MemorySink::new();
        let bring_up_ran = Cell::new(false);

        run_background_startup(&FakeBridge(None), &sink, || {
            bring_up_ran.set(true);
            Ok(())
        });

        assert!(bring_up_ran.get());
        assert_eq!(sink.messages_at(Severity::Error), vec![BACKGROUND_BRIDGE_MISSING]);
        assert_eq!(sink.messages().last().map(String::as_str), Some(BACKGROUND_COMPLETED));
    }

    #[test]
    fn test_empty_runtime_id_reads_as_degraded() {
        let sink = MemorySink::new();

        run_background_startup(&FakeBridge(Some("")), &sink, || Ok(()));

        assert_eq!(sink.messages_at(Severity::Error), vec![BACKGROUND_BRIDGE_MISSING]);
    }

    #[test]
    fn test_accessor_failure_is_reported_and_swallowed() {
        let sink = MemorySink::new();

        run_background_startup(&FakeBridge(Some("extension-id")), &sink, || {
            Err(OrchestratorError::Unavailable("context torn down".to_string()))
        });

        let errors = sink.messages_at(Severity::Error);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with(ORCHESTRATOR_INIT_FAILED));
        assert!(errors[0].contains("context torn down"));
        assert!(!sink.messages().contains(&BACKGROUND_ORCHESTRATOR_READY.to_string()));
        assert_eq!(sink.messages().last().map(String::as_str), Some(BACKGROUND_COMPLETED));
    }

    #[test]
    fn test_initialize_failure_is_reported_and_swallowed() {
        let sink = MemorySink::new();

        run_background_startup(&FakeBridge(Some("extension-id")), &sink, || {
            Err(OrchestratorError::ListenerRegistration("onInstalled".to_string()))
        });

        let errors = sink.messages_at(Severity::Error);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with(ORCHESTRATOR_INIT_FAILED));
        assert!(errors[0].contains("onInstalled"));
        assert_eq!(sink.messages().last().map(String::as_str), Some(BACKGROUND_COMPLETED));
    }

    #[test]
    fn test_full_sequence_with_real_orchestrator() {
        let sink = Rc::new(MemorySink::new());
        let context = BackgroundContext::new(sink.clone());

        run_background_startup(&FakeBridge(Some("extension-id")), sink.as_ref(), || {
            context.orchestrator().borrow_mut().initialize()
        });

        assert_eq!(
            sink.messages(),
            vec![
                BACKGROUND_STARTING,
                BACKGROUND_BRIDGE_READY,
                "BackgroundOrchestrator constructor: Instance created. Further setup in initialize().",
                "BackgroundOrchestrator: initialize() called. Setting up listeners and managers.",
                BACKGROUND_ORCHESTRATOR_READY,
                BACKGROUND_COMPLETED,
            ]
        );
        assert!(context.orchestrator().borrow().is_initialized());
    }

    #[test]
    fn test_check_bridge_reports_ui_messages() {
        let sink = MemorySink::new();

        assert!(check_bridge(&FakeBridge(Some("extension-id")), &sink, UI_BRIDGE_READY, UI_BRIDGE_MISSING));
        assert!(!check_bridge(&FakeBridge(None), &sink, UI_BRIDGE_READY, UI_BRIDGE_MISSING));

        assert_eq!(sink.messages(), vec![UI_BRIDGE_READY, UI_BRIDGE_MISSING]);
        assert_eq!(sink.messages_at(Severity::Error), vec![UI_BRIDGE_MISSING]);
    }
}
