/// Console diagnostics shared by both entry points
use std::error::Error;

/// Severity of a diagnostic entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

/// Ordered, append-only diagnostic log with two severities.
///
/// Both entry points report startup progress through this trait so the
/// observable message sequence can be asserted against a recording sink
/// instead of the browser console.
pub trait DiagnosticSink {
    fn log(&self, severity: Severity, message: &str);

    fn info(&self, message: &str) {
        self.log(Severity::Info, message);
    }

    fn error(&self, message: &str) {
        self.log(Severity::Error, message);
    }

    /// Error entry that carries the failure which triggered it.
    fn error_with_cause(&self, message: &str, cause: &dyn Error) {
        self.log(Severity::Error, &format!("{message} {cause}"));
    }
}

/// Writes diagnostics to the browser console through the `log` facade.
///
/// `wasm-logger` routes these to `console.info` / `console.error`.
pub struct ConsoleSink;

impl DiagnosticSink for ConsoleSink {
    fn log(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Info => log::info!("{message}"),
            Severity::Error => log::error!("{message}"),
        }
    }
}

/// Recording sink for tests: keeps every entry in order.
#[cfg(test)]
pub(crate) struct MemorySink {
    entries: std::cell::RefCell<Vec<(Severity, String)>>,
}

#[cfg(test)]
impl MemorySink {
    pub fn new() -> Self {
        MemorySink {
            entries: std::cell::RefCell::new(Vec::new()),
        }
    }

    /// All messages in emission order, regardless of severity.
    pub fn messages(&self) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .map(|(_, message)| message.clone())
            .collect()
    }

    pub fn messages_at(&self, severity: Severity) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .filter(|(entry_severity, _)| *entry_severity == severity)
            .map(|(_, message)| message.clone())
            .collect()
    }
}

#[cfg(test)]
impl DiagnosticSink for MemorySink {
    fn log(&self, severity: Severity, message: &str) {
        self.entries.borrow_mut().push((severity, message.to_string()));
    }
}
