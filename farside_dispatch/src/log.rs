// Logging sink interface.
//
// The dispatch core never writes to stderr or a file itself. It reports
// through a host-provided `LogSink`, fire-and-forget. Log delivery can never
// gate dispatch logic: the trait returns nothing and takes `&self`, so a
// sink failure is the sink's problem.
//
// Log levels:
// - ERROR: a completion or cycle step failed in a way worth investigating
// - WARN: recoverable degradation (provider down, colonist unassigned)
// - INFO: cycle-level notifications

use std::cell::RefCell;

/// Severity of a log message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
        }
    }
}

/// A host-provided log channel. Implementations forward to whatever the
/// host uses (console, ring buffer, event log panel).
pub trait LogSink {
    fn log(&self, level: LogLevel, message: &str);

    fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }
}

// A shared sink keeps working as a sink, so the host can hold a handle to
// the same buffer the distributor writes to.
impl<S: LogSink> LogSink for std::rc::Rc<S> {
    fn log(&self, level: LogLevel, message: &str) {
        S::log(self, level, message);
    }
}

/// Discards everything. The default sink for hosts that don't care.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl LogSink for NullSink {
    fn log(&self, _level: LogLevel, _message: &str) {}
}

/// Buffers messages in memory for headless runs and inspection.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: RefCell<Vec<(LogLevel, String)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything logged so far.
    pub fn entries(&self) -> Vec<(LogLevel, String)> {
        self.entries.borrow().clone()
    }

    /// Whether any entry at `level` contains `needle`.
    pub fn contains(&self, level: LogLevel, needle: &str) -> bool {
        self.entries
            .borrow()
            .iter()
            .any(|(l, m)| *l == level && m.contains(needle))
    }
}

impl LogSink for MemorySink {
    fn log(&self, level: LogLevel, message: &str) {
        self.entries.borrow_mut().push((level, message.to_string()));
    }
}
