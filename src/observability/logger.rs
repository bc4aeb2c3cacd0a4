//! Structured JSON logger
//!
//! - One log line = one JSON object
//! - Keys in alphabetical order, so identical events render identically
//! - INFO/WARN go to stdout, ERROR/FATAL to stderr
//! - Synchronous, no buffering
//!
//! Unit tests never reach the process streams: lines are kept per thread
//! and read back with `capture_log`.

use std::fmt;
use std::io::Write;

use serde_json::{Map, Value};

use super::events::Event;

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Warn,
    Error,
    /// Caller stops after logging
    Fatal,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub struct Logger;

impl Logger {
    /// Logs `event` with string fields
    pub fn log(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        let line = Self::render(severity, event, fields);
        Self::emit(severity, &line);
    }

    /// Logs a typed event at its own severity
    pub fn event(event: Event, fields: &[(&str, &str)]) {
        Self::log(event.severity(), event.as_str(), fields);
    }

    pub fn fatal(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Fatal, event, fields);
    }

    /// Renders one log line without the trailing newline.
    ///
    /// `event` and `severity` cannot be overridden by fields.
    pub fn render(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
        let mut object = Map::new();
        for (key, value) in fields {
            object.insert((*key).to_string(), Value::String((*value).to_string()));
        }
        object.insert("event".into(), Value::String(event.to_string()));
        object.insert("severity".into(), Value::String(severity.as_str().into()));

        Value::Object(object).to_string()
    }

    /// Writes one rendered line. Logging never fails the caller.
    fn log_to_writer<W: Write>(writer: &mut W, line: &str) {
        let _ = writeln!(writer, "{}", line);
        let _ = writer.flush();
    }

    #[cfg(not(test))]
    fn emit(severity: Severity, line: &str) {
        if severity >= Severity::Error {
            Self::log_to_writer(&mut std::io::stderr().lock(), line);
        } else {
            Self::log_to_writer(&mut std::io::stdout().lock(), line);
        }
    }

    #[cfg(test)]
    fn emit(_severity: Severity, line: &str) {
        CAPTURED.with(|lines| lines.borrow_mut().push(line.to_string()));
    }
}

#[cfg(test)]
thread_local! {
    static CAPTURED: std::cell::RefCell<Vec<String>> = const { std::cell::RefCell::new(Vec::new()) };
}

/// Runs `f` and returns the lines it logged on this thread, parsed
#[cfg(test)]
pub fn capture_log<R>(f: impl FnOnce() -> R) -> (R, Vec<Value>) {
    CAPTURED.with(|lines| lines.borrow_mut().clear());
    let result = f();
    let lines = CAPTURED.with(|lines| std::mem::take(&mut *lines.borrow_mut()));
    let parsed = lines
        .iter()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    (result, parsed)
}

/// Events of captured lines, in order
#[cfg(test)]
pub fn captured_events(lines: &[Value]) -> Vec<&str> {
    lines.iter().filter_map(|l| l["event"].as_str()).collect()
}
