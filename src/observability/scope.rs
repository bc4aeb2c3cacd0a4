//! Scoped BEGIN / COMPLETE logging
//!
//! - `{name}_BEGIN` on creation
//! - `{name}_COMPLETE` with `duration_ms` on `complete_with_fields`
//! - `{name}_FAILED` on `fail`
//! - `{name}_INCOMPLETE` if dropped without either
//!
//! Fields given at creation are repeated on every line of the scope.

use std::time::Instant;

use super::logger::{Logger, Severity};

pub struct ObservationScope {
    name: &'static str,
    fields: Vec<(&'static str, String)>,
    started: Instant,
    finished: bool,
}

impl ObservationScope {
    pub fn with_fields(name: &'static str, fields: Vec<(&'static str, String)>) -> Self {
        let scope = Self {
            name,
            fields,
            started: Instant::now(),
            finished: false,
        };
        scope.emit(Severity::Info, "BEGIN", &[]);
        scope
    }

    /// Milliseconds since the scope began
    pub fn elapsed_ms(&self) -> u128 {
        self.started.elapsed().as_millis()
    }

    pub fn complete_with_fields(mut self, extra: &[(&str, &str)]) {
        self.finished = true;
        let duration = self.elapsed_ms().to_string();
        let mut fields = extra.to_vec();
        fields.push(("duration_ms", duration.as_str()));
        self.emit(Severity::Info, "COMPLETE", &fields);
    }

    /// Logs `{name}_FAILED` at ERROR with the error code and reason
    pub fn fail(mut self, code: &str, reason: &str) {
        self.finished = true;
        self.emit(Severity::Error, "FAILED", &[("code", code), ("reason", reason)]);
    }

    fn emit(&self, severity: Severity, suffix: &str, extra: &[(&str, &str)]) {
        let event = format!("{}_{}", self.name, suffix);
        let mut fields: Vec<(&str, &str)> =
            self.fields.iter().map(|(k, v)| (*k, v.as_str())).collect();
        fields.extend_from_slice(extra);
        Logger::log(severity, &event, &fields);
    }
}

impl Drop for ObservationScope {
    fn drop(&mut self) {
        if !self.finished {
            self.emit(
                Severity::Warn,
                "INCOMPLETE",
                &[("reason", "scope dropped without completion")],
            );
        }
    }
}
