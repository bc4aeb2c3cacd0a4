//! Typed lifecycle events

use std::fmt;

use super::logger::Severity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    StartupBegin,
    ConfigLoaded,
    Serving,
    ShutdownComplete,

    // Queries. QUERY_BEGIN / _COMPLETE / _FAILED come from the query scope.
    QueryRejected,
    BackendSelected,
    /// Fallback source could not be opened
    SourceUnavailable,

    // Bulk load. LOAD_BEGIN / _COMPLETE / _FAILED come from the load scope.
    /// Store already populated, nothing read
    LoadSkipped,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::StartupBegin => "SERVICE_STARTUP_BEGIN",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::Serving => "SERVING",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",
            Event::QueryRejected => "QUERY_REJECTED",
            Event::BackendSelected => "BACKEND_SELECTED",
            Event::SourceUnavailable => "SOURCE_UNAVAILABLE",
            Event::LoadSkipped => "LOAD_SKIPPED",
        }
    }

    /// Severity the event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::QueryRejected | Event::SourceUnavailable => Severity::Warn,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        assert_eq!(Event::StartupBegin.as_str(), "SERVICE_STARTUP_BEGIN");
        assert_eq!(Event::BackendSelected.to_string(), "BACKEND_SELECTED");
    }

    #[test]
    fn test_event_severity() {
        assert_eq!(Event::BackendSelected.severity(), Severity::Info);
        assert_eq!(Event::SourceUnavailable.severity(), Severity::Warn);
        assert_eq!(Event::QueryRejected.severity(), Severity::Warn);
    }
}
