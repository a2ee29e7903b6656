use serde::{Deserialize, Serialize};

use crate::errors::TracebackError;
use crate::inspector::FrameInspector;

/// A frame of an exception's propagation chain, captured at raise time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TracebackEntry {
    pub source_label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_name: Option<String>,
    pub line: usize,
}

impl TracebackEntry {
    pub fn new(source_label: impl Into<String>, line: usize) -> Self {
        Self {
            source_label: source_label.into(),
            function_name: None,
            line,
        }
    }

    pub fn in_function(mut self, name: impl Into<String>) -> Self {
        self.function_name = Some(name.into());
        self
    }
}

/// Traceback entries ordered oldest caller first, raise site last.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Traceback {
    entries: Vec<TracebackEntry>,
}

impl Traceback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the frame the exception unwound into. Unwinding visits the raise
    /// site first, so each new entry is an outer caller and goes to the front.
    pub fn push_caller(&mut self, entry: TracebackEntry) {
        self.entries.insert(0, entry);
    }

    pub fn entries(&self) -> &[TracebackEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn raise_site(&self) -> Option<&TracebackEntry> {
        self.entries.last()
    }
}

impl From<Vec<TracebackEntry>> for Traceback {
    fn from(entries: Vec<TracebackEntry>) -> Self {
        Self { entries }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveException {
    pub name: String,
    pub message: String,
    pub traceback: Traceback,
}

/// The exception currently being handled by the host, if any.
#[derive(Debug, Clone, Default)]
pub struct ExceptionContext {
    current: Option<ActiveException>,
}

impl ExceptionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&mut self, exception: ActiveException) {
        self.current = Some(exception);
    }

    pub fn clear(&mut self) -> Option<ActiveException> {
        self.current.take()
    }

    pub fn current(&self) -> Option<&ActiveException> {
        self.current.as_ref()
    }

    pub fn line_number(&self, inspector: &FrameInspector) -> Result<usize, TracebackError> {
        let exception = self
            .current
            .as_ref()
            .ok_or(TracebackError::NoActiveException)?;
        inspector.line_number_from_traceback(exception.traceback.entries())
    }
}
