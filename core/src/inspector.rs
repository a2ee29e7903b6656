use crate::diagnostics::source_map::SourceMap;
use crate::diagnostics::stack_trace::StackFrame;
use crate::diagnostics::traceback::TracebackEntry;
use crate::errors::{LookupError, TracebackError};

/// Source label the host's exec/eval facility stamps on dynamically compiled code.
pub const EXEC_SOURCE_LABEL: &str = "<exec>";

/// Path component of the runtime's internal package. Must match the host
/// runtime's module layout.
pub const RUNTIME_PATH_MARKER: &str = "/_pyodide/";

/// Function name of the runtime's async evaluation entry point.
pub const ASYNC_EVAL_ENTRY_POINT: &str = "eval_code_async";

/// Maps interpreter error state back onto the user's snippet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameInspector {
    exec_label: String,
    runtime_path_marker: String,
    entry_point: String,
}

impl FrameInspector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_exec_label(mut self, label: impl Into<String>) -> Self {
        self.exec_label = label.into();
        self
    }

    pub fn with_runtime_path_marker(mut self, marker: impl Into<String>) -> Self {
        self.runtime_path_marker = marker.into();
        self
    }

    pub fn with_entry_point(mut self, name: impl Into<String>) -> Self {
        self.entry_point = name.into();
        self
    }

    pub fn exec_label(&self) -> &str {
        &self.exec_label
    }

    pub fn is_user_frame(&self, frame: &StackFrame) -> bool {
        frame.source_label == self.exec_label
    }

    pub fn is_user_entry(&self, entry: &TracebackEntry) -> bool {
        entry.source_label == self.exec_label
    }

    /// The frame where host evaluation machinery hands over to user code.
    pub fn is_boundary(&self, frame: &StackFrame) -> bool {
        frame.source_label.contains(&self.runtime_path_marker)
            && frame.function_name == self.entry_point
    }

    /// Line inside the user snippet where the handled exception originated.
    ///
    /// `traceback` must be ordered oldest caller first. The first user-code
    /// entry wins; without one, the raise site's line is reported. An empty
    /// traceback means no exception is being handled and is an error.
    pub fn line_number_from_traceback(
        &self,
        traceback: &[TracebackEntry],
    ) -> Result<usize, TracebackError> {
        if let Some(entry) = traceback.iter().find(|entry| self.is_user_entry(entry)) {
            return Ok(entry.line);
        }

        let raise_site = traceback.last().ok_or(TracebackError::EmptyTraceback)?;
        log::debug!(
            "no '{}' entry in traceback, using raise site {}:{}",
            self.exec_label,
            raise_site.source_label,
            raise_site.line
        );
        Ok(raise_site.line)
    }

    /// Frames of `stack` (outermost caller first) that belong to the running
    /// user snippet, in caller-to-callee order.
    pub fn try_user_frames(&self, stack: &[StackFrame]) -> Result<Vec<StackFrame>, LookupError> {
        if stack.is_empty() {
            return Err(LookupError::EmptyStack);
        }

        let boundary = stack
            .iter()
            .position(|frame| self.is_boundary(frame))
            .ok_or_else(|| LookupError::BoundaryNotFound {
                marker: self.runtime_path_marker.clone(),
                entry_point: self.entry_point.clone(),
            })?;
        log::trace!("evaluation boundary at stack index {boundary}");

        Ok(stack[boundary + 1..]
            .iter()
            .skip_while(|frame| !self.is_user_frame(frame))
            .take_while(|frame| self.is_user_frame(frame))
            .cloned()
            .collect())
    }

    /// Like [`FrameInspector::try_user_frames`], but any failure means the user
    /// frames are unknown. Boundary found with no user frames after it yields
    /// an empty list, not `None`.
    pub fn user_frames(&self, stack: &[StackFrame]) -> Option<Vec<StackFrame>> {
        match self.try_user_frames(stack) {
            Ok(frames) => Some(frames),
            Err(err) => {
                log::debug!("could not determine user frames: {err}");
                None
            }
        }
    }
}

impl Default for FrameInspector {
    fn default() -> Self {
        Self {
            exec_label: EXEC_SOURCE_LABEL.to_string(),
            runtime_path_marker: RUNTIME_PATH_MARKER.to_string(),
            entry_point: ASYNC_EVAL_ENTRY_POINT.to_string(),
        }
    }
}

/// Renders user frames most recent call last, quoting the snippet's source
/// line under each frame when `code` is available.
pub fn format_user_traceback(frames: &[StackFrame], code: Option<&str>) -> String {
    let map = code.map(SourceMap::from_source);
    let mut out = String::from("Traceback (most recent call last):\n");
    for frame in frames {
        out.push_str(&format!(
            "  File \"{}\", line {}, in {}\n",
            frame.source_label, frame.line, frame.function_name
        ));
        let text = map.as_ref().and_then(|map| map.line_text(frame.line));
        if let Some(text) = text.map(str::trim).filter(|text| !text.is_empty()) {
            out.push_str(&format!("    {text}\n"));
        }
    }
    out
}
