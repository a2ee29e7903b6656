pub mod diagnostics;
pub mod errors;
pub mod inspector;
pub mod snapshot;

pub use diagnostics::source_map::return_line;
pub use diagnostics::stack_trace::{CallStack, StackFrame};
pub use diagnostics::traceback::{ActiveException, ExceptionContext, Traceback, TracebackEntry};
pub use errors::CodeTraceError;
pub use inspector::{FrameInspector, format_user_traceback};
pub use snapshot::Snapshot;

/// Line in the user snippet where the exception behind `traceback` originated,
/// using the default runtime sentinels.
pub fn line_number_from_traceback(traceback: &[TracebackEntry]) -> Result<usize, CodeTraceError> {
    Ok(FrameInspector::new().line_number_from_traceback(traceback)?)
}

/// User snippet frames of `stack`, or `None` when they cannot be determined.
pub fn user_frames(stack: &[StackFrame]) -> Option<Vec<StackFrame>> {
    FrameInspector::new().user_frames(stack)
}
