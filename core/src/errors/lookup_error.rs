use miette::Diagnostic;
use thiserror::Error;

/// Reasons the user frames of a stack snapshot could not be determined.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum LookupError {
    #[error("stack snapshot is empty")]
    EmptyStack,

    #[error("no '{entry_point}' frame under '{marker}' in the stack")]
    #[diagnostic(help("the error was probably raised outside the evaluation path"))]
    BoundaryNotFound { marker: String, entry_point: String },
}
