use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum TracebackError {
    #[error("traceback has no entries")]
    #[diagnostic(help("only query the traceback while an exception is being handled"))]
    EmptyTraceback,

    #[error("no exception is currently being handled")]
    NoActiveException,
}
