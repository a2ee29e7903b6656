mod lookup_error;
mod snapshot_error;
mod traceback_error;

pub use lookup_error::LookupError;
pub use snapshot_error::SnapshotError;
pub use traceback_error::TracebackError;

use miette::Diagnostic;
use thiserror::Error;

/// Unified error type wrapping all codetrace errors.
#[derive(Debug, Error, Diagnostic)]
pub enum CodeTraceError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Traceback(#[from] TracebackError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Snapshot(#[from] SnapshotError),
}
