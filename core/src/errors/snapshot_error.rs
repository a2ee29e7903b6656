use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum SnapshotError {
    #[error("could not read snapshot '{path}'")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed snapshot JSON")]
    #[diagnostic(help("expected an object with optional `traceback`, `stack` and `code` fields"))]
    Parse(#[from] serde_json::Error),
}
