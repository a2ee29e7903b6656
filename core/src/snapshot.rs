use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::diagnostics::stack_trace::CallStack;
use crate::diagnostics::traceback::Traceback;
use crate::errors::SnapshotError;

/// Runtime state handed over by a host living in another process.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub traceback: Traceback,
    #[serde(default)]
    pub stack: CallStack,
    #[serde(default)]
    pub code: Option<String>,
}

impl Snapshot {
    pub fn from_json(source: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SnapshotError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&source)
    }
}
