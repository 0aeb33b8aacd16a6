use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Final status of one generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// What the orchestrator hands back to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationOutcome {
    pub status: Status,
    /// Path of the exported artifact; `None` on any failure.
    pub artifact: Option<PathBuf>,
    pub message: String,
}

impl GenerationOutcome {
    pub fn success(artifact: PathBuf, message: impl Into<String>) -> Self {
        Self {
            status: Status::Success,
            artifact: Some(artifact),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            artifact: None,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }
}

/// Progress of one generation request.
///
/// `Rejected` and `BuildFailed` are terminal failures, `Exported` is the
/// terminal success. No state is ever retried; the caller resubmits a
/// corrected part instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestState {
    Received,
    Validating,
    Rejected,
    Building,
    BuildFailed,
    Exported,
}
