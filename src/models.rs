// src/models.rs
use serde::{Deserialize, Serialize};

use crate::errors::ReplError;

/// Shown when a failed submission carries no error message from the execution service.
pub const FALLBACK_ERROR_MESSAGE: &str = "The execution service failed without reporting an error";

/// One submission, built from the input surface at trigger time and sent as a form body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionRequest {
    pub code: String,
    pub stdin: String,
}

impl SubmissionRequest {
    pub fn new(code: impl Into<String>, stdin: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            stdin: stdin.into(),
        }
    }
}

/// The structured result the execution service returns for a completed run.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ExecutionResult {
    /// Process exit code
    pub status: i32,
    /// Zero when the process exited on its own
    pub signal: i32,
    /// Wall-clock duration in seconds
    pub time: f64,
    pub stdout: String,
    pub stderr: String,
}

impl ExecutionResult {
    pub fn was_killed(&self) -> bool {
        self.signal != 0
    }

    /// Execution time with millisecond resolution.
    pub fn rounded_time(&self) -> f64 {
        (self.time * 1000.0).round() / 1000.0
    }

    pub fn summary(&self) -> RunSummary {
        if self.was_killed() {
            RunSummary::Killed
        } else if self.status != 0 {
            RunSummary::RuntimeError
        } else {
            RunSummary::Finished
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunSummary {
    Finished,
    RuntimeError,
    Killed,
}

impl std::fmt::Display for RunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunSummary::Finished => write!(f, "Finished"),
            RunSummary::RuntimeError => write!(f, "Runtime error"),
            RunSummary::Killed => write!(f, "Killed"),
        }
    }
}

/// Why a submission produced no `ExecutionResult`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportFailure {
    pub error_message: String,
}

impl TransportFailure {
    pub fn new(error_message: impl Into<String>) -> Self {
        Self {
            error_message: error_message.into(),
        }
    }
}

impl From<&ReplError> for TransportFailure {
    fn from(err: &ReplError) -> Self {
        TransportFailure::new(err.backend_message().unwrap_or(FALLBACK_ERROR_MESSAGE))
    }
}

/// Exactly one of these is produced per submission.
pub type Outcome = std::result::Result<ExecutionResult, TransportFailure>;
