// src/service/mod.rs

use serde::Deserialize;

use crate::errors::{ReplError, Result};
use crate::models::{ExecutionResult, SubmissionRequest};

pub mod http;

pub use http::HttpExecutionService;

/// The remote backend that runs submitted code and reports how it went.
///
/// Implementers resolve to `Ok` only for a well-formed `ExecutionResult`, whatever the
/// program's own exit status. Every other outcome (unreachable backend, rejected
/// submission, undecodable body) is an `Err`.
pub trait ExecutionService: Send + Sync {
    fn execute(&self, request: &SubmissionRequest) -> impl std::future::Future<Output = Result<ExecutionResult>> + Send;
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Extracts the `error` string from a failure body, if the body is shaped like one.
pub fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body).ok().map(|b| b.error)
}

/// Maps an HTTP status and raw body onto the protocol's two outcomes.
pub fn decode_response(status: u16, body: &str) -> Result<ExecutionResult> {
    if !(200..300).contains(&status) {
        return Err(ReplError::Service {
            status,
            message: error_message(body),
        });
    }

    match serde_json::from_str::<ExecutionResult>(body) {
        Ok(result) => Ok(result),
        Err(decode_err) => match error_message(body) {
            Some(message) => Err(ReplError::Service {
                status,
                message: Some(message),
            }),
            None => Err(ReplError::Decode(decode_err)),
        },
    }
}
