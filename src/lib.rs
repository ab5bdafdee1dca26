// src/lib.rs
pub mod banner;
pub mod config;
pub mod controller;
pub mod errors;
pub mod models;
pub mod presentation;
pub mod service;
pub mod terminal;

pub use controller::{ControllerEvent, Phase, Settlement, SubmissionController};
pub use errors::{ReplError, Result};
pub use models::{ExecutionResult, Outcome, RunSummary, SubmissionRequest, TransportFailure};
pub use presentation::{Field, InputSurface, PresentationAdapter, Region, StaticInput};
pub use service::{ExecutionService, HttpExecutionService};
pub use terminal::TerminalScreen;
