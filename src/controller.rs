// src/controller.rs
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::models::{
    ExecutionResult, FALLBACK_ERROR_MESSAGE, Outcome, RunSummary, SubmissionRequest, TransportFailure,
};
use crate::presentation::{Field, InputSurface, PresentationAdapter, Region};
use crate::service::ExecutionService;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    InFlight,
}

/// User-side events fed to [`SubmissionController::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerEvent {
    Trigger,
}

/// Which terminal display state a settled submission ended in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    Completed(RunSummary),
    Failed,
}

/// Drives one submission at a time from an input surface to a presentation adapter.
///
/// The phase is the only concurrency guard: while a submission is in flight every
/// further trigger is ignored, so outcomes are applied in the order requests were issued.
pub struct SubmissionController<S, P, I> {
    service: Arc<S>,
    presenter: P,
    input: I,
    phase: Phase,
    outcome_tx: mpsc::UnboundedSender<Outcome>,
    outcome_rx: mpsc::UnboundedReceiver<Outcome>,
}

impl<S, P, I> SubmissionController<S, P, I>
where
    S: ExecutionService + 'static,
    P: PresentationAdapter,
    I: InputSurface,
{
    pub fn new(service: S, presenter: P, input: I) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            service: Arc::new(service),
            presenter,
            input,
            phase: Phase::Idle,
            outcome_tx,
            outcome_rx,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_in_flight(&self) -> bool {
        self.phase == Phase::InFlight
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn into_presenter(self) -> P {
        self.presenter
    }

    /// Starts a submission unless one is already outstanding.
    ///
    /// Returns immediately; the request runs on the tokio runtime and its outcome is
    /// applied by [`settle`](Self::settle) or [`run`](Self::run). Returns `false` when
    /// the trigger was ignored, either because a submission is in flight or because no
    /// tokio runtime is available to run the request on.
    pub fn trigger(&mut self) -> bool {
        if self.phase == Phase::InFlight {
            log::debug!("Ignoring trigger while a submission is in flight");
            return false;
        }
        let runtime = match Handle::try_current() {
            Ok(handle) => handle,
            Err(e) => {
                log::error!("❌ Cannot submit outside a tokio runtime: {}", e);
                return false;
            }
        };
        self.phase = Phase::InFlight;

        self.presenter.hide(Region::ErrorPanel);
        self.presenter.hide(Region::StatusPanel);
        self.presenter.show(Region::WaitingIndicator);

        let request = SubmissionRequest::new(self.input.code(), self.input.stdin());
        log::info!(
            "🎯 Submitting {} bytes of code with {} bytes of stdin",
            request.code.len(),
            request.stdin.len()
        );

        let service = Arc::clone(&self.service);
        let outcome_tx = self.outcome_tx.clone();
        let request_task = runtime.spawn(async move {
            service.execute(&request).await.map_err(|e| {
                log::warn!("⚠️  Submission failed: {}", e);
                TransportFailure::from(&e)
            })
        });
        // A request task that panics or is cancelled still settles the submission.
        runtime.spawn(async move {
            let outcome = request_task.await.unwrap_or_else(|e| {
                log::warn!("⚠️  Submission task ended without a response: {}", e);
                Err(TransportFailure::new(FALLBACK_ERROR_MESSAGE))
            });
            // The receiver lives as long as the controller; a dropped controller has
            // nothing left to render.
            let _ = outcome_tx.send(outcome);
        });

        true
    }

    /// Waits for the outstanding submission, if any, and applies its outcome.
    pub async fn settle(&mut self) -> Option<Settlement> {
        if self.phase != Phase::InFlight {
            return None;
        }
        let outcome = self.outcome_rx.recv().await?;
        Some(self.apply(outcome))
    }

    /// Control loop: handles triggers and completions as they arrive until the event
    /// channel closes, then settles any submission still in flight.
    pub async fn run(mut self, mut events: mpsc::UnboundedReceiver<ControllerEvent>) -> Self {
        loop {
            tokio::select! {
                event = events.recv() => match event {
                    Some(ControllerEvent::Trigger) => {
                        self.trigger();
                    }
                    None => break,
                },
                Some(outcome) = self.outcome_rx.recv(), if self.phase == Phase::InFlight => {
                    self.apply(outcome);
                }
            }
        }

        self.settle().await;
        self
    }

    fn apply(&mut self, outcome: Outcome) -> Settlement {
        self.phase = Phase::Idle;
        match outcome {
            Ok(result) => Settlement::Completed(self.show_result(&result)),
            Err(failure) => {
                self.show_failure(&failure);
                Settlement::Failed
            }
        }
    }

    fn show_result(&mut self, result: &ExecutionResult) -> RunSummary {
        let p = &mut self.presenter;
        p.show(Region::StatusPanel);
        p.hide(Region::WaitingIndicator);

        p.set_text(Field::RetvalValue, &result.status.to_string());
        p.set_text(Field::SignalValue, &result.signal.to_string());
        p.set_text(Field::TimeValue, &result.rounded_time().to_string());
        p.set_text(Field::StdoutText, &result.stdout);
        p.set_text(Field::StderrText, &result.stderr);

        p.set_visible(Region::StdoutPanel, !result.stdout.is_empty());
        p.set_visible(Region::StderrPanel, !result.stderr.is_empty());

        let killed = result.was_killed();
        p.set_visible(Region::SignalDisplay, killed);
        p.set_visible(Region::RetvalDisplay, !killed);

        let summary = result.summary();
        p.set_text(Field::StatusSummaryLabel, &summary.to_string());

        log::info!("✅ {} in {}s", summary, result.rounded_time());
        summary
    }

    fn show_failure(&mut self, failure: &TransportFailure) {
        self.presenter.hide(Region::WaitingIndicator);
        self.presenter.show(Region::ErrorPanel);
        self.presenter.set_text(Field::ErrorMessageText, &failure.error_message);
    }
}
