use std::fmt;

use crate::error::AppError;

/// Progress of a single `perf` invocation. Any failure ends in `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStage {
    Idle,
    ParametersResolved,
    Validated,
    Submitted,
    TokenRefreshed,
    Done,
    Failed,
}

impl RunStage {
    /// Moves to `next`, logging the transition.
    pub fn advance(&mut self, next: RunStage) {
        tracing::debug!("perf stage: {} -> {}", self, next);
        *self = next;
    }

    /// Marks the run as failed and hands `err` back for propagation.
    pub fn fail(&mut self, err: AppError) -> AppError {
        self.advance(RunStage::Failed);
        err
    }
}

impl fmt::Display for RunStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RunStage::Idle => "idle",
            RunStage::ParametersResolved => "parameters-resolved",
            RunStage::Validated => "validated",
            RunStage::Submitted => "submitted",
            RunStage::TokenRefreshed => "token-refreshed",
            RunStage::Done => "done",
            RunStage::Failed => "failed",
        };
        f.write_str(label)
    }
}
