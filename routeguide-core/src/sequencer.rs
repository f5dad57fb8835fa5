//! # Sequencer
//!
//! Runs the four demos of a [`Tour`] strictly one after the other.
//!
//! The sequencer is a small state machine:
//!
//! ```text
//! NotStarted -> RunningUnary -> RunningServerStream -> RunningClientStream -> RunningBidi -> Done
//!                    |                  |                       |                  |
//!                    +------------------+-----------------------+------------------+-> Failed
//! ```
//!
//! A stage is only entered once the previous one completed successfully. The first failing
//! demo moves the sequencer to [`Stage::Failed`] and later demos never start.
use crate::DemoError;
use std::{fmt, sync::Arc};

/// The states a [`Sequencer`] moves through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    NotStarted,
    RunningUnary,
    RunningServerStream,
    RunningClientStream,
    RunningBidi,
    Done,
    Failed,
}

impl Stage {
    /// The stage entered once this one completes successfully.
    fn next(self) -> Option<Stage> {
        match self {
            Stage::NotStarted => Some(Stage::RunningUnary),
            Stage::RunningUnary => Some(Stage::RunningServerStream),
            Stage::RunningServerStream => Some(Stage::RunningClientStream),
            Stage::RunningClientStream => Some(Stage::RunningBidi),
            Stage::RunningBidi => Some(Stage::Done),
            Stage::Done | Stage::Failed => None,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::NotStarted => "not started",
            Stage::RunningUnary => "unary demo",
            Stage::RunningServerStream => "server streaming demo",
            Stage::RunningClientStream => "client streaming demo",
            Stage::RunningBidi => "bidirectional streaming demo",
            Stage::Done => "done",
            Stage::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// The error that halted a sequence, along with the stage it happened in.
///
/// The sequencer keeps a copy after failing, so the source is shared.
#[derive(Debug, Clone, thiserror::Error)]
#[error("The {stage} failed: {source}")]
pub struct SequenceError {
    pub stage: Stage,
    #[source]
    pub source: Arc<DemoError>,
}

/// One entry point per demo, in the order the sequencer runs them.
#[allow(async_fn_in_trait)]
pub trait Tour {
    async fn unary(&mut self) -> Result<(), DemoError>;
    async fn server_stream(&mut self) -> Result<(), DemoError>;
    async fn client_stream(&mut self) -> Result<(), DemoError>;
    async fn bidi(&mut self) -> Result<(), DemoError>;
}

/// Drives a [`Tour`] through the [`Stage`]s and remembers how it ended.
#[derive(Debug)]
pub struct Sequencer {
    stage: Stage,
    failure: Option<SequenceError>,
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl Sequencer {
    /// Creates a sequencer in [`Stage::NotStarted`].
    pub fn new() -> Self {
        Self {
            stage: Stage::NotStarted,
            failure: None,
        }
    }

    /// The stage the sequencer is currently in.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// The error that moved the sequencer to [`Stage::Failed`], if any.
    pub fn failure(&self) -> Option<&SequenceError> {
        self.failure.as_ref()
    }

    /// Runs every demo of `tour` in order.
    ///
    /// Returns the first error together with the stage that produced it. A sequencer runs
    /// once: calling `run` again starts no demo and returns the outcome of the first run.
    pub async fn run<T: Tour>(&mut self, tour: &mut T) -> Result<(), SequenceError> {
        if self.stage != Stage::NotStarted {
            tracing::debug!(stage = %self.stage, "sequencer already ran");
            return self.failure.clone().map_or(Ok(()), Err);
        }

        while let Some(next) = self.stage.next() {
            self.stage = next;
            tracing::info!(stage = %next, "entering stage");

            let outcome = match next {
                Stage::RunningUnary => tour.unary().await,
                Stage::RunningServerStream => tour.server_stream().await,
                Stage::RunningClientStream => tour.client_stream().await,
                Stage::RunningBidi => tour.bidi().await,
                Stage::NotStarted | Stage::Done | Stage::Failed => Ok(()),
            };

            if let Err(source) = outcome {
                tracing::error!(stage = %next, error = %source, "halting tour");
                let failure = SequenceError {
                    stage: next,
                    source: Arc::new(source),
                };
                self.stage = Stage::Failed;
                self.failure = Some(failure.clone());
                return Err(failure);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stages_advance_in_order() {
        let mut stage = Stage::NotStarted;
        let mut visited = vec![stage];

        while let Some(next) = stage.next() {
            visited.push(next);
            stage = next;
        }

        assert_eq!(
            visited,
            [
                Stage::NotStarted,
                Stage::RunningUnary,
                Stage::RunningServerStream,
                Stage::RunningClientStream,
                Stage::RunningBidi,
                Stage::Done,
            ]
        );
        assert_eq!(stage, Stage::Done);
        assert_eq!(Stage::Failed.next(), None);
    }
}
