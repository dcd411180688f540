//! Startup sequencer error types.

use super::SequencerState;
use thiserror::Error;

/// Startup sequencer error.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("startup already ran (state: {0})")]
    AlreadyStarted(SequencerState),
    #[error("configuration has not been loaded yet (state: {0})")]
    NotReady(SequencerState),
}
