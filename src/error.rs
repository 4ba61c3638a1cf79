//! Domain errors for the voice command pipeline.

use thiserror::Error;

/// Errors surfaced by parsing, matching and the recording session.
///
/// Every variant is recoverable at the caller level; the display strings are
/// the user-facing messages shown next to the voice card.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Could not parse command. Try saying: '100 kg 5 reps' or 'Bench Press 100 kg 5 reps'")]
    Unparseable,

    #[error("Speech recognition permission was denied. Enable it in system settings to use voice logging.")]
    AuthorizationDenied,

    #[error("Speech recognition permission has not been requested yet")]
    AuthorizationPending,

    #[error("No exercise selected. Please add an exercise first or say the exercise name.")]
    NoActiveExercise,

    #[error("Speech capture failed: {0}")]
    Capture(String),
}
