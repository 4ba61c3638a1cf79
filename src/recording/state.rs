//! Recording session state.

use serde::{Deserialize, Serialize};

/// State of one voice capture session.
///
/// Owned by the controller; transitions are the only mutations and each one
/// is published on the controller's watch channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "transcript", rename_all = "snake_case")]
pub enum RecordingState {
    Idle,
    /// Capture permission was refused; not retryable until the user changes
    /// the system permission externally.
    AuthorizationDenied,
    Recording,
    /// Resting state after a stop, remembering the final transcript.
    Stopped(String),
}

impl RecordingState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::AuthorizationDenied => "authorization_denied",
            Self::Recording => "recording",
            Self::Stopped(_) => "stopped",
        }
    }

    /// Whether a new capture session may start from this state.
    pub fn is_resting(&self) -> bool {
        matches!(self, Self::Idle | Self::Stopped(_))
    }

    pub fn is_recording(&self) -> bool {
        matches!(self, Self::Recording)
    }
}
