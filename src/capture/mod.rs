//! Speech capture abstraction.
//!
//! Audio-to-text is an external capability; the controller only ever talks
//! to this port. Real engines live outside the crate.

mod scripted;

pub use scripted::ScriptedCapture;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::mpsc;

/// Result of an authorization request against the capture engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Authorization {
    Granted,
    Denied,
}

/// Events pushed by the engine while a capture session is live.
#[derive(Debug, Clone)]
pub enum CaptureEvent {
    /// Cumulative interim transcript; each event replaces the previous one.
    Partial(String),
    /// Engine-side failure. The session stays open until ended or aborted.
    Error(String),
}

/// Port for a speech capture engine.
///
/// Lifecycle: `request_authorization` once, then any number of
/// `begin`/`end` cycles. `abort` discards the session without producing a
/// transcript.
#[async_trait]
pub trait SpeechCapture: Send + Sync {
    /// Ask the platform for capture permission.
    async fn request_authorization(&mut self) -> Result<Authorization>;

    /// Open a capture session, pushing interim results into `events`.
    async fn begin(&mut self, events: mpsc::UnboundedSender<CaptureEvent>) -> Result<()>;

    /// Close the session and return the final transcript.
    async fn end(&mut self) -> Result<String>;

    /// Tear the session down, discarding anything captured.
    async fn abort(&mut self) -> Result<()>;
}
