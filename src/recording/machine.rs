use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

use super::state::RecordingState;
use crate::capture::{Authorization, CaptureEvent, SpeechCapture};
use crate::error::CommandError;

/// Controller for one voice capture session.
///
/// Not reentrant: at most one `Recording` state is active at a time,
/// enforced by no-op guards rather than a lock. The state value and the
/// live partial-transcript buffer are owned here exclusively; subscribers
/// observe transitions through [`RecordingMachine::subscribe`] and never
/// write them.
pub struct RecordingMachine {
    capture: Box<dyn SpeechCapture>,
    state_tx: watch::Sender<RecordingState>,
    authorization: Option<Authorization>,
    events_rx: Option<mpsc::UnboundedReceiver<CaptureEvent>>,
    partial: String,
    target: Option<String>,
}

impl RecordingMachine {
    pub fn new(capture: Box<dyn SpeechCapture>) -> Self {
        let (state_tx, _) = watch::channel(RecordingState::Idle);
        Self {
            capture,
            state_tx,
            authorization: None,
            events_rx: None,
            partial: String::new(),
            target: None,
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> RecordingState {
        self.state_tx.borrow().clone()
    }

    /// Subscribe to state transitions.
    pub fn subscribe(&self) -> watch::Receiver<RecordingState> {
        self.state_tx.subscribe()
    }

    /// Live interim transcript of the active session.
    pub fn partial_transcript(&self) -> &str {
        &self.partial
    }

    /// The exercise currently targeted by voice input, if any.
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// Ask the capture engine for permission. Must complete before
    /// [`RecordingMachine::start`] is accepted; a denial parks the machine
    /// in `AuthorizationDenied` until a later grant restores `Idle`.
    pub async fn request_authorization(&mut self) -> Result<Authorization, CommandError> {
        let authorization = self
            .capture
            .request_authorization()
            .await
            .map_err(|e| CommandError::Capture(e.to_string()))?;
        self.authorization = Some(authorization);

        match authorization {
            Authorization::Denied => {
                warn!("Speech capture authorization denied");
                self.set_state(RecordingState::AuthorizationDenied);
            }
            Authorization::Granted => {
                info!("Speech capture authorized");
                if self.state() == RecordingState::AuthorizationDenied {
                    self.set_state(RecordingState::Idle);
                }
            }
        }
        Ok(authorization)
    }

    /// Select the exercise that the next transcript should attach to.
    ///
    /// Rejected as a no-op (returns false) when a different target is picked
    /// mid-recording; only one exercise may be the active target at a time.
    pub fn select_target(&mut self, target: Option<String>) -> bool {
        if self.state().is_recording() && target != self.target {
            warn!(
                "Ignoring target change to {:?} while recording for {:?}",
                target, self.target
            );
            return false;
        }
        self.target = target;
        true
    }

    /// Open a capture session.
    ///
    /// A no-op returning the current state while already `Recording`; fails
    /// when authorization has not completed or was denied.
    pub async fn start(&mut self) -> Result<RecordingState, CommandError> {
        match self.authorization {
            None => return Err(CommandError::AuthorizationPending),
            Some(Authorization::Denied) => return Err(CommandError::AuthorizationDenied),
            Some(Authorization::Granted) => {}
        }

        if self.state().is_recording() {
            debug!("start ignored: already recording");
            return Ok(RecordingState::Recording);
        }

        let (tx, rx) = mpsc::unbounded_channel();
        self.capture
            .begin(tx)
            .await
            .map_err(|e| CommandError::Capture(e.to_string()))?;
        self.events_rx = Some(rx);
        self.partial.clear();
        info!("Recording started");
        self.set_state(RecordingState::Recording);
        Ok(RecordingState::Recording)
    }

    /// Close the capture session and hand back the final transcript.
    ///
    /// A no-op returning `None` unless currently `Recording`. The caller
    /// runs the parse/match pipeline synchronously on the returned
    /// transcript.
    pub async fn stop(&mut self) -> Result<Option<String>, CommandError> {
        if !self.state().is_recording() {
            debug!("stop ignored: not recording");
            return Ok(None);
        }

        self.pump_capture_events();
        let result = self.capture.end().await;
        self.events_rx = None;
        self.partial.clear();

        match result {
            Ok(transcript) => {
                info!("Recording stopped: {} chars", transcript.len());
                self.set_state(RecordingState::Stopped(transcript.clone()));
                Ok(Some(transcript))
            }
            Err(e) => {
                self.set_state(RecordingState::Idle);
                Err(CommandError::Capture(e.to_string()))
            }
        }
    }

    /// Force the machine back to `Idle`, discarding any partial transcript
    /// without invoking the parser.
    pub async fn cancel(&mut self) {
        if self.state().is_recording() {
            if let Err(e) = self.capture.abort().await {
                warn!("Failed to abort capture session: {}", e);
            }
        }
        self.events_rx = None;
        self.partial.clear();
        self.target = None;
        info!("Recording cancelled");
        self.set_state(RecordingState::Idle);
    }

    /// Drain pending engine callbacks into the partial buffer.
    pub fn pump_capture_events(&mut self) {
        let Some(rx) = self.events_rx.as_mut() else {
            return;
        };
        while let Ok(event) = rx.try_recv() {
            match event {
                CaptureEvent::Partial(text) => self.partial = text,
                CaptureEvent::Error(message) => {
                    warn!("Capture engine error: {}", message);
                }
            }
        }
    }

    fn set_state(&self, next: RecordingState) {
        if *self.state_tx.borrow() != next {
            debug!("Recording state -> {}", next.as_str());
            self.state_tx.send_replace(next);
        }
    }
}
