//! Deterministic capture engine for tests and the CLI session mode.

use anyhow::{bail, Result};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};

use super::{Authorization, CaptureEvent, SpeechCapture};

struct ScriptedInner {
    authorization: Authorization,
    utterances: VecDeque<Vec<String>>,
    current: Option<String>,
    begins: usize,
}

/// A capture engine that replays queued utterances.
///
/// Each queued utterance is a sequence of cumulative partial transcripts;
/// `begin` pops the next utterance and emits its partials, `end` returns the
/// last partial as the final transcript. Clones share the same queue, so a
/// handle kept outside the controller can keep feeding it.
#[derive(Clone)]
pub struct ScriptedCapture {
    inner: Arc<Mutex<ScriptedInner>>,
}

impl ScriptedCapture {
    pub fn new() -> Self {
        Self::with_authorization(Authorization::Granted)
    }

    pub fn with_authorization(authorization: Authorization) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ScriptedInner {
                authorization,
                utterances: VecDeque::new(),
                current: None,
                begins: 0,
            })),
        }
    }

    /// Queue the partial-transcript sequence for one future capture session.
    pub async fn queue_utterance<I, S>(&self, partials: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let partials: Vec<String> = partials.into_iter().map(Into::into).collect();
        self.inner.lock().await.utterances.push_back(partials);
    }

    /// How many capture sessions have been opened.
    pub async fn begin_count(&self) -> usize {
        self.inner.lock().await.begins
    }
}

impl Default for ScriptedCapture {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SpeechCapture for ScriptedCapture {
    async fn request_authorization(&mut self) -> Result<Authorization> {
        Ok(self.inner.lock().await.authorization)
    }

    async fn begin(&mut self, events: mpsc::UnboundedSender<CaptureEvent>) -> Result<()> {
        let mut inner = self.inner.lock().await;
        if inner.current.is_some() {
            bail!("Capture session already open");
        }

        let partials = inner.utterances.pop_front().unwrap_or_default();
        for partial in &partials {
            let _ = events.send(CaptureEvent::Partial(partial.clone()));
        }
        inner.current = Some(partials.last().cloned().unwrap_or_default());
        inner.begins += 1;
        Ok(())
    }

    async fn end(&mut self) -> Result<String> {
        let mut inner = self.inner.lock().await;
        match inner.current.take() {
            Some(transcript) => Ok(transcript),
            None => bail!("No capture session open"),
        }
    }

    async fn abort(&mut self) -> Result<()> {
        self.inner.lock().await.current = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_capture_replays_partials() {
        let mut capture = ScriptedCapture::new();
        capture
            .queue_utterance(["Bench", "Bench Press 100", "Bench Press 100 kg 5 reps"])
            .await;

        let (tx, mut rx) = mpsc::unbounded_channel();
        capture.begin(tx).await.unwrap();

        let mut partials = Vec::new();
        while let Ok(CaptureEvent::Partial(text)) = rx.try_recv() {
            partials.push(text);
        }
        assert_eq!(partials.len(), 3);

        let transcript = capture.end().await.unwrap();
        assert_eq!(transcript, "Bench Press 100 kg 5 reps");
    }

    #[tokio::test]
    async fn test_scripted_capture_end_without_begin_fails() {
        let mut capture = ScriptedCapture::new();
        assert!(capture.end().await.is_err());
    }

    #[tokio::test]
    async fn test_scripted_capture_abort_discards() {
        let mut capture = ScriptedCapture::new();
        capture.queue_utterance(["Squat 80"]).await;

        let (tx, _rx) = mpsc::unbounded_channel();
        capture.begin(tx).await.unwrap();
        capture.abort().await.unwrap();
        assert!(capture.end().await.is_err());
    }

    #[tokio::test]
    async fn test_scripted_capture_clones_share_queue() {
        let mut capture = ScriptedCapture::new();
        let handle = capture.clone();
        handle.queue_utterance(["Deadlift 140 kg 3 reps"]).await;

        let (tx, _rx) = mpsc::unbounded_channel();
        capture.begin(tx).await.unwrap();
        assert_eq!(capture.end().await.unwrap(), "Deadlift 140 kg 3 reps");
        assert_eq!(handle.begin_count().await, 1);
    }
}
