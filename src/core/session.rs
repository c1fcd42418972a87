use crate::core::config::RecognitionConfig;
use crate::core::recognizer::{FrameOutcome, GestureRecognizer};
use crate::models::gesture::{RecognitionError, RecognitionResult};
use crate::models::tracking::{GestureFrame, TrackerFrame};
use crate::platform::tracker::HandTrackerBridge;
use std::sync::Arc;
use tokio::sync::{mpsc, RwLock};
use tracing::{debug, info, warn};
use uuid::Uuid;

// ==============================================================================
// Recognition Session
// ==============================================================================

/// Runs a recognizer on a background task. Frames go in through
/// `submit_frame`, classified frames come out of the receiver handed back by
/// `start_tracking`.
pub struct RecognitionSession {
    config: Arc<RwLock<RecognitionConfig>>,
    current_session_id: Arc<RwLock<Option<String>>>,
    is_tracking: Arc<RwLock<bool>>,
    frame_tx: Arc<RwLock<Option<mpsc::Sender<TrackerFrame>>>>,
}

impl RecognitionSession {
    pub fn new(config: RecognitionConfig) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            current_session_id: Arc::new(RwLock::new(None)),
            is_tracking: Arc::new(RwLock::new(false)),
            frame_tx: Arc::new(RwLock::new(None)),
        }
    }

    /// Start a new session. Returns its id and the stream of classified frames.
    pub async fn start_tracking(&self) -> RecognitionResult<(String, mpsc::Receiver<GestureFrame>)> {
        let mut is_tracking = self.is_tracking.write().await;
        if *is_tracking {
            return Err(RecognitionError::AlreadyRunning);
        }

        let config = self.config.read().await.clone();
        config.validate()?;

        let session_id = Uuid::new_v4().to_string();
        *self.current_session_id.write().await = Some(session_id.clone());

        let (tx, rx) = mpsc::channel::<TrackerFrame>(config.channel_capacity);
        let (result_tx, result_rx) = mpsc::channel::<GestureFrame>(config.channel_capacity);
        *self.frame_tx.write().await = Some(tx);

        *is_tracking = true;

        let recognizer = GestureRecognizer::new(config);
        let task_session_id = session_id.clone();
        tokio::spawn(async move {
            Self::process_frames(rx, result_tx, recognizer, task_session_id).await;
        });

        info!("Started gesture recognition session {}", session_id);
        Ok((session_id, result_rx))
    }

    /// Stop the session. Frames already submitted are still classified.
    pub async fn stop_tracking(&self) -> RecognitionResult<()> {
        let mut is_tracking = self.is_tracking.write().await;
        if !*is_tracking {
            return Ok(());
        }

        // Dropping the sender lets the processing task drain and exit
        *self.frame_tx.write().await = None;

        *is_tracking = false;
        let session_id = self.current_session_id.write().await.take();

        info!(
            "Stopped gesture recognition session {}",
            session_id.unwrap_or_default()
        );
        Ok(())
    }

    /// Queue a tracker frame for classification
    pub async fn submit_frame(&self, frame: TrackerFrame) -> RecognitionResult<()> {
        let tx = self.frame_tx.read().await.clone();
        match tx {
            Some(tx) => tx.send(frame).await.map_err(|_| RecognitionError::NotRunning),
            None => Err(RecognitionError::NotRunning),
        }
    }

    /// Feed every frame from a tracker into the running session.
    ///
    /// `HandTrackerBridge::next_frame` is synchronous, so a file-backed tracker
    /// blocks the calling worker between frames. Callers sharing a runtime with
    /// latency-sensitive tasks should drive the tracker from
    /// `tokio::task::spawn_blocking` and use `submit_frame` instead.
    pub async fn pump(&self, tracker: &mut dyn HandTrackerBridge) -> RecognitionResult<u64> {
        let mut submitted = 0;
        while let Some(frame) = tracker.next_frame()? {
            self.submit_frame(frame).await?;
            submitted += 1;
        }
        debug!(submitted, source = %tracker.get_model_info(), "tracker exhausted");
        Ok(submitted)
    }

    pub async fn is_tracking(&self) -> bool {
        *self.is_tracking.read().await
    }

    pub async fn session_id(&self) -> Option<String> {
        self.current_session_id.read().await.clone()
    }

    /// Replace the configuration used by the next session
    pub async fn update_config(&self, config: RecognitionConfig) -> RecognitionResult<()> {
        config.validate()?;
        *self.config.write().await = config;
        Ok(())
    }

    /// Background task classifying frames until the input channel closes
    async fn process_frames(
        mut rx: mpsc::Receiver<TrackerFrame>,
        result_tx: mpsc::Sender<GestureFrame>,
        mut recognizer: GestureRecognizer,
        session_id: String,
    ) {
        let mut frame_index = 0u64;

        while let Some(frame) = rx.recv().await {
            let index = frame_index;
            frame_index += 1;

            let result = match recognizer.process_frame(&frame) {
                FrameOutcome::Throttled => continue,
                FrameOutcome::Classified { result } => result,
            };

            let gesture_frame = GestureFrame {
                session_id: session_id.clone(),
                frame_index: index,
                timestamp_ms: frame.timestamp_ms,
                recorded_at: chrono::Utc::now().timestamp_millis(),
                result,
            };

            if result_tx.send(gesture_frame).await.is_err() {
                warn!("Result receiver dropped, ending session {}", session_id);
                break;
            }
        }

        let stats = recognizer.stats();
        debug!(
            session = %session_id,
            total = stats.total_frames,
            throttled = stats.throttled_frames,
            with_gesture = stats.frames_with_gesture,
            "recognition task finished"
        );
    }
}
