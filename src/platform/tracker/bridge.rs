// Hand tracker integration bridge
// Abstracts over whatever produces hand landmarks (a live MediaPipe-style model,
// a recorded session, ...). The classifier only ever sees its output.

use crate::core::config::RecognitionConfig;
use crate::models::gesture::RecognitionResult;
use crate::models::tracking::TrackerFrame;
use tracing::info;

/// Hand tracker bridge trait
/// Implement this for each landmark source
pub trait HandTrackerBridge: Send {
    /// Produce the next frame, or `None` when the source is exhausted
    fn next_frame(&mut self) -> RecognitionResult<Option<TrackerFrame>>;

    /// Check if the tracker is ready to produce frames
    fn is_initialized(&self) -> bool;

    /// Get model / source info
    fn get_model_info(&self) -> String;
}

// ==============================================================================
// Dummy Implementation (no landmark source)
// ==============================================================================

/// Tracker that never reports a frame. Stands in where no model is wired up.
pub struct DummyTracker {
    config: RecognitionConfig,
}

impl DummyTracker {
    pub fn new(config: &RecognitionConfig) -> Self {
        info!("Using dummy hand tracker (no inference)");
        Self {
            config: config.clone(),
        }
    }
}

impl HandTrackerBridge for DummyTracker {
    fn next_frame(&mut self) -> RecognitionResult<Option<TrackerFrame>> {
        Ok(None)
    }

    fn is_initialized(&self) -> bool {
        false
    }

    fn get_model_info(&self) -> String {
        format!(
            "Dummy hand tracker (no inference, max_hands={})",
            self.config.max_hands
        )
    }
}
