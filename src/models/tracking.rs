// Data models for frames exchanged with the hand tracker and the display side

use crate::models::gesture::GestureResult;
use crate::models::hand::{Handedness, Landmark};
use serde::{Deserialize, Serialize};

/// One hand as reported by the tracker. Landmarks are kept raw; their count is
/// only checked when the hand is classified.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackedHand {
    #[serde(default)]
    pub handedness: Option<Handedness>,
    #[serde(default = "default_score")]
    pub score: f64, // Detection confidence [0, 1]
    pub landmarks: Vec<Landmark>,
}

fn default_score() -> f64 {
    1.0
}

/// Tracker output for a single video frame
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackerFrame {
    pub timestamp_ms: i64,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub hands: Vec<TrackedHand>,
}

impl TrackerFrame {
    /// Frame with no detected hand
    pub fn empty(timestamp_ms: i64) -> Self {
        Self {
            timestamp_ms,
            ..Default::default()
        }
    }

    pub fn with_hand(timestamp_ms: i64, landmarks: Vec<Landmark>) -> Self {
        Self {
            timestamp_ms,
            width: 0,
            height: 0,
            hands: vec![TrackedHand {
                handedness: None,
                score: 1.0,
                landmarks,
            }],
        }
    }

    /// The hand that gets classified; extra hands are ignored
    pub fn primary_hand(&self) -> Option<&TrackedHand> {
        self.hands.first()
    }
}

/// Classification emitted by a recognition session for one processed frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GestureFrame {
    pub session_id: String,
    pub frame_index: u64,
    pub timestamp_ms: i64,
    pub recorded_at: i64, // Wall clock, unix millis
    pub result: GestureResult,
}
