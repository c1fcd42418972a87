// Data models for gesture classification results and errors

use serde::{Deserialize, Serialize};
use std::fmt;

// ==============================================================================
// Gesture Label
// ==============================================================================

/// Closed set of gestures the classifier can report.
///
/// Display names follow the recognition page rather than the geometric pose:
/// the OK-sign reports `Super` and the gun pose reports `Happy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureLabel {
    /// Thumb and pinky spread, middle and ring folded (🤙)
    Call,
    /// Index and middle raised together (✌️)
    Victory,
    /// OK-sign: thumb touching index, other fingers raised (👌)
    Super,
    /// Gun: index raised, thumb level with its MCP (🔫)
    Happy,
    /// Index raised alone (👆)
    Pointing,
    /// Open hand, all fingertips level (👋)
    Hello,
    /// Thumbs up (👍)
    Like,
    /// Thumbs down (👎)
    Dislike,
    /// Three fingers raised
    Friends,
    /// Index and pinky raised, spread apart (🤟)
    ILoveYou,
    /// Pinky raised alone
    Angry,
}

impl GestureLabel {
    pub const ALL: [GestureLabel; 11] = [
        GestureLabel::Call,
        GestureLabel::Victory,
        GestureLabel::Super,
        GestureLabel::Happy,
        GestureLabel::Pointing,
        GestureLabel::Hello,
        GestureLabel::Like,
        GestureLabel::Dislike,
        GestureLabel::Friends,
        GestureLabel::ILoveYou,
        GestureLabel::Angry,
    ];

    /// Stable identifier used in JSON output and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            GestureLabel::Call => "call",
            GestureLabel::Victory => "victory",
            GestureLabel::Super => "super",
            GestureLabel::Happy => "happy",
            GestureLabel::Pointing => "pointing",
            GestureLabel::Hello => "hello",
            GestureLabel::Like => "like",
            GestureLabel::Dislike => "dislike",
            GestureLabel::Friends => "friends",
            GestureLabel::ILoveYou => "i_love_you",
            GestureLabel::Angry => "angry",
        }
    }

    /// Human readable name shown next to the video feed
    pub fn display_name(&self) -> &'static str {
        match self {
            GestureLabel::Call => "Call",
            GestureLabel::Victory => "Victory",
            GestureLabel::Super => "Super",
            GestureLabel::Happy => "Happy",
            GestureLabel::Pointing => "Pointing",
            GestureLabel::Hello => "Hello",
            GestureLabel::Like => "Like",
            GestureLabel::Dislike => "Dislike",
            GestureLabel::Friends => "Friends",
            GestureLabel::ILoveYou => "I Love You",
            GestureLabel::Angry => "Angry",
        }
    }

    /// Fixed calibration trust for this label, independent of the frame
    pub fn confidence(&self) -> f64 {
        match self {
            GestureLabel::Like => 0.9,
            _ => 0.95,
        }
    }
}

impl fmt::Display for GestureLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// ==============================================================================
// Gesture Result
// ==============================================================================

/// Outcome of classifying one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureResult {
    pub label: Option<GestureLabel>,
    pub confidence: f64, // [0, 1]
}

impl GestureResult {
    pub fn none() -> Self {
        Self {
            label: None,
            confidence: 0.0,
        }
    }

    pub fn detected(label: GestureLabel) -> Self {
        Self {
            label: Some(label),
            confidence: label.confidence(),
        }
    }

    pub fn is_none(&self) -> bool {
        self.label.is_none()
    }

    pub fn display_text(&self) -> &'static str {
        match self.label {
            Some(label) => label.display_name(),
            None => "No gesture detected",
        }
    }

    /// Confidence line shown under the label; empty when nothing was detected
    pub fn confidence_text(&self) -> Option<String> {
        self.label
            .map(|_| format!("Confidence: {:.1}%", self.confidence * 100.0))
    }
}

impl Default for GestureResult {
    fn default() -> Self {
        Self::none()
    }
}

// ==============================================================================
// Error Types
// ==============================================================================

#[derive(Debug, thiserror::Error)]
pub enum RecognitionError {
    #[error("Expected 21 hand landmarks, got {0}")]
    InvalidLandmarkCount(usize),

    #[error("Landmark {0} has a non-finite coordinate")]
    NonFiniteLandmark(usize),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Recognition session already running")]
    AlreadyRunning,

    #[error("Recognition session not running")]
    NotRunning,

    #[error("Hand tracker unavailable: {0}")]
    TrackerUnavailable(String),

    #[error("Replay line {line} could not be parsed: {source}")]
    ReplayParse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type RecognitionResult<T> = Result<T, RecognitionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_constants() {
        assert_eq!(GestureLabel::Like.confidence(), 0.9);
        for label in GestureLabel::ALL {
            if label != GestureLabel::Like {
                assert_eq!(label.confidence(), 0.95, "{:?}", label);
            }
        }
    }

    #[test]
    fn test_display_text() {
        assert_eq!(GestureResult::none().display_text(), "No gesture detected");
        assert_eq!(GestureResult::none().confidence_text(), None);

        let result = GestureResult::detected(GestureLabel::ILoveYou);
        assert_eq!(result.display_text(), "I Love You");
        assert_eq!(result.confidence_text().as_deref(), Some("Confidence: 95.0%"));

        let like = GestureResult::detected(GestureLabel::Like);
        assert_eq!(like.confidence_text().as_deref(), Some("Confidence: 90.0%"));
    }

    #[test]
    fn test_label_serialization() {
        let json = serde_json::to_string(&GestureResult::detected(GestureLabel::ILoveYou)).unwrap();
        assert_eq!(json, r#"{"label":"i_love_you","confidence":0.95}"#);

        let json = serde_json::to_string(&GestureResult::none()).unwrap();
        assert_eq!(json, r#"{"label":null,"confidence":0.0}"#);
    }

    #[test]
    fn test_as_str_matches_serde_name() {
        for label in GestureLabel::ALL {
            let json = serde_json::to_string(&label).unwrap();
            assert_eq!(json, format!("\"{}\"", label.as_str()));
        }
    }
}
