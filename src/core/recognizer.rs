// Per-frame recognizer - applies detection throttling and hand selection
// before handing landmarks to the classifier

use crate::core::classifier;
use crate::core::config::RecognitionConfig;
use crate::models::gesture::GestureResult;
use crate::models::tracking::TrackerFrame;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// What happened to a frame passed to the recognizer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FrameOutcome {
    /// Arrived inside the detection interval; not classified
    Throttled,
    /// Classified (possibly as "no gesture")
    Classified { result: GestureResult },
}

impl FrameOutcome {
    pub fn result(&self) -> Option<GestureResult> {
        match self {
            FrameOutcome::Throttled => None,
            FrameOutcome::Classified { result } => Some(*result),
        }
    }
}

/// Running counters for a recognizer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecognizerStats {
    pub total_frames: u64,
    pub throttled_frames: u64,
    pub frames_with_hand: u64,
    pub frames_with_gesture: u64,
}

pub struct GestureRecognizer {
    config: RecognitionConfig,
    last_detection_ms: Option<i64>,
    stats: RecognizerStats,
}

impl GestureRecognizer {
    pub fn new(config: RecognitionConfig) -> Self {
        Self {
            config,
            last_detection_ms: None,
            stats: RecognizerStats::default(),
        }
    }

    pub fn config(&self) -> &RecognitionConfig {
        &self.config
    }

    pub fn stats(&self) -> &RecognizerStats {
        &self.stats
    }

    /// Process one tracker frame.
    ///
    /// Frames closer than `detection_interval_ms` to the last classified frame
    /// are skipped. The first frame is always classified, and so is a frame
    /// whose timestamp is older than the last classified one (tracker clock
    /// reset, concatenated recordings). Only the first
    /// reported hand is looked at, and a hand scored below
    /// `min_detection_confidence` counts as absent.
    pub fn process_frame(&mut self, frame: &TrackerFrame) -> FrameOutcome {
        self.stats.total_frames += 1;

        if self.is_throttled(frame.timestamp_ms) {
            self.stats.throttled_frames += 1;
            trace!(timestamp_ms = frame.timestamp_ms, "frame throttled");
            return FrameOutcome::Throttled;
        }
        self.last_detection_ms = Some(frame.timestamp_ms);

        let hand = frame
            .primary_hand()
            .filter(|hand| hand.score >= self.config.min_detection_confidence);

        if frame.hands.len() > 1 {
            debug!(
                hands = frame.hands.len(),
                "more than one hand reported, classifying the first"
            );
        }

        let result = classifier::classify_landmarks(hand.map(|h| h.landmarks.as_slice()));

        if hand.is_some() {
            self.stats.frames_with_hand += 1;
        }
        if !result.is_none() {
            self.stats.frames_with_gesture += 1;
        }

        debug!(
            timestamp_ms = frame.timestamp_ms,
            handedness = hand
                .and_then(|h| h.handedness)
                .map(|h| h.as_str())
                .unwrap_or("unknown"),
            gesture = result.label.map(|l| l.as_str()).unwrap_or("none"),
            "frame classified"
        );

        FrameOutcome::Classified { result }
    }

    /// Forget the throttle position and counters
    pub fn reset(&mut self) {
        self.last_detection_ms = None;
        self.stats = RecognizerStats::default();
    }

    fn is_throttled(&self, timestamp_ms: i64) -> bool {
        let Some(last) = self.last_detection_ms else {
            return false;
        };

        if timestamp_ms < last {
            debug!(last, timestamp_ms, "timestamp went backwards, restarting throttle");
            return false;
        }

        let interval = i64::try_from(self.config.detection_interval_ms).unwrap_or(i64::MAX);
        timestamp_ms.saturating_sub(last) < interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fixtures;
    use crate::models::gesture::GestureLabel;
    use crate::models::hand::Landmark;
    use crate::models::tracking::TrackedHand;

    fn hand_frame(timestamp_ms: i64, landmarks: Vec<Landmark>) -> TrackerFrame {
        TrackerFrame::with_hand(timestamp_ms, landmarks)
    }

    #[test]
    fn test_throttles_inside_interval() {
        let mut recognizer = GestureRecognizer::new(RecognitionConfig::default());
        let hello = fixtures::flatten(&fixtures::hello());

        let first = recognizer.process_frame(&hand_frame(1_000, hello.clone()));
        assert_eq!(first.result().and_then(|r| r.label), Some(GestureLabel::Hello));

        // 33ms later at 30fps: skipped
        assert_eq!(recognizer.process_frame(&hand_frame(1_033, hello.clone())), FrameOutcome::Throttled);
        assert_eq!(recognizer.process_frame(&hand_frame(1_099, hello.clone())), FrameOutcome::Throttled);

        let later = recognizer.process_frame(&hand_frame(1_100, hello));
        assert!(matches!(later, FrameOutcome::Classified { .. }));

        let stats = recognizer.stats();
        assert_eq!(stats.total_frames, 4);
        assert_eq!(stats.throttled_frames, 2);
        assert_eq!(stats.frames_with_gesture, 2);
    }

    #[test]
    fn test_zero_interval_disables_throttle() {
        let config = RecognitionConfig {
            detection_interval_ms: 0,
            ..Default::default()
        };
        let mut recognizer = GestureRecognizer::new(config);
        for _ in 0..3 {
            let outcome = recognizer.process_frame(&TrackerFrame::empty(5));
            assert_eq!(outcome, FrameOutcome::Classified { result: GestureResult::none() });
        }
    }

    #[test]
    fn test_empty_frame_clears_gesture() {
        let mut recognizer = GestureRecognizer::new(RecognitionConfig::default());
        recognizer.process_frame(&hand_frame(0, fixtures::flatten(&fixtures::call())));

        let outcome = recognizer.process_frame(&TrackerFrame::empty(200));
        assert_eq!(outcome.result(), Some(GestureResult::none()));
        assert_eq!(recognizer.stats().frames_with_hand, 1);
    }

    #[test]
    fn test_low_score_hand_is_ignored() {
        let mut recognizer = GestureRecognizer::new(RecognitionConfig::default());
        let frame = TrackerFrame {
            timestamp_ms: 0,
            width: 640,
            height: 480,
            hands: vec![TrackedHand {
                handedness: None,
                score: 0.2,
                landmarks: fixtures::flatten(&fixtures::hello()),
            }],
        };

        assert_eq!(recognizer.process_frame(&frame).result(), Some(GestureResult::none()));
        assert_eq!(recognizer.stats().frames_with_hand, 0);
    }

    #[test]
    fn test_only_first_hand_classified() {
        let mut recognizer = GestureRecognizer::new(RecognitionConfig::default());
        let mut frame = hand_frame(0, fixtures::flatten(&fixtures::angry()));
        frame.hands.push(TrackedHand {
            handedness: None,
            score: 1.0,
            landmarks: fixtures::flatten(&fixtures::call()),
        });

        let result = recognizer.process_frame(&frame).result().unwrap();
        assert_eq!(result.label, Some(GestureLabel::Angry));
    }

    #[test]
    fn test_malformed_hand_does_not_stop_stream() {
        let mut recognizer = GestureRecognizer::new(RecognitionConfig::default());
        let broken = recognizer.process_frame(&hand_frame(0, vec![Landmark::default(); 7]));
        assert_eq!(broken.result(), Some(GestureResult::none()));

        let next = recognizer.process_frame(&hand_frame(100, fixtures::flatten(&fixtures::hello())));
        assert_eq!(next.result().and_then(|r| r.label), Some(GestureLabel::Hello));
    }

    #[test]
    fn test_extreme_timestamps_do_not_overflow() {
        let mut recognizer = GestureRecognizer::new(RecognitionConfig::default());
        assert!(matches!(
            recognizer.process_frame(&TrackerFrame::empty(i64::MIN)),
            FrameOutcome::Classified { .. }
        ));
        assert!(matches!(
            recognizer.process_frame(&TrackerFrame::empty(0)),
            FrameOutcome::Classified { .. }
        ));
        assert!(matches!(
            recognizer.process_frame(&TrackerFrame::empty(i64::MAX)),
            FrameOutcome::Classified { .. }
        ));
        assert_eq!(
            recognizer.process_frame(&TrackerFrame::empty(i64::MAX)),
            FrameOutcome::Throttled
        );
    }

    #[test]
    fn test_max_interval_does_not_overflow() {
        let config = RecognitionConfig {
            detection_interval_ms: 10_000,
            ..Default::default()
        };
        let mut recognizer = GestureRecognizer::new(config);
        recognizer.process_frame(&TrackerFrame::empty(i64::MIN));
        assert!(matches!(
            recognizer.process_frame(&TrackerFrame::empty(i64::MAX)),
            FrameOutcome::Classified { .. }
        ));
    }

    #[test]
    fn test_backwards_timestamp_restarts_throttle() {
        let mut recognizer = GestureRecognizer::new(RecognitionConfig::default());
        recognizer.process_frame(&TrackerFrame::empty(5_000));
        assert_eq!(recognizer.process_frame(&TrackerFrame::empty(5_050)), FrameOutcome::Throttled);

        // Second recording starts again at zero
        assert!(matches!(
            recognizer.process_frame(&TrackerFrame::empty(0)),
            FrameOutcome::Classified { .. }
        ));
        assert_eq!(recognizer.process_frame(&TrackerFrame::empty(33)), FrameOutcome::Throttled);
        assert!(matches!(
            recognizer.process_frame(&TrackerFrame::empty(100)),
            FrameOutcome::Classified { .. }
        ));
    }

    #[test]
    fn test_reset() {
        let mut recognizer = GestureRecognizer::new(RecognitionConfig::default());
        recognizer.process_frame(&TrackerFrame::empty(0));
        recognizer.reset();
        assert_eq!(recognizer.stats(), &RecognizerStats::default());
        assert!(matches!(
            recognizer.process_frame(&TrackerFrame::empty(1)),
            FrameOutcome::Classified { .. }
        ));
    }
}
