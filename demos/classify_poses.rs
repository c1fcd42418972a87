// Walks the bundled sample recording through the synchronous recognizer and
// prints what each stage of the classifier saw.
//
// Run with: cargo run --example classify_poses [recording.jsonl]

use anyhow::Result;
use gesture_lib::core::classifier;
use gesture_lib::core::config::RecognitionConfig;
use gesture_lib::core::recognizer::{FrameOutcome, GestureRecognizer};
use gesture_lib::platform::tracker::{HandTrackerBridge, ReplayTracker};
use std::path::PathBuf;

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("demos/data/sample_frames.jsonl"));

    let config = RecognitionConfig::default();
    let mut tracker = ReplayTracker::open(&path)?;
    let mut recognizer = GestureRecognizer::new(config.clone());

    println!("{}", tracker.get_model_info());

    while let Some(frame) = tracker.next_frame()? {
        let result = match recognizer.process_frame(&frame) {
            FrameOutcome::Throttled => continue,
            FrameOutcome::Classified { result } => result,
        };

        println!(
            "\n[{}ms] {} {}",
            frame.timestamp_ms,
            result.display_text(),
            result.confidence_text().unwrap_or_default()
        );

        let Some(hand) = frame.primary_hand() else {
            continue;
        };
        let Ok(set) = classifier::validate(&hand.landmarks) else {
            continue;
        };

        let analysis = classifier::analyze(&set);
        println!("  extended fingers: {:?}", analysis.features.extended);
        println!(
            "  thumb-pinky distance: {:.3}",
            analysis.features.thumb_pinky_distance
        );
        println!("  predicates matched: {:?}", analysis.predicates.matched());
        println!(
            "  overlay segments: {}",
            set.overlay_segments(config.frame_width, config.frame_height).len()
        );
    }

    let stats = recognizer.stats();
    println!(
        "\n{} frames, {} throttled, {} with a gesture",
        stats.total_frames, stats.throttled_frames, stats.frames_with_gesture
    );

    Ok(())
}
