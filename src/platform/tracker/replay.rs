// Replay backend - reads recorded tracker output, one JSON frame per line

use super::bridge::HandTrackerBridge;
use crate::models::gesture::{RecognitionError, RecognitionResult};
use crate::models::tracking::TrackerFrame;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;
use tracing::debug;

pub struct ReplayTracker<R: BufRead> {
    lines: Lines<R>,
    line_number: usize,
    source: String,
    default_size: Option<(u32, u32)>,
}

impl ReplayTracker<BufReader<File>> {
    /// Open a JSON-lines recording
    pub fn open(path: &Path) -> RecognitionResult<Self> {
        let file = File::open(path).map_err(|e| {
            RecognitionError::TrackerUnavailable(format!("{}: {}", path.display(), e))
        })?;
        let mut tracker = Self::from_reader(BufReader::new(file));
        tracker.source = path.display().to_string();
        Ok(tracker)
    }
}

impl<R: BufRead> ReplayTracker<R> {
    pub fn from_reader(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_number: 0,
            source: "<reader>".to_string(),
            default_size: None,
        }
    }

    /// Frame size filled into recorded frames that carry none
    pub fn with_frame_size(mut self, width: u32, height: u32) -> Self {
        self.default_size = Some((width, height));
        self
    }
}

impl<R: BufRead + Send> HandTrackerBridge for ReplayTracker<R> {
    fn next_frame(&mut self) -> RecognitionResult<Option<TrackerFrame>> {
        for line in self.lines.by_ref() {
            let line = line?;
            self.line_number += 1;

            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let mut frame: TrackerFrame =
                serde_json::from_str(trimmed).map_err(|source| RecognitionError::ReplayParse {
                    line: self.line_number,
                    source,
                })?;

            if let Some((width, height)) = self.default_size {
                if frame.width == 0 || frame.height == 0 {
                    frame.width = width;
                    frame.height = height;
                }
            }

            debug!(
                line = self.line_number,
                hands = frame.hands.len(),
                "replayed frame"
            );
            return Ok(Some(frame));
        }

        Ok(None)
    }

    fn is_initialized(&self) -> bool {
        true
    }

    fn get_model_info(&self) -> String {
        format!("Replay tracker ({})", self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const RECORDING: &str = r#"
# recorded at 30fps
{"timestamp_ms": 0, "width": 1280, "height": 720, "hands": []}

{"timestamp_ms": 33, "hands": [{"handedness": "right", "score": 0.9, "landmarks": [{"x": 0.5, "y": 0.5, "z": 0.0}]}]}
"#;

    #[test]
    fn test_reads_frames_and_skips_comments() {
        let mut tracker = ReplayTracker::from_reader(Cursor::new(RECORDING)).with_frame_size(640, 480);
        assert!(tracker.is_initialized());

        let first = tracker.next_frame().unwrap().unwrap();
        assert_eq!(first.timestamp_ms, 0);
        assert_eq!((first.width, first.height), (1280, 720));
        assert!(first.hands.is_empty());

        let second = tracker.next_frame().unwrap().unwrap();
        assert_eq!(second.timestamp_ms, 33);
        assert_eq!((second.width, second.height), (640, 480));
        assert_eq!(second.hands[0].score, 0.9);

        assert!(tracker.next_frame().unwrap().is_none());
    }

    #[test]
    fn test_parse_error_reports_line() {
        let mut tracker = ReplayTracker::from_reader(Cursor::new("{\"timestamp_ms\": 0}\n{oops}\n"));
        assert!(tracker.next_frame().unwrap().is_some());

        match tracker.next_frame() {
            Err(RecognitionError::ReplayParse { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file_is_tracker_unavailable() {
        let result = ReplayTracker::open(Path::new("/nonexistent/recording.jsonl"));
        assert!(matches!(result, Err(RecognitionError::TrackerUnavailable(_))));
    }
}
