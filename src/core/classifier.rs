// Gesture classification entry points
//
// Stateless: every call re-derives features from the landmarks it is given and
// returns a fresh result. Safe to call from any thread.

use crate::core::features::FeatureSnapshot;
use crate::core::predicates::GesturePredicates;
use crate::core::resolver;
use crate::models::gesture::{GestureResult, RecognitionError, RecognitionResult};
use crate::models::hand::{Landmark, LandmarkSet};
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

/// Full classification output, including the intermediate pipeline stages
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub result: GestureResult,
    pub features: FeatureSnapshot,
    pub predicates: GesturePredicates,
}

/// Classify one hand
pub fn classify(landmarks: &LandmarkSet) -> GestureResult {
    analyze(landmarks).result
}

/// Classify one hand and keep the feature snapshot and predicate outcomes
pub fn analyze(landmarks: &LandmarkSet) -> Classification {
    let features = FeatureSnapshot::extract(landmarks);
    let predicates = GesturePredicates::evaluate(landmarks, &features);
    let result = resolver::resolve(&predicates);

    trace!(
        label = ?result.label,
        matched = ?predicates.matched(),
        extended = ?features.extended,
        "classified hand"
    );

    Classification {
        result,
        features,
        predicates,
    }
}

/// Check raw tracker output against the 21-point contract
pub fn validate(landmarks: &[Landmark]) -> RecognitionResult<LandmarkSet> {
    let set = LandmarkSet::try_from(landmarks)?;
    match set.first_non_finite() {
        Some(index) => Err(RecognitionError::NonFiniteLandmark(index)),
        None => Ok(set),
    }
}

/// Classify raw tracker output for one frame.
///
/// Absent or empty input means no hand was detected. Malformed input (wrong
/// landmark count, NaN or infinite coordinates) also yields "no gesture" so a
/// single bad frame never interrupts a running pipeline.
pub fn classify_landmarks(landmarks: Option<&[Landmark]>) -> GestureResult {
    let landmarks = match landmarks {
        Some(l) if !l.is_empty() => l,
        _ => {
            trace!("no hand in frame");
            return GestureResult::none();
        }
    };

    match validate(landmarks) {
        Ok(set) => classify(&set),
        Err(e) => {
            warn!("Skipping malformed hand landmarks: {}", e);
            GestureResult::none()
        }
    }
}
