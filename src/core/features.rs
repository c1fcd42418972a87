// Feature extraction - geometric measurements derived from one landmark set

use crate::models::hand::{Finger, HandLandmark, LandmarkSet};
use serde::{Deserialize, Serialize};

/// How far (normalized units) a fingertip must sit above its MCP to count as extended
pub const EXTENSION_MARGIN: f64 = 0.15;

/// Tip-to-MCP distance below which a finger counts as curled
pub const CURL_DISTANCE: f64 = 0.12;

/// Measurements derived from a single frame. Rebuilt on every call, never cached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureSnapshot {
    /// Indexed by `Finger::slot()`: index, middle, ring, pinky
    pub extended: [bool; 4],
    pub curl: [f64; 4],
    pub curled: [bool; 4],
    pub thumb_pinky_distance: f64,
    pub thumb_index_distance: f64,
    pub index_middle_distance: f64,
    pub index_angle: f64,
    pub middle_angle: f64,
    pub angle_between_fingers: f64,
}

impl FeatureSnapshot {
    /// Extract all features from a landmark set.
    ///
    /// Total over any input: degenerate or out-of-range coordinates still give a
    /// well-defined (usually all-false) snapshot.
    pub fn extract(landmarks: &LandmarkSet) -> Self {
        let mut extended = [false; 4];
        let mut curl = [0.0; 4];
        let mut curled = [false; 4];

        for finger in Finger::ALL {
            let tip = landmarks.get(finger.tip());
            let mcp = landmarks.get(finger.mcp());
            let slot = finger.slot();

            // Smaller y is higher on screen
            extended[slot] = tip.y < mcp.y - EXTENSION_MARGIN;
            curl[slot] = tip.distance_2d(mcp);
            curled[slot] = curl[slot] < CURL_DISTANCE;
        }

        let thumb_tip = landmarks.get(HandLandmark::ThumbTip);
        let index_tip = landmarks.get(HandLandmark::IndexFingerTip);
        let middle_tip = landmarks.get(HandLandmark::MiddleFingerTip);
        let pinky_tip = landmarks.get(HandLandmark::PinkyTip);

        let index_angle = direction_angle(landmarks, Finger::Index);
        let middle_angle = direction_angle(landmarks, Finger::Middle);

        Self {
            extended,
            curl,
            curled,
            thumb_pinky_distance: thumb_tip.distance_2d(pinky_tip),
            thumb_index_distance: thumb_tip.distance_2d(index_tip),
            index_middle_distance: index_tip.distance_2d(middle_tip),
            index_angle,
            middle_angle,
            angle_between_fingers: (index_angle - middle_angle).abs(),
        }
    }

    pub fn is_extended(&self, finger: Finger) -> bool {
        self.extended[finger.slot()]
    }

    pub fn is_curled(&self, finger: Finger) -> bool {
        self.curled[finger.slot()]
    }

    pub fn extended_count(&self) -> usize {
        self.extended.iter().filter(|e| **e).count()
    }

    pub fn all_curled(&self) -> bool {
        self.curled.iter().all(|c| *c)
    }

    /// True when exactly the given fingers are extended and the rest are not
    pub fn extended_exactly(&self, fingers: &[Finger]) -> bool {
        Finger::ALL
            .iter()
            .all(|f| self.is_extended(*f) == fingers.contains(f))
    }
}

/// Direction of a finger from its MCP to its tip, in radians
fn direction_angle(landmarks: &LandmarkSet, finger: Finger) -> f64 {
    let tip = landmarks.get(finger.tip());
    let mcp = landmarks.get(finger.mcp());
    (tip.y - mcp.y).atan2(tip.x - mcp.x)
}
