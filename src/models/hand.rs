// Data models for hand tracking output (21 keypoints per hand)

use crate::models::gesture::{RecognitionError, RecognitionResult};
use serde::{Deserialize, Serialize};

/// Number of landmarks the hand tracker reports per hand
pub const LANDMARK_COUNT: usize = 21;

// ==============================================================================
// Landmark
// ==============================================================================

/// A single 3D hand keypoint in normalized camera space
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f64, // Normalized [0, 1] relative to frame width
    pub y: f64, // Normalized [0, 1] relative to frame height, grows downward
    #[serde(default)]
    pub z: f64, // Relative depth, device dependent
}

impl Landmark {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Planar distance to another landmark; depth is ignored
    pub fn distance_2d(&self, other: &Landmark) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Project onto a frame of the given pixel size
    pub fn to_pixel(&self, width: u32, height: u32) -> (f64, f64) {
        (self.x * width as f64, self.y * height as f64)
    }
}

// ==============================================================================
// Landmark indices
// ==============================================================================

/// MediaPipe Hand Landmark indices (21 total)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum HandLandmark {
    Wrist = 0,
    ThumbCmc = 1,
    ThumbMcp = 2,
    ThumbIp = 3,
    ThumbTip = 4,
    IndexFingerMcp = 5,
    IndexFingerPip = 6,
    IndexFingerDip = 7,
    IndexFingerTip = 8,
    MiddleFingerMcp = 9,
    MiddleFingerPip = 10,
    MiddleFingerDip = 11,
    MiddleFingerTip = 12,
    RingFingerMcp = 13,
    RingFingerPip = 14,
    RingFingerDip = 15,
    RingFingerTip = 16,
    PinkyMcp = 17,
    PinkyPip = 18,
    PinkyDip = 19,
    PinkyTip = 20,
}

impl HandLandmark {
    pub fn index(self) -> usize {
        self as usize
    }
}

/// The four non-thumb fingers, in anatomical order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Finger {
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    pub const ALL: [Finger; 4] = [Finger::Index, Finger::Middle, Finger::Ring, Finger::Pinky];

    /// Knuckle at the base of the finger
    pub fn mcp(self) -> HandLandmark {
        match self {
            Finger::Index => HandLandmark::IndexFingerMcp,
            Finger::Middle => HandLandmark::MiddleFingerMcp,
            Finger::Ring => HandLandmark::RingFingerMcp,
            Finger::Pinky => HandLandmark::PinkyMcp,
        }
    }

    pub fn dip(self) -> HandLandmark {
        match self {
            Finger::Index => HandLandmark::IndexFingerDip,
            Finger::Middle => HandLandmark::MiddleFingerDip,
            Finger::Ring => HandLandmark::RingFingerDip,
            Finger::Pinky => HandLandmark::PinkyDip,
        }
    }

    pub fn tip(self) -> HandLandmark {
        match self {
            Finger::Index => HandLandmark::IndexFingerTip,
            Finger::Middle => HandLandmark::MiddleFingerTip,
            Finger::Ring => HandLandmark::RingFingerTip,
            Finger::Pinky => HandLandmark::PinkyTip,
        }
    }

    /// Position in `Finger::ALL`
    pub fn slot(self) -> usize {
        self as usize
    }
}

/// Hand skeleton connections for overlay rendering: finger chains, then palm
pub const HAND_CONNECTIONS: [(HandLandmark, HandLandmark); 24] = {
    use HandLandmark::*;
    [
        (Wrist, ThumbCmc), (ThumbCmc, ThumbMcp), (ThumbMcp, ThumbIp), (ThumbIp, ThumbTip),
        (Wrist, IndexFingerMcp), (IndexFingerMcp, IndexFingerPip), (IndexFingerPip, IndexFingerDip), (IndexFingerDip, IndexFingerTip),
        (Wrist, MiddleFingerMcp), (MiddleFingerMcp, MiddleFingerPip), (MiddleFingerPip, MiddleFingerDip), (MiddleFingerDip, MiddleFingerTip),
        (Wrist, RingFingerMcp), (RingFingerMcp, RingFingerPip), (RingFingerPip, RingFingerDip), (RingFingerDip, RingFingerTip),
        (Wrist, PinkyMcp), (PinkyMcp, PinkyPip), (PinkyPip, PinkyDip), (PinkyDip, PinkyTip),
        (Wrist, IndexFingerMcp), (IndexFingerMcp, MiddleFingerMcp), (MiddleFingerMcp, RingFingerMcp), (RingFingerMcp, PinkyMcp),
    ]
};

// ==============================================================================
// Landmark Set
// ==============================================================================

/// The ordered 21-point skeleton of one detected hand for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandmarkSet([Landmark; LANDMARK_COUNT]);

impl LandmarkSet {
    pub fn new(landmarks: [Landmark; LANDMARK_COUNT]) -> Self {
        Self(landmarks)
    }

    pub fn get(&self, landmark: HandLandmark) -> &Landmark {
        &self.0[landmark.index()]
    }

    pub fn get_mut(&mut self, landmark: HandLandmark) -> &mut Landmark {
        &mut self.0[landmark.index()]
    }

    pub fn as_slice(&self) -> &[Landmark] {
        &self.0
    }

    /// Index of the first landmark carrying a NaN or infinite coordinate
    pub fn first_non_finite(&self) -> Option<usize> {
        self.0.iter().position(|l| !l.is_finite())
    }

    /// Pixel-space line segments for drawing the hand skeleton
    pub fn overlay_segments(&self, width: u32, height: u32) -> Vec<((f64, f64), (f64, f64))> {
        HAND_CONNECTIONS
            .iter()
            .map(|(start, end)| {
                (
                    self.get(*start).to_pixel(width, height),
                    self.get(*end).to_pixel(width, height),
                )
            })
            .collect()
    }
}

impl TryFrom<&[Landmark]> for LandmarkSet {
    type Error = RecognitionError;

    fn try_from(landmarks: &[Landmark]) -> RecognitionResult<Self> {
        let array: [Landmark; LANDMARK_COUNT] = landmarks
            .try_into()
            .map_err(|_| RecognitionError::InvalidLandmarkCount(landmarks.len()))?;
        Ok(Self(array))
    }
}

impl Serialize for LandmarkSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.as_slice().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for LandmarkSet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let landmarks = Vec::<Landmark>::deserialize(deserializer)?;
        LandmarkSet::try_from(landmarks.as_slice()).map_err(serde::de::Error::custom)
    }
}

// ==============================================================================
// Handedness
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Handedness {
    Left,
    Right,
}

impl Handedness {
    pub fn as_str(&self) -> &'static str {
        match self {
            Handedness::Left => "left",
            Handedness::Right => "right",
        }
    }
}
