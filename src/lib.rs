pub mod core;
pub mod models;
pub mod platform;

pub use crate::core::classifier::{classify, classify_landmarks};
pub use crate::core::config::RecognitionConfig;
pub use crate::core::recognizer::{FrameOutcome, GestureRecognizer};
pub use crate::core::session::RecognitionSession;
pub use crate::models::gesture::{GestureLabel, GestureResult, RecognitionError, RecognitionResult};
pub use crate::models::hand::{Landmark, LandmarkSet};
pub use crate::models::tracking::{GestureFrame, TrackerFrame};
