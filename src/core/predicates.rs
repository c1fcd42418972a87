// Predicate evaluation - one independent geometric test per gesture
//
// Thresholds are in normalized frame units and were calibrated by hand against
// live camera input. They are load-bearing: changing one changes which poses
// classify, so they are constants rather than configuration.

use crate::core::features::FeatureSnapshot;
use crate::models::gesture::GestureLabel;
use crate::models::hand::{Finger, HandLandmark, LandmarkSet};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

// ==============================================================================
// Thresholds
// ==============================================================================

/// Call: minimum thumb tip to pinky tip spread
pub const CALL_MIN_SPREAD: f64 = 0.3;

/// Victory: fingertips close together and level, fingers nearly parallel
pub const VICTORY_MAX_TIP_DISTANCE: f64 = 0.15;
pub const VICTORY_MAX_TIP_HEIGHT_DIFF: f64 = 0.1;
pub const VICTORY_MAX_ANGLE: f64 = PI / 6.0;

/// OK-sign: thumb and index tips touching on every axis
pub const OK_SIGN_MAX_AXIS_GAP: f64 = 0.15;

/// Gun: thumb tip roughly level with the thumb MCP
pub const GUN_MAX_THUMB_DROP: f64 = 0.1;

/// Pointing: index tip clearly above its MCP
pub const POINTING_MIN_RISE: f64 = 0.15;

/// Hello: neighbouring fingertips level
pub const HELLO_MAX_TIP_HEIGHT_DIFF: f64 = 0.1;

/// Like / Dislike: thumb clear of the wrist vertically, aligned horizontally
pub const THUMB_MIN_VERTICAL_OFFSET: f64 = 0.15;
pub const THUMB_MAX_HORIZONTAL_OFFSET: f64 = 0.15;

/// Angry: thumb tucked against the palm
pub const ANGRY_MAX_THUMB_OFFSET: f64 = 0.12;

/// I-Love-You
pub const ILY_MAX_THUMB_HEIGHT_OFFSET: f64 = 0.2;
pub const ILY_MAX_TIP_HEIGHT_DIFF: f64 = 0.3;
pub const ILY_MIN_TIP_SPREAD: f64 = 0.15;

/// Friends
pub const FRIENDS_MAX_TIP_HEIGHT_DIFF: f64 = 0.2;
pub const FRIENDS_MIN_THUMB_RISE: f64 = 0.1;
pub const FRIENDS_MAX_THUMB_OFFSET: f64 = 0.2;

// ==============================================================================
// Predicate Set
// ==============================================================================

/// Outcome of every gesture predicate for one frame. Several may hold at once;
/// the resolver picks the winner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GesturePredicates {
    pub call: bool,
    pub victory: bool,
    pub ok_sign: bool,
    pub gun: bool,
    pub pointing: bool,
    pub hello: bool,
    pub thumbs_up: bool,
    pub thumbs_down: bool,
    pub friends: bool,
    pub i_love_you: bool,
    pub angry: bool,
}

impl GesturePredicates {
    pub fn evaluate(landmarks: &LandmarkSet, features: &FeatureSnapshot) -> Self {
        Self {
            call: is_call(landmarks, features),
            victory: is_victory(landmarks, features),
            ok_sign: is_ok_sign(landmarks, features),
            gun: is_gun(landmarks, features),
            pointing: is_pointing(landmarks, features),
            hello: is_hello(landmarks, features),
            thumbs_up: is_thumbs_up(landmarks, features),
            thumbs_down: is_thumbs_down(landmarks, features),
            friends: is_friends(landmarks, features),
            i_love_you: is_i_love_you(landmarks, features),
            angry: is_angry(landmarks, features),
        }
    }

    /// Whether the predicate that reports `label` held
    pub fn holds(&self, label: GestureLabel) -> bool {
        match label {
            GestureLabel::Call => self.call,
            GestureLabel::Victory => self.victory,
            GestureLabel::Super => self.ok_sign,
            GestureLabel::Happy => self.gun,
            GestureLabel::Pointing => self.pointing,
            GestureLabel::Hello => self.hello,
            GestureLabel::Like => self.thumbs_up,
            GestureLabel::Dislike => self.thumbs_down,
            GestureLabel::Friends => self.friends,
            GestureLabel::ILoveYou => self.i_love_you,
            GestureLabel::Angry => self.angry,
        }
    }

    pub fn matched(&self) -> Vec<GestureLabel> {
        GestureLabel::ALL
            .into_iter()
            .filter(|label| self.holds(*label))
            .collect()
    }

    pub fn any(&self) -> bool {
        GestureLabel::ALL.iter().any(|label| self.holds(*label))
    }
}

// ==============================================================================
// Predicates
// ==============================================================================

fn y(landmarks: &LandmarkSet, landmark: HandLandmark) -> f64 {
    landmarks.get(landmark).y
}

/// Thumb and pinky raised past their last joints, middle and ring folded
/// below theirs, thumb and pinky spread wide.
pub fn is_call(landmarks: &LandmarkSet, features: &FeatureSnapshot) -> bool {
    let tip_above_dip =
        |finger: Finger| y(landmarks, finger.tip()) < y(landmarks, finger.dip());
    let tip_below_dip =
        |finger: Finger| y(landmarks, finger.tip()) > y(landmarks, finger.dip());

    let thumb_up = y(landmarks, HandLandmark::ThumbTip) < y(landmarks, HandLandmark::ThumbIp);
    let pinky_up = tip_above_dip(Finger::Pinky);
    let middle_down = tip_below_dip(Finger::Middle);
    let ring_down = tip_below_dip(Finger::Ring);

    thumb_up
        && pinky_up
        && middle_down
        && ring_down
        && features.thumb_pinky_distance > CALL_MIN_SPREAD
}

pub fn is_victory(landmarks: &LandmarkSet, features: &FeatureSnapshot) -> bool {
    let index_tip = landmarks.get(HandLandmark::IndexFingerTip);
    let middle_tip = landmarks.get(HandLandmark::MiddleFingerTip);

    features.extended_exactly(&[Finger::Index, Finger::Middle])
        && features.index_middle_distance < VICTORY_MAX_TIP_DISTANCE
        && (index_tip.y - middle_tip.y).abs() < VICTORY_MAX_TIP_HEIGHT_DIFF
        && features.angle_between_fingers < VICTORY_MAX_ANGLE
}

/// Thumb and index tips pinched together (depth included), other three raised.
/// The index finger's own state is not checked.
pub fn is_ok_sign(landmarks: &LandmarkSet, features: &FeatureSnapshot) -> bool {
    let thumb_tip = landmarks.get(HandLandmark::ThumbTip);
    let index_tip = landmarks.get(HandLandmark::IndexFingerTip);

    (thumb_tip.x - index_tip.x).abs() < OK_SIGN_MAX_AXIS_GAP
        && (thumb_tip.y - index_tip.y).abs() < OK_SIGN_MAX_AXIS_GAP
        && (thumb_tip.z - index_tip.z).abs() < OK_SIGN_MAX_AXIS_GAP
        && features.is_extended(Finger::Middle)
        && features.is_extended(Finger::Ring)
        && features.is_extended(Finger::Pinky)
}

pub fn is_gun(landmarks: &LandmarkSet, features: &FeatureSnapshot) -> bool {
    let thumb_drop =
        (y(landmarks, HandLandmark::ThumbTip) - y(landmarks, HandLandmark::ThumbMcp)).abs();

    features.extended_exactly(&[Finger::Index]) && thumb_drop < GUN_MAX_THUMB_DROP
}

pub fn is_pointing(landmarks: &LandmarkSet, features: &FeatureSnapshot) -> bool {
    let rise_limit = y(landmarks, HandLandmark::IndexFingerMcp) - POINTING_MIN_RISE;

    features.extended_exactly(&[Finger::Index])
        && y(landmarks, HandLandmark::IndexFingerTip) < rise_limit
}

/// Open hand with neighbouring fingertips level
pub fn is_hello(landmarks: &LandmarkSet, features: &FeatureSnapshot) -> bool {
    features.extended_count() == 4
        && tips_level(landmarks, &Finger::ALL, HELLO_MAX_TIP_HEIGHT_DIFF)
}

pub fn is_thumbs_up(landmarks: &LandmarkSet, features: &FeatureSnapshot) -> bool {
    let thumb_tip = landmarks.get(HandLandmark::ThumbTip);
    let wrist = landmarks.get(HandLandmark::Wrist);

    features.extended_count() == 0
        && thumb_tip.y < wrist.y - THUMB_MIN_VERTICAL_OFFSET
        && (thumb_tip.x - wrist.x).abs() < THUMB_MAX_HORIZONTAL_OFFSET
}

pub fn is_thumbs_down(landmarks: &LandmarkSet, features: &FeatureSnapshot) -> bool {
    let thumb_tip = landmarks.get(HandLandmark::ThumbTip);
    let wrist = landmarks.get(HandLandmark::Wrist);

    features.extended_count() == 0
        && thumb_tip.y > wrist.y + THUMB_MIN_VERTICAL_OFFSET
        && (thumb_tip.x - wrist.x).abs() < THUMB_MAX_HORIZONTAL_OFFSET
}

pub fn is_angry(landmarks: &LandmarkSet, features: &FeatureSnapshot) -> bool {
    let thumb_tip = landmarks.get(HandLandmark::ThumbTip);
    let wrist = landmarks.get(HandLandmark::Wrist);

    features.extended_exactly(&[Finger::Pinky])
        && (thumb_tip.x - wrist.x).abs() < ANGRY_MAX_THUMB_OFFSET
}

pub fn is_i_love_you(landmarks: &LandmarkSet, features: &FeatureSnapshot) -> bool {
    let thumb_tip = landmarks.get(HandLandmark::ThumbTip);
    let wrist = landmarks.get(HandLandmark::Wrist);
    let index_tip = landmarks.get(HandLandmark::IndexFingerTip);
    let pinky_tip = landmarks.get(HandLandmark::PinkyTip);

    features.extended_exactly(&[Finger::Index, Finger::Pinky])
        && (thumb_tip.y - wrist.y).abs() < ILY_MAX_THUMB_HEIGHT_OFFSET
        && (index_tip.y - pinky_tip.y).abs() < ILY_MAX_TIP_HEIGHT_DIFF
        && (index_tip.x - pinky_tip.x).abs() > ILY_MIN_TIP_SPREAD
}

pub fn is_friends(landmarks: &LandmarkSet, features: &FeatureSnapshot) -> bool {
    let raised = [Finger::Index, Finger::Middle, Finger::Ring];
    let thumb_tip = landmarks.get(HandLandmark::ThumbTip);
    let wrist = landmarks.get(HandLandmark::Wrist);

    features.extended_exactly(&raised)
        && tips_level(landmarks, &raised, FRIENDS_MAX_TIP_HEIGHT_DIFF)
        && thumb_tip.y < wrist.y - FRIENDS_MIN_THUMB_RISE
        && (thumb_tip.x - wrist.x).abs() < FRIENDS_MAX_THUMB_OFFSET
}

/// Each neighbouring pair of fingertips differs in height by less than `limit`
fn tips_level(landmarks: &LandmarkSet, fingers: &[Finger], limit: f64) -> bool {
    fingers.windows(2).all(|pair| {
        let a = landmarks.get(pair[0].tip());
        let b = landmarks.get(pair[1].tip());
        (a.y - b.y).abs() < limit
    })
}
