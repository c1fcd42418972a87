// Hand-built landmark sets for tests
//
// Layout: wrist at (0.50, 0.80), finger MCPs on y = 0.55. An extended finger
// has its tip 0.25 above its MCP, a curled one has its tip 0.05 below it.

use crate::models::hand::{Finger, HandLandmark, Landmark, LandmarkSet, LANDMARK_COUNT};

const WRIST: (f64, f64) = (0.50, 0.80);
const MCP_Y: f64 = 0.55;
const THUMB_CHAIN: [(f64, f64); 3] = [(0.42, 0.76), (0.36, 0.70), (0.32, 0.64)];
const DEFAULT_THUMB_TIP: (f64, f64) = (0.30, 0.57);

fn finger_x(finger: Finger) -> f64 {
    match finger {
        Finger::Index => 0.40,
        Finger::Middle => 0.47,
        Finger::Ring => 0.54,
        Finger::Pinky => 0.61,
    }
}

/// Build a hand with the given fingers raised and the thumb tip at `thumb_tip`
pub fn pose(extended: &[Finger], thumb_tip: (f64, f64)) -> LandmarkSet {
    let mut points = [Landmark::default(); LANDMARK_COUNT];
    points[HandLandmark::Wrist.index()] = Landmark::new(WRIST.0, WRIST.1, 0.0);

    for (offset, (x, y)) in THUMB_CHAIN.iter().enumerate() {
        points[HandLandmark::ThumbCmc.index() + offset] = Landmark::new(*x, *y, 0.0);
    }
    points[HandLandmark::ThumbTip.index()] = Landmark::new(thumb_tip.0, thumb_tip.1, 0.0);

    for finger in Finger::ALL {
        let x = finger_x(finger);
        let (pip, dip, tip) = if extended.contains(&finger) {
            (0.45, 0.38, 0.30)
        } else {
            (0.50, 0.55, 0.60)
        };
        let base = finger.mcp().index();
        points[base] = Landmark::new(x, MCP_Y, 0.0);
        points[base + 1] = Landmark::new(x, pip, 0.0);
        points[base + 2] = Landmark::new(x, dip, 0.0);
        points[base + 3] = Landmark::new(x, tip, 0.0);
    }

    LandmarkSet::new(points)
}

pub fn fist() -> LandmarkSet {
    pose(&[], DEFAULT_THUMB_TIP)
}

pub fn call() -> LandmarkSet {
    pose(&[Finger::Pinky], (0.20, 0.50))
}

pub fn victory() -> LandmarkSet {
    pose(&[Finger::Index, Finger::Middle], DEFAULT_THUMB_TIP)
}

pub fn ok_sign() -> LandmarkSet {
    pose(&[Finger::Middle, Finger::Ring, Finger::Pinky], (0.37, 0.58))
}

pub fn gun() -> LandmarkSet {
    pose(&[Finger::Index], (0.30, 0.66))
}

pub fn pointing() -> LandmarkSet {
    pose(&[Finger::Index], DEFAULT_THUMB_TIP)
}

pub fn hello() -> LandmarkSet {
    pose(&Finger::ALL, DEFAULT_THUMB_TIP)
}

pub fn thumbs_up() -> LandmarkSet {
    pose(&[], (0.52, 0.45))
}

pub fn thumbs_down() -> LandmarkSet {
    pose(&[], (0.52, 0.97))
}

pub fn friends() -> LandmarkSet {
    pose(&[Finger::Index, Finger::Middle, Finger::Ring], (0.45, 0.57))
}

pub fn i_love_you() -> LandmarkSet {
    pose(&[Finger::Index, Finger::Pinky], (0.25, 0.68))
}

pub fn angry() -> LandmarkSet {
    pose(&[Finger::Pinky], (0.45, 0.70))
}

/// Victory pose with joints bent so the Call predicate also holds
pub fn victory_and_call() -> LandmarkSet {
    let mut hand = victory();
    hand.get_mut(HandLandmark::MiddleFingerDip).y = 0.25;
    hand.get_mut(HandLandmark::PinkyDip).y = 0.65;
    *hand.get_mut(HandLandmark::ThumbTip) = Landmark::new(0.10, 0.50, 0.0);
    hand
}

/// Call pose with the thumb and pinky tips `distance` apart on the same row
pub fn call_with_spread(distance: f64) -> LandmarkSet {
    let mut hand = call();
    *hand.get_mut(HandLandmark::ThumbTip) = Landmark::new(0.0, 0.30, 0.0);
    *hand.get_mut(HandLandmark::PinkyTip) = Landmark::new(distance, 0.30, 0.0);
    hand
}

pub fn flatten(hand: &LandmarkSet) -> Vec<Landmark> {
    hand.as_slice().to_vec()
}
