// Priority resolution - picks one label when several predicates hold

use crate::core::predicates::GesturePredicates;
use crate::models::gesture::{GestureLabel, GestureResult};

/// Labels checked after Call, highest priority first
pub const PRIORITY: [GestureLabel; 10] = [
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

/// Select the winning gesture and attach its fixed confidence
pub fn resolve(predicates: &GesturePredicates) -> GestureResult {
    if predicates.call {
        return GestureResult::detected(GestureLabel::Call);
    }

    PRIORITY
        .iter()
        .find(|label| predicates.holds(**label))
        .map(|label| GestureResult::detected(*label))
        .unwrap_or_else(GestureResult::none)
}
