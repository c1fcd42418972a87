// Data models for hand landmarks, tracker frames and gesture results

pub mod gesture;
pub mod hand;
pub mod tracking;
