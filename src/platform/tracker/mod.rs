// Hand tracker integration
// Provides the tracker bridge trait and the bundled landmark sources

pub mod bridge;
pub mod replay;

pub use bridge::{DummyTracker, HandTrackerBridge};
pub use replay::ReplayTracker;
