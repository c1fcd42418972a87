pub mod config;

// Gesture classification pipeline
pub mod features;
pub mod predicates;
pub mod resolver;
pub mod classifier;

// Frame-level recognition and async sessions
pub mod recognizer;
pub mod session;

#[cfg(test)]
pub(crate) mod fixtures;
