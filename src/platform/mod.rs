// Landmark sources feeding the recognizer

pub mod tracker;
