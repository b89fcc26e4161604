//! Color classification.
//!
//! Maps a sensor reading to the category that decides where a part is routed.

mod classifier;

pub use classifier::{classify, ColorCategory, ColorClassifier};
