//! Display file (scene list).
//!
//! Responsibilities:
//! - own the ordered collection of objects and hand out ids
//! - run the per-frame pass: normalize, clip, draw
//! - enforce visibility (hidden objects are skipped, not removed)

mod display_file;
mod stats;

pub use display_file::DisplayFile;
pub use stats::FrameStats;
