mod config;
mod data_structs;
mod detector;
mod merge;
mod profile;
mod segmentation;

pub use config::RepeatConfig;
pub use data_structs::{
    RepeatRegion,
    Segment,
};
pub use detector::{
    DetectionStages,
    DetectionSummary,
    RepeatDetector,
    DEMO_SEQUENCE,
};
pub use merge::{
    merge_noise,
    merge_same_word,
};
pub use profile::PhaseProfile;
pub use segmentation::segment_sequence;
