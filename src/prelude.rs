pub use crate::data_structs::typedef::{
    CountType,
    PValueType,
    PosType,
};
pub use crate::data_structs::{
    Nucleotide,
    SignalClass,
};
pub use crate::error::{
    RepeatError,
    Result,
};
pub use crate::tools::repeats::{
    merge_noise,
    merge_same_word,
    segment_sequence,
    DetectionStages,
    DetectionSummary,
    PhaseProfile,
    RepeatConfig,
    RepeatDetector,
    RepeatRegion,
    Segment,
    DEMO_SEQUENCE,
};
pub use crate::utils::{
    binomial_coefficient,
    binomial_tail,
    combine_pvalues_fisher,
    prepare_sequence,
    NULL_SYMBOL_PROBABILITY,
};
