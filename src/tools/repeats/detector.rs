use itertools::Itertools;
use log::info;
use serde::Serialize;

use crate::data_structs::SignalClass;
use crate::error::Result;
use crate::getter_fn;
use crate::tools::repeats::data_structs::{
    RepeatRegion,
    Segment,
};
use crate::tools::repeats::merge::{
    merge_noise,
    merge_same_word,
};
use crate::tools::repeats::segmentation::segment_sequence;
use crate::tools::repeats::RepeatConfig;

/// Three 12-symbol chunks: a `GTG` repeat, a low-signal spacer and the same
/// repeat again.
pub const DEMO_SEQUENCE: &str =
    concat!("GTGACGGTGTAG", "ACGTTAGGACTA", "GTGACGGTGTAG");

/// Runs segmentation, exact-word merge and noise merge with a validated
/// configuration.
#[derive(Debug, Clone)]
pub struct RepeatDetector {
    config: RepeatConfig,
}

impl RepeatDetector {
    /// # Errors
    ///
    /// [`RepeatError::InvalidConfiguration`](crate::error::RepeatError) if
    /// `config` does not validate.
    pub fn try_new(config: RepeatConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    getter_fn!(config, RepeatConfig);

    /// Runs the whole pipeline and keeps every intermediate list.
    pub fn run_stages<'a>(
        &self,
        sequence: &'a [u8],
    ) -> Result<DetectionStages<'a>> {
        let segmented = segment_sequence(sequence, &self.config)?;
        let exact_merged = merge_same_word(segmented.clone());
        let noise_merged = merge_noise(exact_merged.clone(), &self.config);

        let stages = DetectionStages {
            sequence_length: sequence.len(),
            segmented,
            exact_merged,
            noise_merged,
        };
        info!(
            "Detection finished: {} -> {} -> {} segments",
            stages.segmented.len(),
            stages.exact_merged.len(),
            stages.noise_merged.len()
        );
        Ok(stages)
    }

    /// Final segments of the pipeline.
    pub fn detect<'a>(
        &self,
        sequence: &'a [u8],
    ) -> Result<Vec<Segment<'a>>> {
        let segmented = segment_sequence(sequence, &self.config)?;
        Ok(merge_noise(merge_same_word(segmented), &self.config))
    }

    /// Final segments as owned rows, classified against the thresholds.
    pub fn detect_regions(
        &self,
        sequence: &[u8],
    ) -> Result<Vec<RepeatRegion>> {
        Ok(self
            .detect(sequence)?
            .iter()
            .map(|segment| segment.to_region(&self.config))
            .collect_vec())
    }
}

/// Output of every pipeline stage for one sequence.
#[derive(Debug, Clone)]
pub struct DetectionStages<'a> {
    pub sequence_length: usize,
    pub segmented:       Vec<Segment<'a>>,
    pub exact_merged:    Vec<Segment<'a>>,
    pub noise_merged:    Vec<Segment<'a>>,
}

impl<'a> DetectionStages<'a> {
    pub fn final_segments(&self) -> &[Segment<'a>] { &self.noise_merged }

    pub fn regions(
        &self,
        config: &RepeatConfig,
    ) -> Vec<RepeatRegion> {
        self.noise_merged
            .iter()
            .map(|segment| segment.to_region(config))
            .collect_vec()
    }

    pub fn summary(
        &self,
        config: &RepeatConfig,
    ) -> DetectionSummary {
        let counts = self
            .noise_merged
            .iter()
            .map(|segment| config.classify(segment.combined_pvalue()))
            .counts();
        let count_of = |class: SignalClass| counts.get(&class).copied().unwrap_or(0);

        DetectionSummary {
            sequence_length: self.sequence_length,
            n_segments:      self.segmented.len(),
            n_exact_merged:  self.exact_merged.len(),
            n_final:         self.noise_merged.len(),
            n_strong:        count_of(SignalClass::Strong),
            n_intermediate:  count_of(SignalClass::Intermediate),
            n_weak:          count_of(SignalClass::Weak),
        }
    }
}

/// Segment counts after each stage and the class breakdown of the final
/// segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DetectionSummary {
    pub sequence_length: usize,
    pub n_segments:      usize,
    pub n_exact_merged:  usize,
    pub n_final:         usize,
    pub n_strong:        usize,
    pub n_intermediate:  usize,
    pub n_weak:          usize,
}
