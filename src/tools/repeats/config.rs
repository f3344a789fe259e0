use log::warn;
use serde::{
    Deserialize,
    Serialize,
};

use crate::data_structs::typedef::PValueType;
use crate::data_structs::SignalClass;
use crate::error::{
    RepeatError,
    Result,
};
use crate::with_field_fn;

/// Parameters of the repeat detection pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepeatConfig {
    /// Chunk length `L` used by the segmenter.
    pub segment_length: usize,
    /// Sub-period `K`, the length of a representative word.
    pub period:         usize,
    /// `tau1`: segments scoring above it are weak (noise candidates).
    pub weak_pvalue:    PValueType,
    /// `tau2`: segments scoring below it are strong anchors.
    pub strong_pvalue:  PValueType,
    /// Reserved significance level. Accepted and carried around, but no
    /// merge decision reads it.
    pub alpha:          PValueType,
}

impl RepeatConfig {
    with_field_fn!(segment_length, usize);
    with_field_fn!(period, usize);
    with_field_fn!(weak_pvalue, PValueType);
    with_field_fn!(strong_pvalue, PValueType);
    with_field_fn!(alpha, PValueType);

    pub fn new(
        segment_length: usize,
        period: usize,
        weak_pvalue: PValueType,
        strong_pvalue: PValueType,
        alpha: PValueType,
    ) -> Self {
        Self {
            segment_length,
            period,
            weak_pvalue,
            strong_pvalue,
            alpha,
        }
    }

    /// Checks that the pipeline can run with these parameters.
    ///
    /// Zero lengths and thresholds outside `(0, 1)` are rejected. A period
    /// longer than the segment length or a strong threshold that is not
    /// below the weak one are accepted with a warning.
    pub fn validate(&self) -> Result<()> {
        if self.segment_length == 0 {
            return Err(RepeatError::InvalidConfiguration(
                "segment length (L) must be positive".to_string(),
            ));
        }
        if self.period == 0 {
            return Err(RepeatError::InvalidConfiguration(
                "period (K) must be positive".to_string(),
            ));
        }
        for (name, value) in [
            ("weak p-value threshold (tau1)", self.weak_pvalue),
            ("strong p-value threshold (tau2)", self.strong_pvalue),
        ] {
            if !(value > 0.0 && value < 1.0) {
                return Err(RepeatError::InvalidConfiguration(format!(
                    "{} must lie in (0, 1), got {}",
                    name, value
                )));
            }
        }

        if self.period > self.segment_length {
            warn!(
                "Period {} is longer than segment length {}: fresh segments \
                 contain no full unit and score 1.0",
                self.period, self.segment_length
            );
        }
        if self.strong_pvalue >= self.weak_pvalue {
            warn!(
                "Strong threshold {} is not below weak threshold {}",
                self.strong_pvalue, self.weak_pvalue
            );
        }
        Ok(())
    }

    pub fn is_strong(
        &self,
        pvalue: PValueType,
    ) -> bool {
        pvalue < self.strong_pvalue
    }

    pub fn is_weak(
        &self,
        pvalue: PValueType,
    ) -> bool {
        pvalue > self.weak_pvalue
    }

    pub fn classify(
        &self,
        pvalue: PValueType,
    ) -> SignalClass {
        SignalClass::classify(pvalue, self.weak_pvalue, self.strong_pvalue)
    }
}

impl Default for RepeatConfig {
    fn default() -> Self {
        Self {
            segment_length: 12,
            period:         3,
            weak_pvalue:    0.1,
            strong_pvalue:  0.01,
            alpha:          0.05,
        }
    }
}
