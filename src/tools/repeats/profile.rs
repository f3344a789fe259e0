use log::trace;

use crate::data_structs::typedef::{
    CountType,
    PValueType,
};
use crate::data_structs::Nucleotide;
use crate::utils::{
    binomial_tail,
    combine_pvalues_fisher,
    NULL_SYMBOL_PROBABILITY,
};

/// Per-phase summary of a run of symbols.
///
/// The content is read in consecutive units of `period` symbols; a trailing
/// partial unit is ignored. For every phase position the most frequent
/// nucleotide becomes one character of the representative word and its
/// count is scored with the binomial upper tail under the uniform null.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseProfile {
    word:             String,
    position_pvalues: Vec<PValueType>,
    combined_pvalue:  PValueType,
}

impl PhaseProfile {
    /// Profiles `content` with sub-period `period`.
    ///
    /// # Panics
    ///
    /// If `period` is zero. [`RepeatConfig::validate`] rejects such
    /// configurations before any profile is computed.
    ///
    /// [`RepeatConfig::validate`]: crate::tools::repeats::RepeatConfig::validate
    pub fn compute(
        content: &[u8],
        period: usize,
    ) -> Self {
        assert!(period > 0, "period must be positive");
        let n_units = (content.len() / period) as CountType;

        let (word, position_pvalues): (String, Vec<PValueType>) = (0..period)
            .map(|phase| {
                let counts = phase_counts(content, period, phase);
                let (symbol, max_count) = consensus(&counts);
                (
                    symbol.as_char(),
                    binomial_tail(n_units, max_count, NULL_SYMBOL_PROBABILITY),
                )
            })
            .unzip();
        let combined_pvalue = combine_pvalues_fisher(&position_pvalues);

        trace!(
            "Profiled {} symbols ({} units): word={}, p={:e}",
            content.len(),
            n_units,
            word,
            combined_pvalue
        );

        Self {
            word,
            position_pvalues,
            combined_pvalue,
        }
    }

    pub fn word(&self) -> &str { &self.word }

    pub fn position_pvalues(&self) -> &[PValueType] { &self.position_pvalues }

    pub fn combined_pvalue(&self) -> PValueType { self.combined_pvalue }

    /// Number of phase positions, i.e. the word length.
    pub fn period(&self) -> usize { self.position_pvalues.len() }
}

/// Occurrences of each nucleotide at `phase` over all full units, indexed by
/// [`Nucleotide::index`]. Symbols outside the alphabet are not counted.
pub(crate) fn phase_counts(
    content: &[u8],
    period: usize,
    phase: usize,
) -> [CountType; 4] {
    content
        .chunks_exact(period)
        .filter_map(|unit| Nucleotide::from_byte(unit[phase]))
        .fold([0; 4], |mut counts, nuc| {
            counts[nuc.index()] += 1;
            counts
        })
}

/// Most frequent nucleotide and its count. Only a strictly higher count
/// replaces the current best, so ties go to the earliest nucleotide in
/// [`Nucleotide::ALL`], and an all-zero column yields `A`.
pub(crate) fn consensus(counts: &[CountType; 4]) -> (Nucleotide, CountType) {
    Nucleotide::ALL
        .iter()
        .fold((Nucleotide::A, 0), |(best, max), &nuc| {
            let count = counts[nuc.index()];
            if count > max {
                (nuc, count)
            }
            else {
                (best, max)
            }
        })
}
