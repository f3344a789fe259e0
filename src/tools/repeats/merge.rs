use log::{
    debug,
    info,
};

use crate::tools::repeats::data_structs::Segment;
use crate::tools::repeats::RepeatConfig;

/// Fuses consecutive segments that share a representative word.
///
/// Single left-to-right pass with one accumulator: a segment whose word
/// equals the accumulator's is appended to it (and the accumulator is
/// re-profiled, word included), any other segment finalizes the accumulator
/// and takes its place. A segment can only join the run growing directly to
/// its left; nothing is ever split again.
pub fn merge_same_word(segments: Vec<Segment<'_>>) -> Vec<Segment<'_>> {
    let n_input = segments.len();
    let mut merged_segments = Vec::with_capacity(n_input);
    let mut current: Option<Segment> = None;

    for segment in segments {
        current = match current.take() {
            None => Some(segment),
            Some(acc) if acc.word() == segment.word() => {
                let merged = acc.merge(&segment);
                debug!(
                    "Exact merge: word {} at {} extended to {} symbols (p={:e})",
                    segment.word(),
                    merged.start(),
                    merged.length(),
                    merged.combined_pvalue()
                );
                Some(merged)
            },
            Some(acc) => {
                merged_segments.push(acc);
                Some(segment)
            },
        };
    }
    merged_segments.extend(current);

    info!(
        "Exact-word merge: {} -> {} segments",
        n_input,
        merged_segments.len()
    );
    merged_segments
}

/// Absorbs weak segments that interrupt two strong repeats.
///
/// Consumes the input front to back while building a separate output list.
/// For every input segment `middle` that has both an emitted segment before
/// it and an unconsumed input segment `right` after it, `left` is the last
/// segment already emitted. When `middle` differs in word from both
/// neighbours, both neighbours are strong and `middle` is weak, the emitted
/// `left` is replaced by `left + middle + right` and `right` is consumed
/// too. Otherwise `middle` is emitted as is.
///
/// `left` comes from the output list, so a merged segment is only compared
/// against the input segments that follow the consumed `right`.
///
/// `config.alpha` is not consulted.
pub fn merge_noise<'a>(
    segments: Vec<Segment<'a>>,
    config: &RepeatConfig,
) -> Vec<Segment<'a>> {
    let count = segments.len();
    let mut merged_segments: Vec<Segment<'a>> = Vec::with_capacity(count);
    let mut segments = segments.into_iter().peekable();

    while let Some(middle) = segments.next() {
        let bridged = match (merged_segments.last(), segments.peek()) {
            (Some(left), Some(right))
                if is_noise_bridge(left, &middle, right, config) =>
            {
                Some(left.bridge(&middle, right))
            },
            _ => None,
        };

        match bridged {
            Some(bridged) => {
                debug!(
                    "Noise merge: {} symbols at {} (word {}, p={:e}) bridged into \
                     segment at {} -> {} symbols (p={:e})",
                    middle.length(),
                    middle.start(),
                    middle.word(),
                    middle.combined_pvalue(),
                    bridged.start(),
                    bridged.length(),
                    bridged.combined_pvalue()
                );
                if let Some(left) = merged_segments.last_mut() {
                    *left = bridged;
                }
                segments.next();
            },
            None => merged_segments.push(middle),
        }
    }

    info!(
        "Noise merge: {} -> {} segments",
        count,
        merged_segments.len()
    );
    merged_segments
}

fn is_noise_bridge(
    left: &Segment,
    middle: &Segment,
    right: &Segment,
    config: &RepeatConfig,
) -> bool {
    middle.word() != left.word()
        && middle.word() != right.word()
        && config.is_strong(left.combined_pvalue())
        && config.is_strong(right.combined_pvalue())
        && config.is_weak(middle.combined_pvalue())
}
