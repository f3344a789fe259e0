use itertools::Itertools;
use log::{
    debug,
    info,
};

use crate::error::{
    RepeatError,
    Result,
};
use crate::tools::repeats::data_structs::Segment;
use crate::tools::repeats::RepeatConfig;

/// Splits `sequence` into consecutive, non-overlapping segments of
/// `config.segment_length` symbols and profiles each of them.
///
/// The last segment is shorter when the sequence length is not a multiple
/// of the segment length; it is never dropped.
///
/// # Errors
///
/// * [`RepeatError::InvalidConfiguration`] if `config` does not validate.
/// * [`RepeatError::EmptyInput`] if `sequence` has no symbols.
pub fn segment_sequence<'a>(
    sequence: &'a [u8],
    config: &RepeatConfig,
) -> Result<Vec<Segment<'a>>> {
    config.validate()?;
    if sequence.is_empty() {
        return Err(RepeatError::EmptyInput);
    }

    let segments = (0..sequence.len())
        .step_by(config.segment_length)
        .map(|start| {
            let end = (start + config.segment_length).min(sequence.len());
            let segment = Segment::new(sequence, start, end, config.period);
            debug!("Segment {}", segment);
            segment
        })
        .collect_vec();

    info!(
        "Segmented {} symbols into {} segments of length {}",
        sequence.len(),
        segments.len(),
        config.segment_length
    );
    Ok(segments)
}
