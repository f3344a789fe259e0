/// Offset of a symbol in the input sequence.
pub type PosType = usize;
/// Number of full period units or symbol occurrences.
pub type CountType = u32;
/// Probability-like score, in `(0, 1]` for everything the pipeline produces.
pub type PValueType = f64;
