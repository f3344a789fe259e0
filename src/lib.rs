//! # repsplorer
//!
//! `repsplorer` is a Rust library and command-line tool for finding hidden
//! repeats in symbolic sequences such as DNA. A sequence is chopped into
//! fixed-length segments, every segment is summarized by a short
//! *representative word* (the per-phase consensus of its letters), the
//! positional bias behind that word is scored against a uniform null model,
//! and neighbouring segments are merged when they agree with each other or
//! when a weak segment is just noise between two strong repeats.
//!
//! If you do not want to use repsplorer as crate, check out the
//! `repsplorer` binary from the `repsplorer-ci` package.
//!
//! ## Pipeline
//!
//! 1. **Segmentation** ([`segment_sequence`]): the sequence is split into
//!    chunks of `segment_length` symbols, the last one possibly shorter.
//! 2. **Profiling** ([`PhaseProfile`]): for each of the `period` phase
//!    positions the most frequent nucleotide is taken as the consensus and
//!    its count is scored with an exact binomial upper tail
//!    ([`binomial_tail`]). The per-position p-values are folded into one
//!    Fisher-style score ([`combine_pvalues_fisher`]).
//! 3. **Exact-word merge** ([`merge_same_word`]): consecutive segments with
//!    identical representative words are fused.
//! 4. **Noise merge** ([`merge_noise`]): a weak segment sandwiched between
//!    two strong, lexically different segments is absorbed together with
//!    its right neighbour into the left one.
//!
//! ## Structure
//!
//! * [`data_structs`]: the nucleotide alphabet, signal classes and numeric
//!   type aliases.
//! * [`tools`]: configuration, [`Segment`] views and owned [`RepeatRegion`]
//!   rows, profiling, segmentation, merging and the [`RepeatDetector`]
//!   pipeline.
//! * [`utils`]: statistical functions and helper macros.
//! * [`error`]: the crate error type.
//!
//! ## Usage
//!
//! ```
//! use repsplorer::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let detector = RepeatDetector::try_new(RepeatConfig::default())?;
//!     let sequence = b"GTGACGGTGTAGACGTTAGGACTAGTGACGGTGTAG";
//!
//!     for region in detector.detect_regions(sequence)? {
//!         println!(
//!             "Start: {}, Len: {}, Word: {}, Score(P): {:e}",
//!             region.start, region.length, region.word, region.combined_pvalue
//!         );
//!     }
//!     Ok(())
//! }
//! ```

pub mod data_structs;
pub mod error;
pub mod prelude;
pub mod tools;
pub mod utils;

#[allow(unused_imports)]
use prelude::*;
