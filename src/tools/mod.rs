//! This module provides the analytical tools of the repsplorer crate.
//!
//! Key submodules:
//!
//! - [`repeats`]: hidden repeat detection. Contains the configuration, the
//!   segment data structures, per-phase profiling, fixed-length segmentation
//!   and the two merge passes (exact-word and noise bridging), tied together
//!   by [`repeats::RepeatDetector`].
pub mod repeats;
