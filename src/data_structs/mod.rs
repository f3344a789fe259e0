//! Fundamental data types shared by the analysis tools: the nucleotide
//! alphabet, signal classification and numeric type aliases.
//!
//! Segment-level structures live next to the algorithms that build them in
//! [`crate::tools::repeats`].

mod enums;
pub mod typedef;

pub use enums::{
    Nucleotide,
    SignalClass,
};
