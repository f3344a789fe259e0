//! This module contains various utility functions and helper macros used
//! throughout the repsplorer crate.
//!
//! Key functionalities include:
//!
//! - Statistical functions: the exact binomial upper tail used to score
//!   per-position consensus counts, and the Fisher-style surrogate that
//!   combines them into one score per segment.
//! - Macros for common struct operations (e.g., getter functions, builder-style
//!   `with_*` methods).
//! - Preparation of raw sequence text before it is handed to the pipeline.

use log::debug;

mod stats;
pub use stats::*;

#[macro_export]
macro_rules! getter_fn {
    ($field_name: ident, $field_type: ty) => {
        pub fn $field_name(&self) -> &$field_type {
            &self.$field_name
        }
    };
}
pub use getter_fn;

#[macro_export]
macro_rules! with_field_fn {
    ($field_name: ident, $field_type: ty) => {
        paste::paste! {
            pub fn [<with_$field_name>](mut self, value: $field_type) -> Self {
            self.$field_name = value;
            self
            }
        }
    };
}
pub use with_field_fn;

/// Turns raw sequence text into the symbol buffer consumed by the pipeline.
///
/// All whitespace (including line breaks of wrapped sequence files) is
/// dropped. With `uppercase` set, ASCII letters are upper-cased so that
/// soft-masked (lower-case) bases are counted; otherwise symbols are kept
/// verbatim and anything other than `A`, `C`, `G`, `T` never contributes to
/// a consensus count.
pub fn prepare_sequence(
    raw: &str,
    uppercase: bool,
) -> Vec<u8> {
    let prepared = raw
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .map(|b| {
            if uppercase {
                b.to_ascii_uppercase()
            }
            else {
                b
            }
        })
        .collect::<Vec<_>>();
    debug!(
        "Prepared sequence: {} raw bytes -> {} symbols",
        raw.len(),
        prepared.len()
    );
    prepared
}
