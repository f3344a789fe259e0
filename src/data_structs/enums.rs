use std::fmt::Display;
use std::str::FromStr;

use serde::{
    Deserialize,
    Serialize,
};

use crate::data_structs::typedef::PValueType;

/// Symbol of the four-letter nucleotide alphabet.
///
/// The declaration order is the tie-break order of consensus calling: when
/// two nucleotides are equally frequent at a phase position, the one listed
/// first in [`Nucleotide::ALL`] wins.
#[derive(
    Eq, Hash, PartialEq, Copy, Clone, Debug, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Nucleotide {
    A,
    C,
    G,
    T,
}

impl Nucleotide {
    /// All nucleotides in tie-break order.
    pub const ALL: [Nucleotide; 4] =
        [Nucleotide::A, Nucleotide::C, Nucleotide::G, Nucleotide::T];

    /// Exact-match decoding: only upper-case `A`, `C`, `G`, `T` are
    /// recognized.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'A' => Some(Nucleotide::A),
            b'C' => Some(Nucleotide::C),
            b'G' => Some(Nucleotide::G),
            b'T' => Some(Nucleotide::T),
            _ => None,
        }
    }

    pub fn as_byte(self) -> u8 {
        match self {
            Nucleotide::A => b'A',
            Nucleotide::C => b'C',
            Nucleotide::G => b'G',
            Nucleotide::T => b'T',
        }
    }

    pub fn as_char(self) -> char { self.as_byte() as char }

    /// Position of the nucleotide in [`Nucleotide::ALL`].
    pub fn index(self) -> usize { self as usize }
}

impl Display for Nucleotide {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Nucleotide {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.as_bytes() {
            [byte] => {
                Nucleotide::from_byte(*byte)
                    .ok_or_else(|| format!("Unknown nucleotide: {}", s))
            },
            _ => Err(format!("Expected a single nucleotide, got '{}'", s)),
        }
    }
}

/// Strength of a segment's repeat signal relative to the noise thresholds.
#[derive(Eq, Hash, PartialEq, Copy, Clone, Debug, Serialize, Deserialize)]
pub enum SignalClass {
    /// Combined p-value below the strong threshold.
    Strong,
    /// Between the two thresholds.
    Intermediate,
    /// Combined p-value above the weak threshold.
    Weak,
}

impl SignalClass {
    /// Strong takes precedence when the thresholds overlap.
    pub fn classify(
        pvalue: PValueType,
        weak_pvalue: PValueType,
        strong_pvalue: PValueType,
    ) -> Self {
        if pvalue < strong_pvalue {
            SignalClass::Strong
        }
        else if pvalue > weak_pvalue {
            SignalClass::Weak
        }
        else {
            SignalClass::Intermediate
        }
    }
}

impl Display for SignalClass {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            SignalClass::Strong => write!(f, "strong"),
            SignalClass::Intermediate => write!(f, "intermediate"),
            SignalClass::Weak => write!(f, "weak"),
        }
    }
}
