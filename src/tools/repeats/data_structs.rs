use std::fmt::Display;

use itertools::Itertools;
use serde::{
    Serialize,
    Serializer,
};

use crate::data_structs::typedef::{
    PValueType,
    PosType,
};
use crate::data_structs::SignalClass;
use crate::tools::repeats::profile::PhaseProfile;
use crate::tools::repeats::RepeatConfig;

/// Contiguous run `[start, end)` of the input sequence together with its
/// phase profile.
///
/// A segment borrows the sequence it was cut from. Merging never touches an
/// existing segment: [`Segment::merge`] and [`Segment::bridge`] build a new,
/// longer segment with a freshly computed profile, and the merged-away
/// segments are simply dropped by the caller.
#[derive(Clone, Debug)]
pub struct Segment<'a> {
    parent:  &'a [u8],
    start:   PosType,
    end:     PosType,
    profile: PhaseProfile,
}

impl<'a> Segment<'a> {
    /// # Panics
    ///
    /// If the range is empty or lies outside `parent`, or if `period` is
    /// zero.
    pub fn new(
        parent: &'a [u8],
        start: PosType,
        end: PosType,
        period: usize,
    ) -> Segment<'a> {
        assert!(
            start < end && end <= parent.len(),
            "Invalid segment range {}..{} for sequence of length {}",
            start,
            end,
            parent.len()
        );
        let profile = PhaseProfile::compute(&parent[start..end], period);
        Segment {
            parent,
            start,
            end,
            profile,
        }
    }

    /// Symbols covered by the segment.
    pub fn content(&self) -> &'a [u8] { &self.parent[self.start..self.end] }

    /// Offset of the first symbol in the input sequence.
    pub fn start(&self) -> PosType { self.start }

    /// Offset one past the last symbol.
    pub fn end(&self) -> PosType { self.end }

    pub fn length(&self) -> usize { self.end - self.start }

    pub fn word(&self) -> &str { self.profile.word() }

    pub fn position_pvalues(&self) -> &[PValueType] {
        self.profile.position_pvalues()
    }

    pub fn combined_pvalue(&self) -> PValueType {
        self.profile.combined_pvalue()
    }

    pub fn profile(&self) -> &PhaseProfile { &self.profile }

    pub fn period(&self) -> usize { self.profile.period() }

    /// Appends the directly following segment `other`.
    pub fn merge(
        &self,
        other: &Self,
    ) -> Segment<'a> {
        debug_assert!(std::ptr::eq(self.parent, other.parent));
        debug_assert_eq!(self.end, other.start, "Segments are not adjacent");
        self.extend_to(other.end)
    }

    /// Appends `middle` and then `right`, which must follow each other
    /// directly.
    pub fn bridge(
        &self,
        middle: &Self,
        right: &Self,
    ) -> Segment<'a> {
        debug_assert!(std::ptr::eq(self.parent, middle.parent));
        debug_assert!(std::ptr::eq(self.parent, right.parent));
        debug_assert_eq!(self.end, middle.start, "Segments are not adjacent");
        debug_assert_eq!(middle.end, right.start, "Segments are not adjacent");
        self.extend_to(right.end)
    }

    fn extend_to(
        &self,
        end: PosType,
    ) -> Segment<'a> {
        Segment::new(self.parent, self.start, end, self.period())
    }

    pub fn to_region(
        &self,
        config: &RepeatConfig,
    ) -> RepeatRegion {
        RepeatRegion::from_segment(self, config)
    }
}

impl PartialEq for Segment<'_> {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        std::ptr::eq(self.parent, other.parent)
            && self.start == other.start
            && self.end == other.end
    }
}

impl Display for Segment<'_> {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(
            f,
            "Start: {}, Len: {}, Word: {}, Score(P): {:e}",
            self.start,
            self.length(),
            self.word(),
            self.combined_pvalue()
        )
    }
}

/// Owned description of a detected region, detached from the input
/// sequence. This is the row written by the command-line tool.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RepeatRegion {
    pub start:            PosType,
    pub end:              PosType,
    pub length:           usize,
    pub word:             String,
    #[serde(serialize_with = "serialize_scientific")]
    pub combined_pvalue:  PValueType,
    #[serde(serialize_with = "serialize_pvalue_list")]
    pub position_pvalues: Vec<PValueType>,
    pub class:            SignalClass,
}

impl RepeatRegion {
    pub(crate) fn from_segment(
        segment: &Segment,
        config: &RepeatConfig,
    ) -> Self {
        RepeatRegion {
            start:            segment.start(),
            end:              segment.end(),
            length:           segment.length(),
            word:             segment.word().to_string(),
            combined_pvalue:  segment.combined_pvalue(),
            position_pvalues: segment.position_pvalues().to_vec(),
            class:            config.classify(segment.combined_pvalue()),
        }
    }
}

fn serialize_scientific<S>(
    x: &f64,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer, {
    serializer.serialize_str(&format!("{:e}", x))
}

/// Comma-joined so that the list fits in a single TSV cell.
fn serialize_pvalue_list<S>(
    values: &[f64],
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer, {
    serializer.serialize_str(&values.iter().map(|v| format!("{:e}", v)).join(","))
}

#[cfg(test)]
mod tests {
    use super::*;

    static SEQ: &[u8] = b"GTGACGGTGTAGACGTTAGGACTAGTGACGGTGTAG";

    #[test]
    fn segment_exposes_content() {
        let segment = Segment::new(SEQ, 12, 24, 3);
        assert_eq!(segment.content(), b"ACGTTAGGACTA");
        assert_eq!(segment.start(), 12);
        assert_eq!(segment.end(), 24);
        assert_eq!(segment.length(), 12);
        assert_eq!(segment.word(), "ATA");
        assert_eq!(segment.period(), 3);
        assert_eq!(segment.position_pvalues().len(), 3);
    }

    #[test]
    fn merge_builds_new_segment() {
        let left = Segment::new(SEQ, 0, 12, 3);
        let right = Segment::new(SEQ, 12, 24, 3);
        let merged = left.merge(&right);

        assert_eq!(merged.start(), 0);
        assert_eq!(merged.length(), 24);
        assert_eq!(merged.content(), &SEQ[..24]);
        assert_eq!(merged.profile(), &PhaseProfile::compute(&SEQ[..24], 3));
        // Inputs are untouched.
        assert_eq!(left.length(), 12);
        assert_eq!(left.word(), "GTG");
    }

    #[test]
    fn bridge_spans_three_segments() {
        let left = Segment::new(SEQ, 0, 12, 3);
        let middle = Segment::new(SEQ, 12, 24, 3);
        let right = Segment::new(SEQ, 24, 36, 3);
        let bridged = left.bridge(&middle, &right);

        assert_eq!(bridged.start(), 0);
        assert_eq!(bridged.length(), 36);
        assert_eq!(bridged.content(), SEQ);
        assert_eq!(bridged.word(), "GTG");
        assert_eq!(bridged, Segment::new(SEQ, 0, 36, 3));
    }

    #[test]
    #[should_panic(expected = "Invalid segment range")]
    fn empty_segment_panics() {
        let _ = Segment::new(SEQ, 5, 5, 3);
    }

    #[test]
    fn region_row() {
        let config = RepeatConfig::default();
        let region = Segment::new(SEQ, 0, 12, 3).to_region(&config);
        assert_eq!(region.start, 0);
        assert_eq!(region.end, 12);
        assert_eq!(region.length, 12);
        assert_eq!(region.word, "GTG");
        assert_eq!(region.class, SignalClass::Strong);
        assert_eq!(region.position_pvalues.len(), 3);

        let json = serde_json::to_value(&region).unwrap();
        assert_eq!(json["word"], "GTG");
        assert_eq!(json["class"], "Strong");
        assert_eq!(
            json["position_pvalues"].as_str().unwrap().split(',').count(),
            3
        );
    }

    #[test]
    fn display_format() {
        let segment = Segment::new(SEQ, 0, 12, 3);
        let text = segment.to_string();
        assert!(text.starts_with("Start: 0, Len: 12, Word: GTG, Score(P): "));
    }
}
