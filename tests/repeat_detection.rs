use assert_approx_eq::assert_approx_eq;
use itertools::Itertools;
use repsplorer::prelude::*;
use rstest::rstest;

const REPEAT: &str = "GTGACGGTGTAG";
const SPACER: &str = "ACGTTAGGACTA";
const WEAK_SPACER: &str = "ACGCGTGTATAC";

fn concat_contents(segments: &[Segment]) -> Vec<u8> {
    segments
        .iter()
        .flat_map(|s| s.content().iter().copied())
        .collect_vec()
}

fn assert_tiles(
    segments: &[Segment],
    sequence: &[u8],
) {
    assert!(!segments.is_empty());
    assert_eq!(segments[0].start(), 0);
    for (left, right) in segments.iter().tuple_windows() {
        assert_eq!(left.end(), right.start());
    }
    assert_eq!(segments.last().unwrap().end(), sequence.len());
    assert_eq!(concat_contents(segments), sequence);
}

#[test]
fn reference_scenario_scores() {
    let detector = RepeatDetector::try_new(RepeatConfig::default()).unwrap();
    let stages = detector.run_stages(DEMO_SEQUENCE.as_bytes()).unwrap();

    let first = &stages.segmented[0];
    assert_eq!(first.word(), "GTG");
    assert_approx_eq!(first.position_pvalues()[0], 0.26171875, 1e-12);
    assert_approx_eq!(first.position_pvalues()[2], 0.00390625, 1e-12);
    assert_approx_eq!(first.combined_pvalue(), 2.6756e-4, 1e-7);

    let spacer = &stages.segmented[1];
    assert_eq!(spacer.word(), "ATA");
    assert_approx_eq!(spacer.combined_pvalue(), 9.0852e-3, 1e-6);

    assert_eq!(stages.noise_merged.len(), 3);
}

#[test]
fn reference_scenario_merges_when_spacer_is_weak() {
    let config = RepeatConfig::default()
        .with_weak_pvalue(0.005)
        .with_strong_pvalue(0.001);
    let detector = RepeatDetector::try_new(config).unwrap();
    let stages = detector.run_stages(DEMO_SEQUENCE.as_bytes()).unwrap();

    assert_eq!(stages.exact_merged.len(), 3);
    assert_eq!(stages.noise_merged.len(), 1);
    let merged = &stages.noise_merged[0];
    assert_eq!((merged.start(), merged.length()), (0, 36));
    assert_eq!(merged.word(), "GTG");
    assert_eq!(
        merged.profile(),
        &PhaseProfile::compute(DEMO_SEQUENCE.as_bytes(), 3)
    );
}

#[test]
fn weak_spacer_merges_with_defaults() {
    let sequence = [REPEAT, WEAK_SPACER, REPEAT].concat();
    let detector = RepeatDetector::try_new(RepeatConfig::default()).unwrap();
    let regions = detector.detect_regions(sequence.as_bytes()).unwrap();

    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0].length, 36);
    assert_eq!(regions[0].class, SignalClass::Strong);
}

#[rstest]
#[case(1)]
#[case(11)]
#[case(12)]
#[case(13)]
#[case(35)]
#[case(100)]
fn segments_tile_input_at_every_stage(#[case] len: usize) {
    let sequence = [REPEAT, SPACER, WEAK_SPACER, REPEAT, REPEAT, "TTTTAAAACCCCGGGG"]
        .concat()
        .repeat(2)
        .into_bytes()[..len]
        .to_vec();
    let detector = RepeatDetector::try_new(RepeatConfig::default()).unwrap();
    let stages = detector.run_stages(&sequence).unwrap();

    assert_tiles(&stages.segmented, &sequence);
    assert_tiles(&stages.exact_merged, &sequence);
    assert_tiles(&stages.noise_merged, &sequence);
    assert!(stages.exact_merged.len() <= stages.segmented.len());
    assert!(stages.noise_merged.len() <= stages.exact_merged.len());
}

#[test]
fn profiles_are_consistent_everywhere() {
    let sequence = [REPEAT, REPEAT, WEAK_SPACER, REPEAT, SPACER, SPACER].concat();
    let detector = RepeatDetector::try_new(RepeatConfig::default()).unwrap();
    let stages = detector.run_stages(sequence.as_bytes()).unwrap();

    for segment in stages
        .segmented
        .iter()
        .chain(stages.exact_merged.iter())
        .chain(stages.noise_merged.iter())
    {
        assert_eq!(segment.word().len(), 3);
        assert_eq!(segment.position_pvalues().len(), 3);
        assert!(segment
            .position_pvalues()
            .iter()
            .all(|p| (0.0..=1.0).contains(p)));
        assert!(segment.combined_pvalue() > 0.0 && segment.combined_pvalue() <= 1.0);
        assert_eq!(
            segment.profile(),
            &PhaseProfile::compute(segment.content(), 3)
        );
    }
}

#[test]
fn short_sequence_is_one_segment() {
    let detector = RepeatDetector::try_new(RepeatConfig::default()).unwrap();
    let segments = detector.detect(b"GTGGT").unwrap();
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].length(), 5);
    assert_eq!(segments[0].word(), "GTG");
}

#[test]
fn unknown_symbols_never_count() {
    let detector = RepeatDetector::try_new(RepeatConfig::default()).unwrap();
    let segments = detector.detect(b"NNNNNNNNNNNN").unwrap();
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].word(), "AAA");
    assert_eq!(segments[0].combined_pvalue(), 1.0);

    let lower = prepare_sequence("gtg acg gtg tag", false);
    let upper = prepare_sequence("gtg acg gtg tag", true);
    assert_eq!(detector.detect(&lower).unwrap()[0].word(), "AAA");
    assert_eq!(detector.detect(&upper).unwrap()[0].word(), "GTG");
}

#[test]
fn long_segments_stay_finite() {
    let sequence = REPEAT.repeat(2000);
    let detector = RepeatDetector::try_new(RepeatConfig::default()).unwrap();
    let segments = detector.detect(sequence.as_bytes()).unwrap();

    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].length(), 24_000);
    assert!(segments[0].combined_pvalue().is_finite());
    assert!(segments[0].combined_pvalue() > 0.0);
    assert!(segments[0].combined_pvalue() < 1e-300);
}

#[test]
fn errors() {
    let detector = RepeatDetector::try_new(RepeatConfig::default()).unwrap();
    assert_eq!(detector.detect(b"").unwrap_err(), RepeatError::EmptyInput);

    for config in [
        RepeatConfig::default().with_period(0),
        RepeatConfig::default().with_segment_length(0),
        RepeatConfig::default().with_weak_pvalue(1.5),
    ] {
        assert!(matches!(
            RepeatDetector::try_new(config),
            Err(RepeatError::InvalidConfiguration(_))
        ));
    }
}
