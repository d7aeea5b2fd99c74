//! Property-based tests for the reducer and the marker counter
//!
//! These pin down the structural guarantees: reduction always terminates,
//! complete builds always collapse, a single missing anchor is always caught,
//! and marker counting is a literal, order-independent tally.

use proptest::prelude::*;
use stationlog::audit::counter::{marker_counts, CompletionTally, AXLE_MARKER, GEAR32_MARKER};
use stationlog::audit::reducer::{reduce, Outcome};
use stationlog::audit::symbol::SymbolStream;

const GEAR32: &[&str] = &["T1", "T2", "T4", "T6", "T8"];
const GEAR24: &[&str] = &["T1", "T3", "T5", "T7", "T8"];
const AXLE: &[&str] = &["T9", "T10", "T11", "T12"];

/// Generate one complete build instance.
fn instance_strategy() -> impl Strategy<Value = Vec<&'static str>> {
    prop_oneof![
        Just(GEAR32.to_vec()),
        Just(GEAR24.to_vec()),
        Just(AXLE.to_vec()),
    ]
}

/// Generate an arbitrary station code from the known alphabet.
fn station_code_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "T1", "T2", "T3", "T4", "T5", "T6", "T7", "T8", "T9", "T10", "T11", "T12",
    ])
}

fn stream_of(codes: &[&str]) -> SymbolStream {
    SymbolStream::from_codes(codes)
}

proptest! {
    #[test]
    fn concatenated_complete_builds_reduce(
        instances in prop::collection::vec(instance_strategy(), 0..6)
    ) {
        let codes: Vec<&str> = instances.concat();
        prop_assert_eq!(reduce(stream_of(&codes)), Outcome::Reduced);
    }

    #[test]
    fn axle_filler_inside_gear_gaps_reduces(
        gear in prop_oneof![Just(GEAR32.to_vec()), Just(GEAR24.to_vec())],
        position in 0..=5usize,
    ) {
        // Drop a whole axle between two gear stations; it rides along as gap
        // content and collapses on a later iteration.
        let mut codes: Vec<&str> = gear[..position].to_vec();
        codes.extend_from_slice(AXLE);
        codes.extend_from_slice(&gear[position..]);
        prop_assert_eq!(reduce(stream_of(&codes)), Outcome::Reduced);
    }

    #[test]
    fn reduction_terminates_and_residual_is_a_sub_multiset(
        codes in prop::collection::vec(station_code_strategy(), 0..40)
    ) {
        let stream = stream_of(&codes);
        match reduce(stream) {
            Outcome::Reduced => {}
            Outcome::Stuck(residual) => {
                prop_assert!(residual.len() <= codes.len());
                // Every residual symbol was present in the input at least as
                // many times as it appears in the residual.
                for symbol in &residual {
                    let in_residual =
                        residual.iter().filter(|s| *s == symbol).count();
                    let in_input =
                        codes.iter().filter(|&&c| c == symbol.as_str()).count();
                    prop_assert!(in_residual <= in_input);
                }
            }
        }
    }

    #[test]
    fn removing_one_anchor_gets_stuck(
        (instance, dropped) in instance_strategy()
            .prop_flat_map(|inst| {
                let len = inst.len();
                (Just(inst), 0..len)
            })
    ) {
        let mut codes = instance;
        codes.remove(dropped);
        let outcome = reduce(stream_of(&codes));
        // Nothing matches with an anchor missing, so the whole remaining
        // stream is the residual, orphaned anchors included.
        let expected: Vec<_> = codes.iter().map(|c| c.to_string()).collect();
        match outcome {
            Outcome::Stuck(residual) => {
                let residual_codes: Vec<String> =
                    residual.iter().map(|s| s.as_str().to_string()).collect();
                prop_assert_eq!(residual_codes, expected);
            }
            Outcome::Reduced => prop_assert!(false, "expected a stuck outcome"),
        }
    }

    #[test]
    fn marker_counts_match_a_naive_count(
        codes in prop::collection::vec(station_code_strategy(), 0..40)
    ) {
        let counts = marker_counts(&stream_of(&codes), &[GEAR32_MARKER, AXLE_MARKER]);
        let naive_gear32 = codes.iter().filter(|&&c| c == GEAR32_MARKER).count();
        let naive_axles = codes.iter().filter(|&&c| c == AXLE_MARKER).count();
        prop_assert_eq!(counts[GEAR32_MARKER], naive_gear32);
        prop_assert_eq!(counts[AXLE_MARKER], naive_axles);
    }

    #[test]
    fn marker_counts_are_order_independent(
        codes in prop::collection::vec(station_code_strategy(), 0..40)
    ) {
        let tally = CompletionTally::scan(&stream_of(&codes));
        let mut reversed = codes.clone();
        reversed.reverse();
        let reversed_tally = CompletionTally::scan(&stream_of(&reversed));
        prop_assert_eq!(tally, reversed_tally);
    }
}
