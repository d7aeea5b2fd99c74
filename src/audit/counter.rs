//! Completion marker counting
//!
//! A small fixed set of marker symbols records completion of the
//! independently-tracked sub-assemblies: a gear passing its final cut, an axle
//! leaving its last station. Counting is a single read-only pass over the
//! stream and is independent of how the reducer later classifies the symbols.

use crate::audit::symbol::SymbolStream;
use serde::Serialize;
use std::collections::BTreeMap;

/// Marker recorded when a 32-tooth gear completes.
pub const GEAR32_MARKER: &str = "T6";
/// Marker recorded when a 24-tooth gear completes.
pub const GEAR24_MARKER: &str = "T7";
/// Marker recorded when an axle completes.
pub const AXLE_MARKER: &str = "T12";

/// Count literal occurrences of each marker in the stream. A marker absent
/// from the stream yields count zero, not an error.
pub fn marker_counts(stream: &SymbolStream, markers: &[&str]) -> BTreeMap<String, usize> {
    let mut counts: BTreeMap<String, usize> =
        markers.iter().map(|marker| (marker.to_string(), 0)).collect();

    for symbol in stream.symbols() {
        if let Some(count) = counts.get_mut(symbol.as_str()) {
            *count += 1;
        }
    }

    counts
}

/// Completion counts for the tracked sub-assembly types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompletionTally {
    /// 32-tooth gears completed.
    pub gear32: usize,
    /// 24-tooth gears completed.
    pub gear24: usize,
    /// Axles completed.
    pub axles: usize,
}

impl CompletionTally {
    /// Scan the stream once and tally the business markers.
    pub fn scan(stream: &SymbolStream) -> Self {
        let counts = marker_counts(stream, &[GEAR32_MARKER, GEAR24_MARKER, AXLE_MARKER]);
        Self {
            gear32: counts[GEAR32_MARKER],
            gear24: counts[GEAR24_MARKER],
            axles: counts[AXLE_MARKER],
        }
    }

    /// Gears completed across both tooth counts.
    pub fn gears(&self) -> usize {
        self.gear32 + self.gear24
    }

    /// Every completed product: gears plus axles.
    pub fn total(&self) -> usize {
        self.gears() + self.axles
    }
}
