//! Fixpoint reduction loop
//!
//! The engine owns the stream for the duration of the run. It normalizes the
//! symbol names through the alias table, then repeatedly commits the leftmost
//! rule match, one replacement per iteration, rescanning from the start of
//! the shorter stream each time. Every application removes at least the
//! matched anchors, so the stream strictly shrinks and the loop is bounded by
//! the initial stream length.

use crate::audit::reducer::rules::{RuleMatch, BUILD_RULES};
use crate::audit::symbol::{alias, Symbol, SymbolStream};
use serde::Serialize;

/// Terminal report of a reduction run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Outcome {
    /// The stream reduced to empty: every symbol belonged to some completed
    /// build.
    Reduced,
    /// A fixpoint was reached with symbols left over. The residual carries the
    /// original (un-aliased) station names, in stream order.
    Stuck(Vec<Symbol>),
}

impl Outcome {
    /// Check if the stream was fully reduced.
    pub fn is_reduced(&self) -> bool {
        matches!(self, Outcome::Reduced)
    }

    /// The residual symbols, if the run got stuck.
    pub fn residual(&self) -> Option<&[Symbol]> {
        match self {
            Outcome::Reduced => None,
            Outcome::Stuck(residual) => Some(residual),
        }
    }
}

/// Find the leftmost match across all rules. An earlier rule wins a tie at
/// the same start offset.
fn leftmost_match(encoded: &str) -> Option<RuleMatch> {
    let mut best: Option<RuleMatch> = None;
    for rule in BUILD_RULES.iter() {
        if let Some(matched) = rule.find(encoded) {
            let is_better = best.as_ref().map_or(true, |b| matched.start < b.start);
            if is_better {
                best = Some(matched);
            }
        }
    }
    best
}

/// Reduce a symbol stream to empty, or report the residual that no rule can
/// consume. The stream is taken by value; callers needing the original data
/// must snapshot it first.
///
/// A `Stuck` result is a normal negative outcome signaling a malformed or
/// incomplete set of build sequences, not a crash condition.
pub fn reduce(stream: SymbolStream) -> Outcome {
    let mut encoded = alias::normalize(stream).encode();

    loop {
        if encoded.is_empty() {
            return Outcome::Reduced;
        }

        match leftmost_match(&encoded) {
            Some(matched) => {
                // Commit exactly one replacement, then rescan: a replacement
                // can expose new matches or destroy overlapping candidates.
                let mut next = String::with_capacity(encoded.len());
                next.push_str(&encoded[..matched.start]);
                next.push_str(&matched.kept);
                next.push_str(&encoded[matched.end..]);
                encoded = next;
            }
            None => {
                let residual = alias::restore(SymbolStream::decode(&encoded));
                return Outcome::Stuck(residual.into_symbols());
            }
        }
    }
}
