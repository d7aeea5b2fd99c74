//! Rewrite rules for the recognized build shapes
//!
//! Rules are regex patterns over the encoded stream (see
//! [`SymbolStream::encode`](crate::audit::symbol::SymbolStream::encode)):
//! every symbol is rendered as its aliased name plus one trailing space, so an
//! anchor like `T1 ` can only ever match a whole symbol.
//!
//! A gap is `((?:\S+ )*?)`: the shortest run, possibly empty, of whole
//! symbols between two anchors. Gap captures are preserved on rule
//! application; the anchors are discarded.
//!
//! Anchors are written in the aliased alphabet of
//! [`alias::STATION_ALIASES`](crate::audit::symbol::alias::STATION_ALIASES),
//! so the axle rule ends in `TA TB TC`, not `T10 T11 T12`.
//!
//! Rule order matters: when two rules match at the same offset, the earlier
//! rule wins.

use once_cell::sync::Lazy;
use regex::Regex;

/// Lazy gap: shortest run (possibly empty) of whole encoded symbols.
const GAP: &str = r"((?:\S+ )*?)";

/// A compiled rewrite rule over the encoded stream.
pub struct RewriteRule {
    name: &'static str,
    regex: Regex,
}

/// The leftmost match of a rule within an encoded stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMatch {
    /// Byte offset where the match starts in the encoded stream.
    pub start: usize,
    /// Byte offset one past the end of the match.
    pub end: usize,
    /// Concatenated gap captures: everything the rule keeps.
    pub kept: String,
}

impl RewriteRule {
    fn new(name: &'static str, pattern: &str) -> Self {
        Self {
            name,
            regex: Regex::new(pattern).expect("static rule pattern"),
        }
    }

    /// Rule name, used in diagnostics.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Find the leftmost occurrence of this rule in the encoded stream.
    ///
    /// Gap captures that did not participate in the match (the untaken branch
    /// of an alternation) are skipped.
    pub fn find(&self, encoded: &str) -> Option<RuleMatch> {
        let caps = self.regex.captures(encoded)?;
        let full = caps.get(0).expect("group 0 is the full match");
        let kept: String = (1..caps.len())
            .filter_map(|group| caps.get(group))
            .map(|capture| capture.as_str())
            .collect();
        Some(RuleMatch {
            start: full.start(),
            end: full.end(),
            kept,
        })
    }
}

/// The static rule set, in priority order.
///
/// Shape A (gear): opening anchor `T1`, then either the 32-tooth interior
/// chain `T2 .. T4 .. T6` or the 24-tooth chain `T3 .. T5 .. T7`, then the
/// closing anchor `T8`.
///
/// Shape B (axle): the chain `T9 .. TA .. TB .. TC`, no alternation.
pub static BUILD_RULES: Lazy<Vec<RewriteRule>> = Lazy::new(|| {
    vec![
        RewriteRule::new(
            "gear",
            &format!(
                "T1 {gap}(?:T2 {gap}T4 {gap}T6 |T3 {gap}T5 {gap}T7 ){gap}T8 ",
                gap = GAP
            ),
        ),
        RewriteRule::new(
            "axle",
            &format!("T9 {gap}TA {gap}TB {gap}TC ", gap = GAP),
        ),
    ]
});
