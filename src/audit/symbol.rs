//! Symbol types shared across extraction, counting, and reduction.
//!
//! A symbol is one station-visit token extracted from a log record. The stream
//! keeps symbols in extraction order; order is significant and must survive
//! every transformation except reduction itself.
//!
//! Encoded Form
//!
//!     The reducer matches rules against an encoded string form of the stream:
//!     every symbol is rendered as its name followed by one space. Because no
//!     symbol name contains a space, an anchor pattern in a rule can only ever
//!     match a whole symbol, never a fragment of one.

use serde::Serialize;
use std::fmt;

/// One station-visit token extracted from a log record.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Symbol(String);

impl Symbol {
    /// Create a symbol from a station code like `"T4"`.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// The station code this symbol carries.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Symbol {
    fn from(code: &str) -> Self {
        Symbol::new(code)
    }
}

/// An ordered sequence of symbols; the sole artifact the reducer operates on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolStream {
    symbols: Vec<Symbol>,
}

impl SymbolStream {
    /// Create a stream from already-extracted symbols.
    pub fn new(symbols: Vec<Symbol>) -> Self {
        Self { symbols }
    }

    /// Convenience constructor from raw station codes.
    pub fn from_codes(codes: &[&str]) -> Self {
        Self::new(codes.iter().map(|c| Symbol::new(*c)).collect())
    }

    /// Borrow the symbols in extraction order.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Consume the stream, yielding its symbols.
    pub fn into_symbols(self) -> Vec<Symbol> {
        self.symbols
    }

    /// Number of symbols in the stream.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check if the stream is empty.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Render the stream in its encoded form: each symbol name followed by
    /// one space. `["T1", "T2"]` becomes `"T1 T2 "`.
    pub fn encode(&self) -> String {
        let mut encoded = String::new();
        for symbol in &self.symbols {
            encoded.push_str(symbol.as_str());
            encoded.push(' ');
        }
        encoded
    }

    /// Rebuild a stream from its encoded form.
    pub fn decode(encoded: &str) -> Self {
        Self::new(
            encoded
                .split(' ')
                .filter(|chunk| !chunk.is_empty())
                .map(Symbol::new)
                .collect(),
        )
    }
}

impl FromIterator<Symbol> for SymbolStream {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Alias table for symbols whose names are lexical prefixes of other symbols.
///
/// `T1` is a lexical prefix of `T10`, `T11`, and `T12`, so a string-level
/// anchor for `T1` could spuriously match inside the longer names. The longer,
/// more-specific symbols are renamed to collision-free aliases before any
/// rule matching. The relabeling is lossless and is reversed only for
/// reporting, never inside the reducer's internal representation.
pub mod alias {
    use super::{Symbol, SymbolStream};

    /// Static alias table, original name first. Rule anchors are written in
    /// the aliased alphabet, so this table is part of the grammar definition.
    pub const STATION_ALIASES: &[(&str, &str)] = &[
        ("T10", "TA"),
        ("T11", "TB"),
        ("T12", "TC"),
    ];

    fn normalize_symbol(symbol: Symbol) -> Symbol {
        for (original, aliased) in STATION_ALIASES {
            if symbol.as_str() == *original {
                return Symbol::new(*aliased);
            }
        }
        symbol
    }

    fn restore_symbol(symbol: Symbol) -> Symbol {
        for (original, aliased) in STATION_ALIASES {
            if symbol.as_str() == *aliased {
                return Symbol::new(*original);
            }
        }
        symbol
    }

    /// Apply the alias table to every symbol in the stream.
    pub fn normalize(stream: SymbolStream) -> SymbolStream {
        stream.into_symbols().into_iter().map(normalize_symbol).collect()
    }

    /// Undo the alias table, restoring original station names for reporting.
    pub fn restore(stream: SymbolStream) -> SymbolStream {
        stream.into_symbols().into_iter().map(restore_symbol).collect()
    }
}
