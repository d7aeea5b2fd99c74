//! Token definitions for station log lines
//!
//! Tokens are defined using the logos derive macro. The lexer only cares about
//! station codes and line boundaries; everything else on a line (timestamps,
//! shooter names, punctuation) is skipped.

use logos::Logos;

/// All tokens the station log lexer produces.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[^T\n]+")] // anything that cannot start a station code
#[logos(skip "T")] // a lone T not followed by a digit (e.g. in "Total")
pub enum Token {
    /// A station code: `T` followed by one or two digits. Two digits win at
    /// the same position, so `T12` never lexes as `T1`.
    #[regex("T[0-9][0-9]?", |lex| lex.slice().to_string())]
    Station(String),

    // Line breaks
    #[token("\n")]
    Newline,
}

impl Token {
    /// Check if this token is a station code.
    pub fn is_station(&self) -> bool {
        matches!(self, Token::Station(_))
    }
}
