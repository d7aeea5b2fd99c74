//! Implementation of the station log extractor
//!
//! Tokenization is handled entirely by logos; extraction walks the log line by
//! line and keeps the first station code of each line.

use crate::audit::extractor::tokens::Token;
use crate::audit::symbol::{Symbol, SymbolStream};
use logos::Logos;
use std::fmt;

/// Errors that can occur while extracting symbols from a log.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractError {
    /// A non-blank line carried no station code. Lines are 1-indexed.
    MissingStation { line: usize },
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::MissingStation { line } => {
                write!(f, "no station code on line {}", line)
            }
        }
    }
}

impl std::error::Error for ExtractError {}

/// Convenience function to tokenize full log text and collect all tokens.
pub fn tokenize(source: &str) -> Vec<Token> {
    Token::lexer(source)
        .filter_map(|result| result.ok())
        .collect()
}

/// Extract one symbol per consumable log line: the first station code on the
/// line. Blank lines are skipped; a non-blank line with no station code is an
/// error.
pub fn extract_symbols(source: &str) -> Result<SymbolStream, ExtractError> {
    let mut symbols = Vec::new();

    for (index, line) in source.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let first_station = Token::lexer(line)
            .filter_map(|result| result.ok())
            .find_map(|token| match token {
                Token::Station(code) => Some(code),
                Token::Newline => None,
            });

        match first_station {
            Some(code) => symbols.push(Symbol::new(code)),
            None => return Err(ExtractError::MissingStation { line: index + 1 }),
        }
    }

    Ok(SymbolStream::new(symbols))
}
