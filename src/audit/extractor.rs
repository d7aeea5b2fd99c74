//! Symbol extraction from raw station logs
//!
//! This module turns raw log text into the flat symbol stream consumed by the
//! counter and the reducer. Each consumable log line carries exactly one
//! station code (e.g. `12. Shooter B shot T4`); the extractor takes the first
//! station code on each line, preferring the two-digit reading at the same
//! position (`T12`, never `T1` inside `T12`).
//!
//! Lines that are blank (or whitespace only) are skipped. A non-blank line
//! with no station code is an extraction error: by the time the core runs,
//! every element of the stream must be a legal symbol.

pub mod extractor_impl;
pub mod tokens;

pub use extractor_impl::{extract_symbols, tokenize, ExtractError};
pub use tokens::Token;
