//! Grammar reducer for station visit streams
//!
//! The reducer decides whether a symbol stream is entirely composed of valid,
//! complete build sequences, and reduces it to empty as proof. It repeatedly
//! rewrites the leftmost occurrence of any build rule, keeping only the gap
//! contents of each match, until the stream is empty (`Reduced`) or a full
//! scan finds no applicable rule (`Stuck`).

pub mod engine;
pub mod rules;

pub use engine::{reduce, Outcome};
pub use rules::{RewriteRule, RuleMatch, BUILD_RULES};
