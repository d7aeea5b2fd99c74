//! # stationlog
//!
//! An auditor for assembly-line station visit logs.
//!
//! A station log records one station visit per line (e.g. `12. Shooter B shot T4`).
//! stationlog extracts the station codes, counts the completion markers, and runs
//! the grammar reducer to decide whether the log is made up entirely of complete,
//! well-ordered builds of the known product variants.
//!
//! ## Testing
//!
//! Reducer behavior is pinned down by the scenario tables in `tests/` and by
//! property tests over generated build sequences.

pub mod audit;

pub use audit::processor::{audit_source, process_file, process_source};
pub use audit::reducer::{reduce, Outcome};
pub use audit::symbol::{Symbol, SymbolStream};
