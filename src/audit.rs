//! Main module for the station log audit pipeline

pub mod counter;
pub mod extractor;
pub mod processor;
pub mod reducer;
pub mod report;
pub mod symbol;
