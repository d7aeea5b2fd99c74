//! Log processing API
//!
//! This module provides the entry points for processing station logs from
//! source text or from a file, with selectable output formats. It wires the
//! extractor, counter, and reducer together: the counter scans the stream
//! before the reducer consumes it by value.

use crate::audit::counter::CompletionTally;
use crate::audit::extractor::{extract_symbols, ExtractError};
use crate::audit::reducer::reduce;
use crate::audit::report::AuditReport;
use std::fmt;
use std::fs;
use std::path::Path;

/// Output format for a processed log.
#[derive(Debug, Clone, PartialEq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    /// Parse a format string like `"text"` or `"json"`.
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        match format_str {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(ProcessingError::InvalidFormat(other.to_string())),
        }
    }
}

/// Errors that can occur during log processing.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingError {
    IoError(String),
    InvalidFormat(String),
    Extract(ExtractError),
}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::IoError(msg) => write!(f, "IO error: {}", msg),
            ProcessingError::InvalidFormat(format) => write!(f, "Invalid format: {}", format),
            ProcessingError::Extract(err) => write!(f, "Extraction error: {}", err),
        }
    }
}

impl std::error::Error for ProcessingError {}

impl From<ExtractError> for ProcessingError {
    fn from(err: ExtractError) -> Self {
        ProcessingError::Extract(err)
    }
}

/// Audit raw log text: extract the stream, tally the markers, reduce.
pub fn audit_source(source: &str) -> Result<AuditReport, ExtractError> {
    let stream = extract_symbols(source)?;
    let tally = CompletionTally::scan(&stream);
    let outcome = reduce(stream);
    Ok(AuditReport { tally, outcome })
}

/// Audit raw log text and render the report in the requested format.
pub fn process_source(source: &str, format: &OutputFormat) -> Result<String, ProcessingError> {
    let report = audit_source(source)?;
    match format {
        OutputFormat::Text => Ok(report.render_text()),
        OutputFormat::Json => serde_json::to_string_pretty(&report)
            .map_err(|e| ProcessingError::IoError(e.to_string())),
    }
}

/// Audit a log file and render the report in the requested format.
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    format: &OutputFormat,
) -> Result<String, ProcessingError> {
    let source = fs::read_to_string(file_path.as_ref())
        .map_err(|e| ProcessingError::IoError(e.to_string()))?;
    process_source(&source, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::reducer::Outcome;

    const COMPLETE_LOG: &str = "\
1. Shooter A shot T1
2. Shooter B shot T2
3. Shooter B shot T4
4. Shooter B shot T6
5. Shooter D shot T8
";

    #[test]
    fn test_output_format_parsing() {
        assert_eq!(OutputFormat::from_string("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_string("json").unwrap(), OutputFormat::Json);
        assert!(OutputFormat::from_string("xml").is_err());
    }

    #[test]
    fn test_audit_source_complete_log() {
        let report = audit_source(COMPLETE_LOG).unwrap();
        assert_eq!(report.outcome, Outcome::Reduced);
        assert_eq!(report.tally.gear32, 1);
        assert_eq!(report.tally.total(), 1);
    }

    #[test]
    fn test_audit_source_propagates_extract_errors() {
        let err = audit_source("garbage line with no code").unwrap_err();
        assert_eq!(err, ExtractError::MissingStation { line: 1 });
    }

    #[test]
    fn test_process_source_text() {
        let output = process_source(COMPLETE_LOG, &OutputFormat::Text).unwrap();
        assert!(output.contains("Number of 32 tooth gears completed: 1"));
        assert!(output.contains("Number of total products completed: 1"));
    }

    #[test]
    fn test_process_source_json() {
        let output = process_source(COMPLETE_LOG, &OutputFormat::Json).unwrap();
        assert!(output.contains("\"Reduced\""));
        assert!(output.contains("\"gear32\": 1"));
    }

    #[test]
    fn test_process_source_stuck_log() {
        let output = process_source("shot T1\nshot T8\n", &OutputFormat::Text).unwrap();
        assert!(output.contains("Residual stations: T1 T8"));
    }

    #[test]
    fn test_process_missing_file() {
        let result = process_file("no/such/log.txt", &OutputFormat::Text);
        assert!(matches!(result, Err(ProcessingError::IoError(_))));
    }
}
