//! Report assembly
//!
//! Combines the completion tally and the reduction outcome into the final
//! audit report, and renders it as text or JSON. Counts are only printed for
//! a fully reduced log; a stuck log reports its residual stations instead.

use crate::audit::counter::CompletionTally;
use crate::audit::reducer::Outcome;
use serde::Serialize;

/// The combined result of auditing one station log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditReport {
    /// Marker counts from the initial scan.
    pub tally: CompletionTally,
    /// Reduction outcome for the full stream.
    pub outcome: Outcome,
}

impl AuditReport {
    /// Check if the log consisted entirely of completed builds.
    pub fn is_complete(&self) -> bool {
        self.outcome.is_reduced()
    }

    /// Render the report as plain text.
    pub fn render_text(&self) -> String {
        match &self.outcome {
            Outcome::Reduced => format!(
                "Number of axles completed: {}\n\
                 Number of 32 tooth gears completed: {}\n\
                 Number of 24 tooth gears completed: {}\n\
                 Number of total products completed: {}",
                self.tally.axles,
                self.tally.gear32,
                self.tally.gear24,
                self.tally.total(),
            ),
            Outcome::Stuck(residual) => {
                let codes: Vec<&str> = residual.iter().map(|s| s.as_str()).collect();
                format!(
                    "Incomplete or malformed build log\nResidual stations: {}",
                    codes.join(" ")
                )
            }
        }
    }
}
