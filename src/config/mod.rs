//! Configuration for the enrollment report.

use crate::stats::MissingValuePolicy;

/// Configuration for report generation
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// How missing enrollment figures are treated in reductions
    pub missing_values: MissingValuePolicy,
    /// Enrollment figure a single grade must exceed to count as a large cohort
    pub cohort_threshold: u32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            missing_values: MissingValuePolicy::IgnoreMissing,
            cohort_threshold: 500,
        }
    }
}
