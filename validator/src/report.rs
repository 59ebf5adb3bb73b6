//! # Validation Report Module
//!
//! This module defines the data structures and response envelope for returning
//! validation results to callers. It provides a standardized, serializable
//! format for reporting the verdict, the missing fixes, the similarity ratio,
//! and the guidance message for one attempt.
//!
//! ## JSON Output Example
//!
//! When serialized, the response will look like:
//!
//! ```json
//! {
//!   "success": true,
//!   "message": "Validation complete.",
//!   "data": {
//!     "solved": false,
//!     "missing_fixes": ["Add colon after function definition"],
//!     "similarity": 0.9411764705882353,
//!     "feedback": "You're very close! Check for small syntax differences.",
//!     "attempted_at": "..."
//!   }
//! }
//! ```
//!
//! ## Design Notes
//!
//! - [`ValidationReport`] is intended for presentation-layer output. It
//!   contains only serializable fields and is not used inside the grading
//!   logic.
//! - The [`From<ValidationReport> for ValidationReportResponse`] implementation
//!   provides ergonomic conversion for callers.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// The result of validating one submission.
///
/// - `solved`: whether the submission passed under the configured comparator.
/// - `missing_fixes`: descriptions of the key fixes absent from the submission
///   (always empty under the strict comparator).
/// - `similarity`: ratio in `[0, 1]` between the whitespace-stripped
///   submission and reference solution.
/// - `feedback`: guidance message; `None` when the submission passed.
#[derive(Debug, Serialize)]
pub struct ValidationReport {
    pub solved: bool,
    pub missing_fixes: Vec<String>,
    pub similarity: f64,
    pub feedback: Option<String>,
    /// When this attempt was validated.
    pub attempted_at: DateTime<Utc>,
}

/// The response envelope for validation results.
///
/// Wraps a [`ValidationReport`] and adds top-level `success` and `message`
/// fields for consistency with other responses a presentation layer handles.
#[derive(Debug, Serialize)]
pub struct ValidationReportResponse {
    /// Indicates the validation ran to completion.
    success: bool,
    /// A human-readable message for the caller.
    message: String,
    /// The detailed validation report.
    data: ValidationReport,
}

impl ValidationReportResponse {
    pub fn report(&self) -> &ValidationReport {
        &self.data
    }
}

/// Enables ergonomic conversion from [`ValidationReport`] to
/// [`ValidationReportResponse`].
impl From<ValidationReport> for ValidationReportResponse {
    fn from(report: ValidationReport) -> Self {
        ValidationReportResponse {
            success: true,
            message: "Validation complete.".to_string(),
            data: report,
        }
    }
}
