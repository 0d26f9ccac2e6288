//! Error handling for the enrollment reader.

/// Specialized error type for enrollment loading and reporting
#[derive(Debug, thiserror::Error)]
pub enum EnrollmentError {
    /// User selection matched neither a school code nor a school name
    #[error("You must enter a valid school name or code.")]
    InvalidSchool,

    /// Grade outside the grades covered by the grid
    #[error("Grade must be one of [10, 11, 12], got {0}")]
    InvalidGrade(u32),

    /// Year outside the years covered by the grid
    #[error("Year must be one of [2013, ..., 2022], got {0}")]
    InvalidYear(u32),

    /// Dataset does not have the expected shape or content
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// A reduction that must operate on a non-empty set was given an empty one
    #[error("Empty reduction: {0}")]
    EmptyReduction(&'static str),

    /// Error opening or reading a data file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error decoding the JSON dataset
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for enrollment reader operations
pub type Result<T> = std::result::Result<T, EnrollmentError>;
