//! A Rust library for loading school enrollment data into a dense
//! (year, school, grade) grid, with slicing, summary statistics, and
//! report generation.

pub mod config;
pub mod data;
pub mod directory;
pub mod error;
pub mod report;
pub mod stats;
pub mod store;

// Re-export the most common types for easier use
// Core types
pub use config::ReportConfig;
pub use error::{EnrollmentError, Result};
pub use store::{EnrollmentStore, GRADES, NUM_GRADES, NUM_SCHOOLS, NUM_YEARS, YEARS};

// Directory and resolution
pub use directory::{SchoolDirectory, SchoolRef};

// Raw dataset loading
pub use data::RawDataset;

// Reductions
pub use stats::{MissingValuePolicy, truncate};

// Report assembly
pub use report::EnrollmentStatistics;
