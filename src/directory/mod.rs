//! School directory and selection resolution.
//!
//! The directory is a fixed, insertion-ordered mapping from school code to
//! school name. Entry order defines each school's position along the grid's
//! school axis, and every entry stores that index explicitly at construction
//! so resolution never scans key order.

use log::debug;
use rustc_hash::FxHashMap;

use crate::error::{EnrollmentError, Result};

/// One directory entry with its fixed grid index
#[derive(Debug, Clone)]
pub struct SchoolEntry {
    /// School code, e.g. "1224"
    pub code: String,
    /// Full school name
    pub name: String,
    /// Position along the grid's school axis
    pub index: usize,
}

/// A resolved school selection: name, code, and grid index
///
/// Constructed once per query by [`SchoolDirectory::resolve`] and read-only
/// afterward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchoolRef {
    pub name: String,
    pub code: String,
    pub index: usize,
}

/// Fixed code-to-name mapping defining the valid schools and their grid order
#[derive(Debug, Clone)]
pub struct SchoolDirectory {
    entries: Vec<SchoolEntry>,
    by_code: FxHashMap<String, usize>,
    by_name: FxHashMap<String, usize>,
}

impl SchoolDirectory {
    /// Build a directory from (code, name) pairs in grid order
    ///
    /// Codes and names must each be unique; duplicates are a construction
    /// error.
    pub fn new(pairs: &[(&str, &str)]) -> Result<Self> {
        let mut entries = Vec::with_capacity(pairs.len());
        let mut by_code = FxHashMap::default();
        let mut by_name = FxHashMap::default();
        for (index, (code, name)) in pairs.iter().enumerate() {
            if by_code.insert((*code).to_string(), index).is_some() {
                return Err(EnrollmentError::Dataset(format!(
                    "duplicate school code {code} in directory"
                )));
            }
            if by_name.insert((*name).to_string(), index).is_some() {
                return Err(EnrollmentError::Dataset(format!(
                    "duplicate school name {name} in directory"
                )));
            }
            entries.push(SchoolEntry {
                code: (*code).to_string(),
                name: (*name).to_string(),
                index,
            });
        }
        Ok(Self {
            entries,
            by_code,
            by_name,
        })
    }

    /// The directory of Calgary high schools covered by the dataset
    pub fn calgary_high_schools() -> Result<Self> {
        Self::new(&[
            ("1224", "Centennial High School"),
            ("1679", "Robert Thirsk School"),
            ("9626", "Louise Dean School"),
            ("9806", "Queen Elizabeth High School"),
            ("9813", "Forest Lawn High School"),
            ("9815", "Crescent Heights High School"),
            ("9816", "Western Canada High School"),
            ("9823", "Central Memorial High School"),
            ("9825", "James Fowler High School"),
            ("9826", "Ernest Manning High School"),
            ("9829", "William Aberhart High School"),
            ("9830", "National Sport School"),
            ("9836", "Henry Wise Wood High School"),
            ("9847", "Bowness High School"),
            ("9850", "Lord Beaverbrook High School"),
            ("9856", "Jack James High School"),
            ("9857", "Sir Winston Churchill High School"),
            ("9858", "Dr. E. P. Scarlett High School"),
            ("9860", "John G Diefenbaker High School"),
            ("9865", "Lester B. Pearson High School"),
        ])
    }

    /// Number of schools in the directory
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the directory is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in grid order
    pub fn iter(&self) -> impl Iterator<Item = &SchoolEntry> {
        self.entries.iter()
    }

    /// Resolve a free-text selection as either an exact code or an exact name
    pub fn resolve(&self, selection: &str) -> Result<SchoolRef> {
        let index = self
            .by_code
            .get(selection)
            .or_else(|| self.by_name.get(selection))
            .copied()
            .ok_or(EnrollmentError::InvalidSchool)?;
        let entry = &self.entries[index];
        debug!("Resolved selection {selection:?} to {} ({})", entry.name, entry.code);
        Ok(SchoolRef {
            name: entry.name.clone(),
            code: entry.code.clone(),
            index,
        })
    }
}
