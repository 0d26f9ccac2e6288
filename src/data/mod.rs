//! Raw dataset model and loading.
//!
//! The fixed external source is a JSON document with ten named year arrays
//! (`year_2013` through `year_2022`). Each array holds exactly 60 entries,
//! one per (school, grade) pair, row-major by school then grade, following
//! the order of the school directory. Entries are non-negative integers, or
//! `null` where an enrollment figure is missing.

use std::path::Path;

use log::info;
use serde::Deserialize;

use crate::error::{EnrollmentError, Result};
use crate::store::{NUM_GRADES, NUM_SCHOOLS, NUM_YEARS};

/// Number of entries in each year array (schools x grades)
pub const ROW_LEN: usize = NUM_SCHOOLS * NUM_GRADES;

/// The enrollment dataset bundled with the crate
const EMBEDDED_DATASET: &str = include_str!("enrollment.json");

/// The ten flat year arrays exactly as the source document provides them
#[derive(Debug, Clone, Deserialize)]
pub struct RawDataset {
    pub year_2013: Vec<Option<u32>>,
    pub year_2014: Vec<Option<u32>>,
    pub year_2015: Vec<Option<u32>>,
    pub year_2016: Vec<Option<u32>>,
    pub year_2017: Vec<Option<u32>>,
    pub year_2018: Vec<Option<u32>>,
    pub year_2019: Vec<Option<u32>>,
    pub year_2020: Vec<Option<u32>>,
    pub year_2021: Vec<Option<u32>>,
    pub year_2022: Vec<Option<u32>>,
}

impl RawDataset {
    /// Load the dataset bundled with the crate
    pub fn embedded() -> Result<Self> {
        let dataset: Self = serde_json::from_str(EMBEDDED_DATASET)?;
        dataset.validate()?;
        info!("Loaded embedded enrollment dataset ({NUM_YEARS} years x {ROW_LEN} entries)");
        Ok(dataset)
    }

    /// Load a dataset from a JSON file on disk
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let dataset: Self = serde_json::from_str(&contents)?;
        dataset.validate()?;
        info!(
            "Loaded enrollment dataset from {} ({NUM_YEARS} years x {ROW_LEN} entries)",
            path.display()
        );
        Ok(dataset)
    }

    /// Build a dataset from ten pre-assembled year arrays, oldest first
    pub fn from_years(years: [Vec<Option<u32>>; NUM_YEARS]) -> Result<Self> {
        let [y13, y14, y15, y16, y17, y18, y19, y20, y21, y22] = years;
        let dataset = Self {
            year_2013: y13,
            year_2014: y14,
            year_2015: y15,
            year_2016: y16,
            year_2017: y17,
            year_2018: y18,
            year_2019: y19,
            year_2020: y20,
            year_2021: y21,
            year_2022: y22,
        };
        dataset.validate()?;
        Ok(dataset)
    }

    /// The year arrays in chronological order
    #[must_use]
    pub fn years(&self) -> [&[Option<u32>]; NUM_YEARS] {
        [
            &self.year_2013,
            &self.year_2014,
            &self.year_2015,
            &self.year_2016,
            &self.year_2017,
            &self.year_2018,
            &self.year_2019,
            &self.year_2020,
            &self.year_2021,
            &self.year_2022,
        ]
    }

    /// Check that every year array has exactly one entry per (school, grade)
    pub fn validate(&self) -> Result<()> {
        for (offset, row) in self.years().iter().enumerate() {
            if row.len() != ROW_LEN {
                return Err(EnrollmentError::Dataset(format!(
                    "year_{} has {} entries, expected {ROW_LEN}",
                    2013 + offset,
                    row.len()
                )));
            }
        }
        Ok(())
    }
}
