//! The enrollment store: an immutable (year, school, grade) grid with the
//! slicing operations the report is built from.
//!
//! The grid is stored flat in row-major (year, school, grade) order. Years
//! and grades are addressed by their real-world values (2013..=2022 and
//! 10/11/12); out-of-range values are rejected rather than clamped.

use log::info;
use smallvec::SmallVec;

use crate::config::ReportConfig;
use crate::data::RawDataset;
use crate::directory::{SchoolDirectory, SchoolRef};
use crate::error::{EnrollmentError, Result};
use crate::stats::MissingValuePolicy;

/// Years covered by the grid, oldest first
pub const YEARS: [u32; 10] = [2013, 2014, 2015, 2016, 2017, 2018, 2019, 2020, 2021, 2022];

/// Grades covered by the grid
pub const GRADES: [u32; 3] = [10, 11, 12];

/// Extent of the year axis
pub const NUM_YEARS: usize = YEARS.len();

/// Extent of the school axis
pub const NUM_SCHOOLS: usize = 20;

/// Extent of the grade axis
pub const NUM_GRADES: usize = GRADES.len();

/// Map a grade to its position along the grade axis
pub fn grade_to_index(grade: u32) -> Result<usize> {
    GRADES
        .iter()
        .position(|&g| g == grade)
        .ok_or(EnrollmentError::InvalidGrade(grade))
}

/// Map a year to its position along the year axis
pub fn year_to_index(year: u32) -> Result<usize> {
    YEARS
        .iter()
        .position(|&y| y == year)
        .ok_or(EnrollmentError::InvalidYear(year))
}

/// Immutable enrollment grid plus its school directory
#[derive(Debug, Clone)]
pub struct EnrollmentStore {
    grid: Vec<Option<u32>>,
    directory: SchoolDirectory,
}

impl EnrollmentStore {
    /// Build a store from a raw dataset and a matching directory
    ///
    /// When the configured missing-value policy zero-fills, the fill happens
    /// here as a one-time cleaning pass; the grid is immutable afterwards.
    pub fn from_raw(
        raw: &RawDataset,
        directory: SchoolDirectory,
        config: &ReportConfig,
    ) -> Result<Self> {
        if directory.len() != NUM_SCHOOLS {
            return Err(EnrollmentError::Dataset(format!(
                "directory has {} schools, expected {NUM_SCHOOLS}",
                directory.len()
            )));
        }
        raw.validate()?;

        let mut grid = Vec::with_capacity(NUM_YEARS * NUM_SCHOOLS * NUM_GRADES);
        for row in raw.years() {
            grid.extend_from_slice(row);
        }
        if config.missing_values != MissingValuePolicy::IgnoreMissing {
            let filled = grid.iter().filter(|cell| cell.is_none()).count();
            for cell in &mut grid {
                if cell.is_none() {
                    *cell = Some(0);
                }
            }
            if filled > 0 {
                info!("Zero-filled {filled} missing enrollment cells at load");
            }
        }
        Ok(Self { grid, directory })
    }

    /// Build a store from the dataset bundled with the crate
    pub fn from_embedded(config: &ReportConfig) -> Result<Self> {
        let raw = RawDataset::embedded()?;
        Self::from_raw(&raw, SchoolDirectory::calgary_high_schools()?, config)
    }

    /// Grid extents as (years, schools, grades)
    #[must_use]
    pub fn shape(&self) -> (usize, usize, usize) {
        (NUM_YEARS, NUM_SCHOOLS, NUM_GRADES)
    }

    /// Number of grid axes
    #[must_use]
    pub fn ndim(&self) -> usize {
        3
    }

    /// The school directory backing this store
    #[must_use]
    pub fn directory(&self) -> &SchoolDirectory {
        &self.directory
    }

    /// Resolve a free-text selection against the directory
    pub fn resolve_school(&self, selection: &str) -> Result<SchoolRef> {
        self.directory.resolve(selection)
    }

    fn cell(&self, year_idx: usize, school_idx: usize, grade_idx: usize) -> Option<u32> {
        self.grid[year_idx * NUM_SCHOOLS * NUM_GRADES + school_idx * NUM_GRADES + grade_idx]
    }

    /// The 10x3 slice for one school, indexed [year][grade]
    ///
    /// The index always comes from directory resolution, so it is in range by
    /// construction.
    #[must_use]
    pub fn enrollments_for_school(
        &self,
        school_idx: usize,
    ) -> [[Option<u32>; NUM_GRADES]; NUM_YEARS] {
        let mut slice = [[None; NUM_GRADES]; NUM_YEARS];
        for (year_idx, row) in slice.iter_mut().enumerate() {
            for (grade_idx, cell) in row.iter_mut().enumerate() {
                *cell = self.cell(year_idx, school_idx, grade_idx);
            }
        }
        slice
    }

    /// One school's full slice flattened to 30 cells, year-major
    #[must_use]
    pub fn school_cells(&self, school_idx: usize) -> Vec<Option<u32>> {
        self.enrollments_for_school(school_idx)
            .iter()
            .flatten()
            .copied()
            .collect()
    }

    /// One value per year for a given school and grade
    pub fn enrollments_by_grade(
        &self,
        school_idx: usize,
        grade: u32,
    ) -> Result<[Option<u32>; NUM_YEARS]> {
        let grade_idx = grade_to_index(grade)?;
        let mut values = [None; NUM_YEARS];
        for (year_idx, value) in values.iter_mut().enumerate() {
            *value = self.cell(year_idx, school_idx, grade_idx);
        }
        Ok(values)
    }

    /// One value per grade for a given school and year
    pub fn enrollments_by_year(
        &self,
        school_idx: usize,
        year: u32,
    ) -> Result<SmallVec<[Option<u32>; NUM_GRADES]>> {
        let year_idx = year_to_index(year)?;
        Ok((0..NUM_GRADES)
            .map(|grade_idx| self.cell(year_idx, school_idx, grade_idx))
            .collect())
    }

    /// Every cell for one grade across all schools and years
    pub fn grade_across_schools(&self, grade: u32) -> Result<Vec<Option<u32>>> {
        let grade_idx = grade_to_index(grade)?;
        let mut values = Vec::with_capacity(NUM_YEARS * NUM_SCHOOLS);
        for year_idx in 0..NUM_YEARS {
            for school_idx in 0..NUM_SCHOOLS {
                values.push(self.cell(year_idx, school_idx, grade_idx));
            }
        }
        Ok(values)
    }

    /// Every cell for one year across all schools and grades
    pub fn year_across_schools(&self, year: u32) -> Result<Vec<Option<u32>>> {
        let year_idx = year_to_index(year)?;
        let start = year_idx * NUM_SCHOOLS * NUM_GRADES;
        Ok(self.grid[start..start + NUM_SCHOOLS * NUM_GRADES].to_vec())
    }

    /// Grade-12 cells across all schools for one year
    pub fn graduating_class(&self, year: u32) -> Result<Vec<Option<u32>>> {
        let year_idx = year_to_index(year)?;
        let grade_idx = grade_to_index(12)?;
        Ok((0..NUM_SCHOOLS)
            .map(|school_idx| self.cell(year_idx, school_idx, grade_idx))
            .collect())
    }

    /// The full grid, row-major (year, school, grade)
    #[must_use]
    pub fn all_cells(&self) -> &[Option<u32>] {
        &self.grid
    }
}
