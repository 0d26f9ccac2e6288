//! Report assembly.
//!
//! This module turns store slices and reductions into the fixed blocks of
//! formatted lines the terminal report prints. Every figure passes through
//! [`truncate`](crate::stats::truncate); the truncation (not rounding) of
//! means and medians is part of the report contract.

use crate::config::ReportConfig;
use crate::directory::SchoolRef;
use crate::error::{EnrollmentError, Result};
use crate::stats;
use crate::store::{EnrollmentStore, GRADES, YEARS};

/// Functions assembling the report blocks
pub struct EnrollmentStatistics;

impl EnrollmentStatistics {
    /// The array shape/dimension header printed before the prompt
    #[must_use]
    pub fn header(store: &EnrollmentStore) -> String {
        let mut header = String::new();
        header.push_str(&format!("Shape of full data array: {:?}\n", store.shape()));
        header.push_str(&format!("Dimensions of full data array: {}\n", store.ndim()));
        header
    }

    /// The per-school statistics block for a resolved school
    pub fn school_summary(
        store: &EnrollmentStore,
        school: &SchoolRef,
        config: &ReportConfig,
    ) -> Result<String> {
        let policy = config.missing_values;
        let mut summary = String::new();
        summary.push_str(&format!(
            "School Name: {}, School Code: {}\n",
            school.name, school.code
        ));

        for grade in GRADES {
            let slice = store.enrollments_by_grade(school.index, grade)?;
            let mean = stats::mean(&slice, policy)
                .ok_or(EnrollmentError::EmptyReduction("per-grade mean"))?;
            summary.push_str(&format!(
                "Mean enrollment for grade {grade}: {}\n",
                stats::truncate(mean)
            ));
        }

        let cells = store.school_cells(school.index);
        let highest = stats::max(&cells, policy)
            .ok_or(EnrollmentError::EmptyReduction("school max"))?;
        let lowest = stats::min(&cells, policy)
            .ok_or(EnrollmentError::EmptyReduction("school min"))?;
        summary.push_str(&format!(
            "Highest enrollment for a single grade: {highest}\n"
        ));
        summary.push_str(&format!("Lowest enrollment for a single grade: {lowest}\n"));

        let mut yearly_totals = Vec::with_capacity(YEARS.len());
        for year in YEARS {
            let year_slice = store.enrollments_by_year(school.index, year)?;
            let total = stats::sum(&year_slice, policy);
            summary.push_str(&format!("Total enrollment for {year}: {total}\n"));
            yearly_totals.push(total);
        }

        let ten_year_total = stats::sum(&cells, policy);
        summary.push_str(&format!("Total ten year enrollment: {ten_year_total}\n"));

        let mean_total =
            yearly_totals.iter().sum::<u64>() as f64 / yearly_totals.len() as f64;
        summary.push_str(&format!(
            "Mean total enrollment over {} years: {}\n",
            yearly_totals.len(),
            stats::truncate(mean_total)
        ));

        match stats::median_over(&cells, config.cohort_threshold, policy) {
            Some(median) => summary.push_str(&format!(
                "For all enrollments over {}, the median value was: {}\n",
                config.cohort_threshold,
                stats::truncate(median)
            )),
            None => summary.push_str(&format!(
                "No enrollments over {}.\n",
                config.cohort_threshold
            )),
        }

        Ok(summary)
    }

    /// The all-schools statistics block
    pub fn general_summary(store: &EnrollmentStore, config: &ReportConfig) -> Result<String> {
        let policy = config.missing_values;
        let mut summary = String::new();

        for year in [2013, 2022] {
            let year_slice = store.year_across_schools(year)?;
            let mean = stats::mean(&year_slice, policy)
                .ok_or(EnrollmentError::EmptyReduction("yearly mean"))?;
            summary.push_str(&format!(
                "Mean enrollment in {year}: {}\n",
                stats::truncate(mean)
            ));
        }

        let graduating = store.graduating_class(2022)?;
        summary.push_str(&format!(
            "Total graduating class of 2022: {}\n",
            stats::sum(&graduating, policy)
        ));

        // Highest/lowest single-grade figure over the whole grid, taken per
        // grade slice the way the per-school block does.
        let mut highest: Option<u32> = None;
        let mut lowest: Option<u32> = None;
        for grade in GRADES {
            let slice = store.grade_across_schools(grade)?;
            highest = highest.max(stats::max(&slice, policy));
            lowest = match (lowest, stats::min(&slice, policy)) {
                (Some(a), Some(b)) => Some(a.min(b)),
                (a, b) => a.or(b),
            };
        }
        let highest = highest.ok_or(EnrollmentError::EmptyReduction("grid max"))?;
        let lowest = lowest.ok_or(EnrollmentError::EmptyReduction("grid min"))?;
        summary.push_str(&format!(
            "Highest enrollment for a single grade: {highest}\n"
        ));
        summary.push_str(&format!("Lowest enrollment for a single grade: {lowest}\n"));

        Ok(summary)
    }
}
