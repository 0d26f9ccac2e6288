//! Tests for report block assembly

use enroll_reader::stats::MissingValuePolicy;
use enroll_reader::{
    EnrollmentStatistics, EnrollmentStore, NUM_GRADES, NUM_SCHOOLS, NUM_YEARS, RawDataset,
    ReportConfig, SchoolDirectory,
};

fn embedded_store() -> EnrollmentStore {
    EnrollmentStore::from_embedded(&ReportConfig::default()).unwrap()
}

fn uniform_store(value: u32, config: &ReportConfig) -> EnrollmentStore {
    let years: [Vec<Option<u32>>; NUM_YEARS] =
        std::array::from_fn(|_| vec![Some(value); NUM_SCHOOLS * NUM_GRADES]);
    let raw = RawDataset::from_years(years).unwrap();
    EnrollmentStore::from_raw(&raw, SchoolDirectory::calgary_high_schools().unwrap(), config)
        .unwrap()
}

#[test]
fn test_header_lines() {
    let store = embedded_store();
    let header = EnrollmentStatistics::header(&store);
    assert_eq!(
        header,
        "Shape of full data array: (10, 20, 3)\nDimensions of full data array: 3\n"
    );
}

#[test]
fn test_code_and_name_selections_report_identically() {
    let store = embedded_store();
    let config = ReportConfig::default();
    let by_code = store.resolve_school("1224").unwrap();
    let by_name = store.resolve_school("Centennial High School").unwrap();
    assert_eq!(by_code, by_name);
    assert_eq!(
        EnrollmentStatistics::school_summary(&store, &by_code, &config).unwrap(),
        EnrollmentStatistics::school_summary(&store, &by_name, &config).unwrap()
    );
}

#[test]
fn test_school_summary_fixed_line_sequence() {
    let config = ReportConfig::default();
    let store = uniform_store(200, &config);
    let school = store.resolve_school("9626").unwrap();
    let summary = EnrollmentStatistics::school_summary(&store, &school, &config).unwrap();
    let lines: Vec<&str> = summary.lines().collect();

    assert_eq!(lines[0], "School Name: Louise Dean School, School Code: 9626");
    assert_eq!(lines[1], "Mean enrollment for grade 10: 200");
    assert_eq!(lines[2], "Mean enrollment for grade 11: 200");
    assert_eq!(lines[3], "Mean enrollment for grade 12: 200");
    assert_eq!(lines[4], "Highest enrollment for a single grade: 200");
    assert_eq!(lines[5], "Lowest enrollment for a single grade: 200");
    assert_eq!(lines[6], "Total enrollment for 2013: 600");
    assert_eq!(lines[15], "Total enrollment for 2022: 600");
    assert_eq!(lines[16], "Total ten year enrollment: 6000");
    assert_eq!(lines[17], "Mean total enrollment over 10 years: 600");
    assert_eq!(lines[18], "No enrollments over 500.");
    assert_eq!(lines.len(), 19);
}

#[test]
fn test_no_enrollments_over_500_sentinel() {
    // Every cell at or below the threshold must produce the sentinel line,
    // never a median figure.
    let config = ReportConfig::default();
    let store = uniform_store(500, &config);
    let school = store.resolve_school("1224").unwrap();
    let summary = EnrollmentStatistics::school_summary(&store, &school, &config).unwrap();
    assert!(summary.contains("No enrollments over 500.\n"));
    assert!(!summary.contains("the median value was"));
}

#[test]
fn test_over_500_median_line() {
    let config = ReportConfig::default();
    let store = uniform_store(650, &config);
    let school = store.resolve_school("9816").unwrap();
    let summary = EnrollmentStatistics::school_summary(&store, &school, &config).unwrap();
    assert!(summary.contains("For all enrollments over 500, the median value was: 650\n"));
}

#[test]
fn test_missing_value_policies_diverge() {
    // One missing grade-10 cell for the first school: ignoring it keeps the
    // mean at 100, zero-filling drags it down to 90.
    let mut years: [Vec<Option<u32>>; NUM_YEARS] =
        std::array::from_fn(|_| vec![Some(100); NUM_SCHOOLS * NUM_GRADES]);
    years[0][0] = None;
    let raw = RawDataset::from_years(years).unwrap();

    let ignore_config = ReportConfig::default();
    let zero_config = ReportConfig {
        missing_values: MissingValuePolicy::TreatAsZero,
        ..ReportConfig::default()
    };

    let ignore_store = EnrollmentStore::from_raw(
        &raw,
        SchoolDirectory::calgary_high_schools().unwrap(),
        &ignore_config,
    )
    .unwrap();
    let zero_store = EnrollmentStore::from_raw(
        &raw,
        SchoolDirectory::calgary_high_schools().unwrap(),
        &zero_config,
    )
    .unwrap();

    let school = ignore_store.resolve_school("1224").unwrap();
    let ignore_summary =
        EnrollmentStatistics::school_summary(&ignore_store, &school, &ignore_config).unwrap();
    let zero_summary =
        EnrollmentStatistics::school_summary(&zero_store, &school, &zero_config).unwrap();

    assert!(ignore_summary.contains("Mean enrollment for grade 10: 100\n"));
    assert!(zero_summary.contains("Mean enrollment for grade 10: 90\n"));
}

#[test]
fn test_general_summary_lines() {
    let config = ReportConfig::default();
    let store = uniform_store(300, &config);
    let summary = EnrollmentStatistics::general_summary(&store, &config).unwrap();
    let lines: Vec<&str> = summary.lines().collect();

    assert_eq!(lines[0], "Mean enrollment in 2013: 300");
    assert_eq!(lines[1], "Mean enrollment in 2022: 300");
    assert_eq!(
        lines[2],
        format!("Total graduating class of 2022: {}", 300 * NUM_SCHOOLS)
    );
    assert_eq!(lines[3], "Highest enrollment for a single grade: 300");
    assert_eq!(lines[4], "Lowest enrollment for a single grade: 300");
    assert_eq!(lines.len(), 5);
}

#[test]
fn test_embedded_general_summary_is_consistent() {
    let config = ReportConfig::default();
    let store = embedded_store();
    let summary = EnrollmentStatistics::general_summary(&store, &config).unwrap();
    assert_eq!(summary.lines().count(), 5);
    for prefix in [
        "Mean enrollment in 2013: ",
        "Mean enrollment in 2022: ",
        "Total graduating class of 2022: ",
        "Highest enrollment for a single grade: ",
        "Lowest enrollment for a single grade: ",
    ] {
        assert!(summary.contains(prefix), "missing line: {prefix}");
    }
}
