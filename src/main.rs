use std::io::{self, BufRead, Write};

use anyhow::Context;
use log::info;

use enroll_reader::{EnrollmentStatistics, EnrollmentStore, ReportConfig};

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = ReportConfig::default();
    let store = EnrollmentStore::from_embedded(&config)
        .context("failed to load the enrollment dataset")?;

    println!("School Enrollment Statistics");
    print!("{}", EnrollmentStatistics::header(&store));

    print!("Please enter the high school name or school code: ");
    io::stdout().flush()?;
    let mut selection = String::new();
    io::stdin()
        .lock()
        .read_line(&mut selection)
        .context("failed to read selection")?;

    let school = store.resolve_school(selection.trim())?;
    info!("Generating report for {} ({})", school.name, school.code);

    println!("\n***Requested School Statistics***\n");
    print!("{}", EnrollmentStatistics::school_summary(&store, &school, &config)?);

    println!("\n***General Statistics for All Schools***\n");
    print!("{}", EnrollmentStatistics::general_summary(&store, &config)?);

    Ok(())
}
