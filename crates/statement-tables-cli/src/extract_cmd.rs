use std::path::Path;

use statement_tables::{BatchConfig, FailurePolicy};

use crate::cli::MarkerArgs;
use crate::shared::{extract_options, report_error};

pub fn run(input_dir: &Path, marker: &MarkerArgs, keep_going: bool) -> Result<(), i32> {
    if !input_dir.is_dir() {
        eprintln!("Error: directory not found: {}", input_dir.display());
        return Err(1);
    }

    let policy = if keep_going {
        FailurePolicy::KeepGoing
    } else {
        FailurePolicy::FailFast
    };
    let mut config = BatchConfig::new(input_dir).with_failure_policy(policy);
    config.extract = extract_options(marker);

    let report = statement_tables::run(&config).map_err(|e| report_error(&e))?;

    for path in &report.written {
        println!("{}", path.display());
    }

    if report.is_success() {
        return Ok(());
    }

    for (path, err) in &report.failures {
        eprintln!("Error: {}: {err}", path.display());
    }
    eprintln!(
        "{} of {} documents failed",
        report.failures.len(),
        report.failures.len() + report.written.len()
    );
    Err(1)
}
