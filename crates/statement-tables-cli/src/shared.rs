use statement_tables::{ExtractOptions, StatementError};

use crate::cli::MarkerArgs;

/// Build extraction options from the marker flags.
pub fn extract_options(args: &MarkerArgs) -> ExtractOptions {
    ExtractOptions {
        marker: args.marker.clone(),
        case_sensitive: args.case_sensitive,
    }
}

/// Print an error to stderr and map it to exit code 1.
pub fn report_error(err: &StatementError) -> i32 {
    eprintln!("Error: {err}");
    1
}
