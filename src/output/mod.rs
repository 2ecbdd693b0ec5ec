//! Report model and output formatters

pub mod formatter;
pub mod report;

pub use formatter::{format_failure, save_report_to_file, suggest_filename, OutputFormatter, ReportGenerator};
pub use report::{ReportMetadata, VerificationReport};
