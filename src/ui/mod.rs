//! User interface module - report printing and formatting.
//!
//! - `formatter` - Pure formatting functions
//! - This module - Writes formatted output to the terminal

use crate::cli::BranchReport;
use crate::config::{OutputConfig, OutputFormat};
use crate::error::{DistGitError, Result};

pub mod formatter;

pub use formatter::{format_error, format_report, format_reports, render_toml};

/// Enable or disable colored output on both stdout and stderr.
pub fn apply_color(output: &OutputConfig) {
    console::set_colors_enabled(output.color);
    console::set_colors_enabled_stderr(output.color);
}

/// Print reports in the configured format.
pub fn display_reports(reports: &[BranchReport], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => println!("{}", format_reports(reports)),
        OutputFormat::Toml => print!("{}", render_toml(reports)?),
    }
    Ok(())
}

/// Print an error with its notification header to stderr.
pub fn display_error(err: &DistGitError) {
    eprintln!("{}", format_error(err));
}
