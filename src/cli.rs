//! Command-line argument parsing using clap derive macros.
//!
//! Values are taken as raw candidates and validated by
//! [`SettingsBuilder`](crate::settings::SettingsBuilder), so numbers are
//! signed and vocabularies are plain strings here.

use clap::Parser;

/// Validate and normalize the arguments of a disk usage run.
///
/// Every argument is checked, corrected where a default applies, and the
/// resulting settings are printed.
#[derive(Parser, Debug)]
#[command(name = "du-args")]
#[command(version, about, long_about = None, allow_negative_numbers = true)]
pub struct Args {
    /// Directory to analyse
    #[arg(value_name = "PATH", default_value = ".")]
    pub path: String,

    /// Number of rows in the results (negative falls back to 10)
    #[arg(short = 'n', long = "limit", default_value_t = 10)]
    pub limit: i64,

    /// Depth of subfolders in the results (-1 for all, 1 for current only)
    #[arg(short = 'd', long = "depth", default_value_t = 1)]
    pub depth: i64,

    /// Fixed size unit for results: b, Kb, Mb, Gb, Tb or Pb
    #[arg(short = 'u', long = "fixunit", default_value = "")]
    pub fixunit: String,

    /// Sort order: size_desc or name_asc
    #[arg(short = 's', long = "sort", default_value = "size_desc")]
    pub sort: String,

    /// CSV file to export to ("" generates a name, "nocsv" disables export)
    #[arg(short = 'c', long = "csv", default_value = "nocsv")]
    pub csv: String,

    /// Hide informational notices
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
