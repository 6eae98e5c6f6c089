//! du-args: argument validation for a disk usage CLI.
//!
//! Raw arguments go through [`SettingsBuilder`], which normalizes each one
//! into a [`Settings`] record and collects [`Diagnostic`] notices and
//! [`ValidationError`]s along the way.

pub mod cli;
pub mod diagnostic;
pub mod error;
pub mod path;
pub mod report;
pub mod settings;
pub mod units;

pub use diagnostic::{Diagnostic, Level};
pub use error::ValidationError;
pub use settings::{Settings, SettingsBuilder};
pub use units::{SizeUnit, SortMode};

use cli::Args;

/// Run every setter once against the parsed arguments.
///
/// All fields are attempted even when an earlier one fails, so the returned
/// builder holds everything that validated and the errors list the rest.
pub fn apply_args(args: &Args) -> (SettingsBuilder, Vec<ValidationError>) {
    let mut builder = Settings::builder();
    let mut errors = Vec::new();

    errors.extend(builder.set_path(&args.path).err());
    builder.set_limit(args.limit);
    errors.extend(builder.set_fix_unit(&args.fixunit).err());
    builder.set_depth(args.depth);
    errors.extend(builder.set_sort(&args.sort).err());
    builder.set_csv_file_name(&args.csv);

    (builder, errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_apply_defaults() {
        let args = Args::parse_from(["du-args", "/tmp"]);
        let (builder, errors) = apply_args(&args);
        assert!(errors.is_empty());

        let (settings, diagnostics) = builder.build();
        assert_eq!(settings.path, PathBuf::from("/tmp"));
        assert_eq!(settings.limit, 10);
        assert_eq!(settings.depth, 1);
        assert_eq!(settings.fix_unit, None);
        assert_eq!(settings.sort, Some(SortMode::SizeDesc));
        assert!(!settings.exports_csv());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_apply_collects_every_error() {
        let args = Args::parse_from(["du-args", " ", "-u", "Xb", "-s", "bogus", "-n", "4"]);
        let (builder, errors) = apply_args(&args);
        assert_eq!(errors.len(), 3);
        assert_eq!(builder.settings().limit, 4);
        assert_eq!(builder.settings().sort, Some(SortMode::SizeDesc));
    }
}
