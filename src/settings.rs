//! Validated run settings and the builder that populates them.
//!
//! Each setter takes a raw candidate, normalizes it, and stores the result.
//! Setters never print: notices are collected as [`Diagnostic`]s and
//! rejected candidates come back as [`ValidationError`]s, leaving the
//! caller to decide what to show and whether to carry on.

use std::path::PathBuf;

use chrono::{Local, NaiveDateTime};

use crate::diagnostic::Diagnostic;
use crate::error::ValidationError;
use crate::path::clean_path;
use crate::units::{SizeUnit, SortMode, allowable_range};

/// Default row cap when the given limit is negative
pub const LIMIT_DEFAULT: u64 = 10;
/// Default depth (current level only)
pub const DEPTH_DEFAULT: i64 = 1;
/// Default sort mode
pub const SORT_DEFAULT: SortMode = SortMode::SizeDesc;
/// CSV file name meaning "do not export"
pub const CSV_DISABLED: &str = "nocsv";
/// Directory generated CSV file names point into
pub const CSV_RESULTS_DIR: &str = "./results";
/// Timestamp embedded in generated CSV file names
pub const CSV_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// The validated run options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Cleaned path to analyse
    pub path: PathBuf,
    /// Maximum number of rows in the results
    pub limit: u64,
    /// -1 for unlimited, 1 for the current level only, N for N levels
    pub depth: i64,
    /// Pinned presentation unit; `None` lets sizes pick their own unit
    pub fix_unit: Option<SizeUnit>,
    /// `None` when the sort argument was given empty
    pub sort: Option<SortMode>,
    /// Where to export CSV results, or [`CSV_DISABLED`]
    pub csv_file_name: PathBuf,
}

impl Settings {
    pub fn builder() -> SettingsBuilder {
        SettingsBuilder::default()
    }

    /// Whether results should be written to a CSV file
    pub fn exports_csv(&self) -> bool {
        !self.csv_file_name.as_os_str().is_empty()
            && self.csv_file_name.as_os_str() != CSV_DISABLED
    }

    /// The sort mode to apply, falling back to the default when unspecified
    pub fn effective_sort(&self) -> SortMode {
        self.sort.unwrap_or(SORT_DEFAULT)
    }

    /// Depth limit for traversal; `None` means unlimited
    pub fn max_depth(&self) -> Option<usize> {
        usize::try_from(self.depth).ok()
    }

    /// Field names and rendered values, in report order
    pub fn summary(&self) -> [(&'static str, String); 6] {
        [
            ("path", self.path.display().to_string()),
            ("limit", self.limit.to_string()),
            (
                "fixunit",
                self.fix_unit.map(|u| u.to_string()).unwrap_or_default(),
            ),
            ("depth", self.depth.to_string()),
            ("sort", self.sort.map(|s| s.to_string()).unwrap_or_default()),
            ("csv", self.csv_file_name.display().to_string()),
        ]
    }
}

/// Accumulates settings one field at a time.
///
/// Setters may be called in any order and any number of times; the last
/// call for a field wins. A failed setter leaves the other fields alone.
#[derive(Debug, Default)]
pub struct SettingsBuilder {
    settings: Settings,
    diagnostics: Vec<Diagnostic>,
}

impl SettingsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clean and store the path. Fails if nothing is left after cleaning.
    pub fn set_path(&mut self, candidate: &str) -> Result<(), ValidationError> {
        let path = clean_path(candidate, true);
        if path.as_os_str().is_empty() {
            return Err(ValidationError::new(
                "Argument 'path' could not be an empty string",
            ));
        }
        self.settings.path = path;
        Ok(())
    }

    /// Store the limit, substituting the default for negative values.
    /// Returns the limit actually stored.
    pub fn set_limit(&mut self, candidate: i64) -> u64 {
        let limit = match u64::try_from(candidate) {
            Ok(limit) => limit,
            Err(_) => {
                self.diagnostics.push(Diagnostic::LimitReplaced {
                    given: candidate,
                    default: LIMIT_DEFAULT,
                });
                LIMIT_DEFAULT
            }
        };
        self.settings.limit = limit;
        limit
    }

    /// Store the depth as given. Negative values only raise a warning.
    pub fn set_depth(&mut self, candidate: i64) {
        if candidate < 0 {
            self.diagnostics.push(Diagnostic::DepthNegative {
                given: candidate,
                default: DEPTH_DEFAULT,
            });
        }
        self.settings.depth = candidate;
    }

    /// Store the fixed unit. Empty means no fixed unit.
    pub fn set_fix_unit(&mut self, candidate: &str) -> Result<(), ValidationError> {
        if candidate.is_empty() {
            self.settings.fix_unit = None;
            return Ok(());
        }
        let unit = candidate.parse::<SizeUnit>().map_err(|_| {
            ValidationError::new(format!(
                "Argument 'fixunit' is not in allowable range {}",
                allowable_range(&SizeUnit::ALL)
            ))
        })?;
        self.diagnostics.push(Diagnostic::FixedUnit(unit));
        self.settings.fix_unit = Some(unit);
        Ok(())
    }

    /// Store the sort mode. An unknown mode is replaced by the default
    /// and still reported as an error. Empty is stored as unspecified.
    pub fn set_sort(&mut self, candidate: &str) -> Result<(), ValidationError> {
        if candidate.is_empty() {
            self.settings.sort = None;
            return Ok(());
        }
        match candidate.parse::<SortMode>() {
            Ok(mode) => {
                self.settings.sort = Some(mode);
                Ok(())
            }
            Err(()) => {
                self.settings.sort = Some(SORT_DEFAULT);
                Err(ValidationError::new(format!(
                    "Argument 'sort' is not in allowable range {} and replaced to :{}",
                    allowable_range(&SortMode::ALL),
                    SORT_DEFAULT
                )))
            }
        }
    }

    /// Store the CSV file name, generating one from the clock when empty.
    pub fn set_csv_file_name(&mut self, candidate: &str) {
        self.set_csv_file_name_at(candidate, Local::now().naive_local());
    }

    /// Like [`set_csv_file_name`](Self::set_csv_file_name) with an explicit time.
    pub fn set_csv_file_name_at(&mut self, candidate: &str, now: NaiveDateTime) {
        if candidate.is_empty() {
            let generated = default_csv_file_name(now);
            self.diagnostics
                .push(Diagnostic::CsvGenerated(generated.clone()));
            self.settings.csv_file_name = generated;
        } else {
            self.settings.csv_file_name = PathBuf::from(candidate);
        }
    }

    /// Settings as populated so far
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Notices raised so far, in call order
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Finish building, handing back the settings and collected notices
    pub fn build(self) -> (Settings, Vec<Diagnostic>) {
        (self.settings, self.diagnostics)
    }
}

fn default_csv_file_name(now: NaiveDateTime) -> PathBuf {
    PathBuf::from(format!(
        "{}/result_{}.csv",
        CSV_RESULTS_DIR,
        now.format(CSV_TIMESTAMP_FORMAT)
    ))
}
