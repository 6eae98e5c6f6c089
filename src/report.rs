//! Console output for notices, errors and the settings summary.

use crate::diagnostic::{Diagnostic, Level};
use crate::error::ValidationError;
use crate::settings::Settings;
use owo_colors::OwoColorize;

/// Report configuration
#[derive(Default)]
pub struct Report {
    /// Hide info-level notices
    pub quiet: bool,
}

impl Report {
    /// Create a new Report with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppress informational notices
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Notices that pass the current verbosity
    pub fn visible<'a>(&self, diagnostics: &'a [Diagnostic]) -> Vec<&'a Diagnostic> {
        diagnostics
            .iter()
            .filter(|d| !self.quiet || d.level() == Level::Warning)
            .collect()
    }

    /// Print notices to stdout, one per line
    pub fn print_diagnostics(&self, diagnostics: &[Diagnostic]) {
        for diagnostic in self.visible(diagnostics) {
            match diagnostic.level() {
                Level::Warning => println!("{}", diagnostic.to_string().yellow()),
                Level::Info => println!("{}", diagnostic.to_string().cyan()),
            }
        }
    }

    /// Print a rejected argument
    pub fn print_error(&self, error: &ValidationError) {
        println!("{}", error.to_string().red().bold());
    }

    /// Print every settings field in report order
    pub fn print_arguments(&self, settings: &Settings) {
        println!();
        println!("{}", "Arguments:".bold());
        for (name, value) in settings.summary() {
            println!("   {} {}", format!("{}:", name).dimmed(), value);
        }
    }
}
