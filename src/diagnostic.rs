//! Non-fatal notices raised while validating arguments.

use std::fmt;
use std::path::PathBuf;

use crate::units::SizeUnit;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warning,
}

/// Something worth telling the operator about an accepted argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Negative limit replaced with the default
    LimitReplaced { given: i64, default: u64 },
    /// Negative depth; the value is kept as given
    DepthNegative { given: i64, default: i64 },
    /// Sizes will be shown in a pinned unit
    FixedUnit(SizeUnit),
    /// A CSV file name was generated
    CsvGenerated(PathBuf),
}

impl Diagnostic {
    pub fn level(&self) -> Level {
        match self {
            Diagnostic::LimitReplaced { .. } | Diagnostic::DepthNegative { .. } => Level::Warning,
            Diagnostic::FixedUnit(_) | Diagnostic::CsvGenerated(_) => Level::Info,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::LimitReplaced { given, default } => write!(
                f,
                "Argument 'limit' is negative ({}) and has been set to default value ({})",
                given, default
            ),
            Diagnostic::DepthNegative { given, default } => write!(
                f,
                "Argument 'depth' is negative ({}), default value is ({})",
                given, default
            ),
            Diagnostic::FixedUnit(unit) => write!(
                f,
                "Results will be represented with fixed units style in '{}'",
                unit
            ),
            Diagnostic::CsvGenerated(path) => {
                write!(f, "Csv file for export to: '{}'", path.display())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels() {
        let limit = Diagnostic::LimitReplaced {
            given: -5,
            default: 10,
        };
        assert_eq!(limit.level(), Level::Warning);
        assert_eq!(Diagnostic::FixedUnit(SizeUnit::Mb).level(), Level::Info);
    }

    #[test]
    fn test_messages() {
        let limit = Diagnostic::LimitReplaced {
            given: -5,
            default: 10,
        };
        assert_eq!(
            limit.to_string(),
            "Argument 'limit' is negative (-5) and has been set to default value (10)"
        );
        assert_eq!(
            Diagnostic::FixedUnit(SizeUnit::Gb).to_string(),
            "Results will be represented with fixed units style in 'Gb'"
        );
        assert_eq!(
            Diagnostic::CsvGenerated(PathBuf::from("out.csv")).to_string(),
            "Csv file for export to: 'out.csv'"
        );
    }
}
