//! Fixed vocabularies accepted by the `fixunit` and `sort` arguments.

use std::fmt;
use std::str::FromStr;

/// Unit used to present sizes when the user pins one with `--fixunit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeUnit {
    B,
    Kb,
    Mb,
    Gb,
    Tb,
    Pb,
}

impl SizeUnit {
    pub const ALL: [SizeUnit; 6] = [
        SizeUnit::B,
        SizeUnit::Kb,
        SizeUnit::Mb,
        SizeUnit::Gb,
        SizeUnit::Tb,
        SizeUnit::Pb,
    ];

    pub fn token(self) -> &'static str {
        match self {
            SizeUnit::B => "b",
            SizeUnit::Kb => "Kb",
            SizeUnit::Mb => "Mb",
            SizeUnit::Gb => "Gb",
            SizeUnit::Tb => "Tb",
            SizeUnit::Pb => "Pb",
        }
    }

    /// Number of bytes in one of this unit (binary multiples)
    pub fn multiplier(self) -> u64 {
        let power = Self::ALL.iter().position(|u| *u == self).unwrap_or(0) as u32;
        1024u64.pow(power)
    }
}

impl fmt::Display for SizeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for SizeUnit {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|u| u.token() == s).ok_or(())
    }
}

/// Order in which results are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortMode {
    #[default]
    SizeDesc,
    NameAsc,
}

impl SortMode {
    pub const ALL: [SortMode; 2] = [SortMode::SizeDesc, SortMode::NameAsc];

    pub fn token(self) -> &'static str {
        match self {
            SortMode::SizeDesc => "size_desc",
            SortMode::NameAsc => "name_asc",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for SortMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|m| m.token() == s).ok_or(())
    }
}

/// Render a vocabulary as `{a, b, c}` for error messages
pub fn allowable_range<T: fmt::Display>(items: &[T]) -> String {
    let joined = items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{}}}", joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_unit_tokens_are_case_sensitive() {
        assert_eq!("Gb".parse::<SizeUnit>(), Ok(SizeUnit::Gb));
        assert_eq!("b".parse::<SizeUnit>(), Ok(SizeUnit::B));
        assert!("gb".parse::<SizeUnit>().is_err());
        assert!("Xb".parse::<SizeUnit>().is_err());
        assert!("".parse::<SizeUnit>().is_err());
    }

    #[test]
    fn test_size_unit_multiplier() {
        assert_eq!(SizeUnit::B.multiplier(), 1);
        assert_eq!(SizeUnit::Kb.multiplier(), 1024);
        assert_eq!(SizeUnit::Gb.multiplier(), 1024 * 1024 * 1024);
        assert_eq!(SizeUnit::Pb.multiplier(), 1u64 << 50);
    }

    #[test]
    fn test_sort_mode_parse() {
        assert_eq!("size_desc".parse::<SortMode>(), Ok(SortMode::SizeDesc));
        assert_eq!("name_asc".parse::<SortMode>(), Ok(SortMode::NameAsc));
        assert!("name_desc".parse::<SortMode>().is_err());
        assert_eq!(SortMode::default(), SortMode::SizeDesc);
    }

    #[test]
    fn test_allowable_range() {
        assert_eq!(allowable_range(&SizeUnit::ALL), "{b, Kb, Mb, Gb, Tb, Pb}");
        assert_eq!(allowable_range(&SortMode::ALL), "{size_desc, name_asc}");
    }
}
