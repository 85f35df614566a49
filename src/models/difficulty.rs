use std::str::FromStr;

use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn hint_count(self) -> u8 {
        match self {
            Difficulty::Easy => 5,
            Difficulty::Medium => 3,
            Difficulty::Hard => 1,
        }
    }

    /// Unrecognized input falls back to the default difficulty.
    pub fn parse_or_default(s: &str) -> Self {
        Difficulty::from_str(s.trim()).unwrap_or_default()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_hint_count() {
        assert_eq!(Difficulty::Easy.hint_count(), 5);
        assert_eq!(Difficulty::Medium.hint_count(), 3);
        assert_eq!(Difficulty::Hard.hint_count(), 1);
        assert_eq!(Difficulty::default().hint_count(), 3);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Difficulty::parse_or_default("easy"), Difficulty::Easy);
        assert_eq!(Difficulty::parse_or_default(" HARD "), Difficulty::Hard);
        assert_eq!(Difficulty::parse_or_default("nightmare"), Difficulty::Medium);
        assert_eq!(Difficulty::Hard.to_string(), "hard");
    }
}
