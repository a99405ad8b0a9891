//! Indentation configuration for generated synopses.

use std::{fmt, str::FromStr};

const SPACES: &str = "                ";

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (at most 16).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 4-space indentation.
    pub const FOUR: Self = Self::Spaces(4);

    /// 2-space indentation.
    pub const TWO: Self = Self::Spaces(2);

    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(n) => &SPACES[..usize::from(*n).min(SPACES.len())],
            Self::Tab => "\t",
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::FOUR
    }
}

impl fmt::Display for Indent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spaces(n) => write!(f, "{n}"),
            Self::Tab => f.write_str("tab"),
        }
    }
}

/// Error returned when an indentation setting cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid indentation '{0}', expected a width between 0 and 16 or 'tab'")]
pub struct ParseIndentError(String);

impl FromStr for Indent {
    type Err = ParseIndentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("tab") {
            return Ok(Self::Tab);
        }
        match s.parse::<u8>() {
            Ok(n) if usize::from(n) <= SPACES.len() => Ok(Self::Spaces(n)),
            _ => Err(ParseIndentError(s.to_string())),
        }
    }
}
