//! Page section theme.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a theme tag cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid theme: {0}")]
pub struct ThemeParseError(pub String);

/// Color theme of a page section.
///
/// Sections are tagged `light` or `dark`; the navigation bar adapts to
/// whichever section currently sits behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Returns `true` for [`Theme::Dark`].
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// The opposite theme.
    #[must_use]
    pub const fn inverted(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(ThemeParseError(s.to_string())),
        }
    }
}
