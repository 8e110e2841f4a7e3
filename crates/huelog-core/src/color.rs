//! ANSI display colors.
//!
//! The palette is fixed at eight names. Codes follow `ESC[<30+i>m` for the
//! foreground and `ESC[<40+i>m` for the background, with one shared reset.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Palette names, in code order.
pub const NAMES: [&str; 8] = [
    "black", "red", "green", "yellow", "blue", "magenta", "cyan", "white",
];

/// Resets all display attributes.
pub const ANSI_RESET: &str = "\x1b[0m";

const FOREGROUND: [&str; 8] = [
    "\x1b[30m", "\x1b[31m", "\x1b[32m", "\x1b[33m", "\x1b[34m", "\x1b[35m", "\x1b[36m", "\x1b[37m",
];

const BACKGROUND: [&str; 8] = [
    "\x1b[40m", "\x1b[41m", "\x1b[42m", "\x1b[43m", "\x1b[44m", "\x1b[45m", "\x1b[46m", "\x1b[47m",
];

/// A palette entry with its foreground and background escape codes.
///
/// Serialized as its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    name: &'static str,
    foreground: &'static str,
    background: &'static str,
}

impl Color {
    const fn at(index: usize) -> Self {
        Self {
            name: NAMES[index],
            foreground: FOREGROUND[index],
            background: BACKGROUND[index],
        }
    }

    /// Looks up a palette color by name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownColorName`] for names outside the palette.
    pub fn from_name(name: &str) -> Result<Self> {
        NAMES
            .iter()
            .position(|candidate| *candidate == name)
            .map(Self::at)
            .ok_or_else(|| Error::UnknownColorName {
                name: name.to_string(),
            })
    }

    /// Looks up several colors, keeping order and duplicates.
    ///
    /// ```
    /// use huelog_core::Color;
    ///
    /// let colors = Color::from_names(["blue", "green", "blue"]).unwrap();
    /// assert_eq!(colors[1].foreground(), "\x1b[32m");
    /// assert_eq!(colors[0], colors[2]);
    /// ```
    pub fn from_names<I, S>(names: I) -> Result<Vec<Self>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| Self::from_name(name.as_ref()))
            .collect()
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn foreground(&self) -> &'static str {
        self.foreground
    }

    #[must_use]
    pub fn background(&self) -> &'static str {
        self.background
    }

    /// The shared reset code.
    #[must_use]
    pub fn reset(&self) -> &'static str {
        ANSI_RESET
    }

    /// Wraps `text` in this color's foreground code and the reset code.
    #[must_use]
    pub fn paint(&self, text: impl fmt::Display) -> String {
        format!("{}{}{}", self.foreground, text, ANSI_RESET)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::from_name(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.name.to_string()
    }
}

pub const BLACK: Color = Color::at(0);
pub const RED: Color = Color::at(1);
pub const GREEN: Color = Color::at(2);
pub const YELLOW: Color = Color::at(3);
pub const BLUE: Color = Color::at(4);
pub const MAGENTA: Color = Color::at(5);
pub const CYAN: Color = Color::at(6);
pub const WHITE: Color = Color::at(7);

/// The whole palette, in code order.
pub const COLORS: [Color; 8] = [BLACK, RED, GREEN, YELLOW, BLUE, MAGENTA, CYAN, WHITE];

/// Colors paired with the canonical levels (DEBUG through CRITICAL).
pub const LEVEL_COLORS: [Color; 5] = [BLUE, GREEN, YELLOW, RED, MAGENTA];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_matches_codes() {
        for (i, color) in COLORS.iter().enumerate() {
            assert_eq!(color.name(), NAMES[i]);
            assert_eq!(color.foreground(), format!("\x1b[{}m", 30 + i));
            assert_eq!(color.background(), format!("\x1b[{}m", 40 + i));
            assert_eq!(color.reset(), "\x1b[0m");
        }
    }

    #[test]
    fn from_name_is_idempotent() {
        for name in NAMES {
            let first = Color::from_name(name).unwrap();
            let second = Color::from_name(name).unwrap();
            assert_eq!(first, second);
            assert_eq!(first.name(), name);
        }
    }

    #[test]
    fn unknown_name_fails() {
        for name in ["purple", "", "Red", "bright_red"] {
            let err = Color::from_name(name).unwrap_err();
            assert!(
                matches!(&err, Error::UnknownColorName { name: n } if n == name),
                "unexpected error for {name:?}: {err}"
            );
        }
    }

    #[test]
    fn from_names_keeps_order_and_duplicates() {
        let names = ["cyan", "red", "cyan", "white", "black"];
        let colors = Color::from_names(names).unwrap();
        assert_eq!(colors.len(), names.len());
        for (name, color) in names.iter().zip(&colors) {
            assert_eq!(color.name(), *name);
            assert_eq!(*color, Color::from_name(name).unwrap());
        }
    }

    #[test]
    fn from_names_fails_on_first_unknown() {
        let err = Color::from_names(["red", "mauve", "green"]).unwrap_err();
        assert!(matches!(err, Error::UnknownColorName { name } if name == "mauve"));
    }

    #[test]
    fn paint_wraps_text() {
        assert_eq!(GREEN.paint("ok"), "\x1b[32mok\x1b[0m");
    }

    #[test]
    fn parses_and_serializes_by_name() {
        let color: Color = "yellow".parse().unwrap();
        assert_eq!(color, YELLOW);
        assert_eq!(serde_json::to_string(&color).unwrap(), r#""yellow""#);
        let back: Color = serde_json::from_str(r#""magenta""#).unwrap();
        assert_eq!(back, MAGENTA);
        assert!(serde_json::from_str::<Color>(r#""teal""#).is_err());
    }
}
