//! Severity levels.
//!
//! A [`Level`] pairs a display name with an ordinal. Levels compare, hash and
//! test equal by ordinal only, so two levels with the same value are the same
//! severity whatever they are called.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// An ordered severity tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    name: Cow<'static, str>,
    value: i64,
}

impl Level {
    /// Creates a level from a static name, usable in `const` position.
    #[must_use]
    pub const fn new_static(name: &'static str, value: i64) -> Self {
        Self {
            name: Cow::Borrowed(name),
            value,
        }
    }

    /// Creates a level with an arbitrary name.
    ///
    /// Ordinals may be negative; only their order matters.
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>, value: i64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Builds an ordered level set, assigning ordinal `i` to `names[i]`.
    ///
    /// ```
    /// use huelog_core::Level;
    ///
    /// let levels = Level::from_names(["Ok", "Err"]);
    /// assert_eq!(levels[1].name(), "Err");
    /// assert_eq!(levels[1].value(), 1);
    /// ```
    #[must_use]
    pub fn from_names<I, S>(names: I) -> Vec<Level>
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        names
            .into_iter()
            .zip(0..)
            .map(|(name, value)| Level::new(name, value))
            .collect()
    }

    /// The display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The ordinal used for every comparison.
    #[must_use]
    pub fn value(&self) -> i64 {
        self.value
    }

    /// The ordinal as a position into a zero-based table such as a color
    /// list, or `None` for negative ordinals.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        usize::try_from(self.value).ok()
    }

    /// Name of the convenience method bound to this level (lowercased name).
    #[must_use]
    pub fn method_name(&self) -> String {
        self.name.to_lowercase()
    }
}

impl PartialEq for Level {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Level {}

impl PartialOrd for Level {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Level {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl Hash for Level {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad() so width/alignment flags apply to the name
        f.pad(&self.name)
    }
}

pub const DEBUG: Level = Level::new_static("DEBUG", 0);
pub const INFO: Level = Level::new_static("INFO", 1);
pub const WARNING: Level = Level::new_static("WARNING", 2);
pub const ERROR: Level = Level::new_static("ERROR", 3);
pub const CRITICAL: Level = Level::new_static("CRITICAL", 4);

/// The canonical level set, in rank order.
pub const LEVELS: [Level; 5] = [DEBUG, INFO, WARNING, ERROR, CRITICAL];
