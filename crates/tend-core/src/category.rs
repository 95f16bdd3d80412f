//! Category domain model.
//!
//! The four fixed reflection paths a completed reflection is filed under.
//! Each category carries static display metadata (path name, glyph, and a
//! one-sentence description) defined at compile time.

use crate::error::TendError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum_macros::EnumIter;

/// One of the four fixed classification paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Rooted in the past: memory, story, and connection.
    Red,
    /// Part of a larger game: goals and an evolving future.
    Green,
    /// Mastery of the present: duty, focus, and clarity.
    Blue,
    /// Driven by emotion: inner questions and transcendence.
    Yellow,
}

/// Static display metadata for a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryProfile {
    /// Display name of the path (e.g., "Universe")
    pub path: &'static str,
    /// Glyph shown next to the path in the UI
    pub glyph: &'static str,
    /// One-sentence description of what the path means
    pub description: &'static str,
}

impl Category {
    /// All categories in declaration order.
    pub const ALL: [Category; 4] = [
        Category::Red,
        Category::Green,
        Category::Blue,
        Category::Yellow,
    ];

    /// Returns the static display metadata for this category.
    pub fn profile(&self) -> &'static CategoryProfile {
        match self {
            Category::Red => &CategoryProfile {
                path: "Universe",
                glyph: "🔴",
                description: "Your actions are deeply rooted in your past, shaping your personal story and connections.",
            },
            Category::Green => &CategoryProfile {
                path: "Game",
                glyph: "🟢",
                description: "Your choices are part of a larger game, influencing the future and evolving your character.",
            },
            Category::Blue => &CategoryProfile {
                path: "Race",
                glyph: "🔵",
                description: "You seek to master your reality, embracing duties and finding clarity in the silence of your purpose.",
            },
            Category::Yellow => &CategoryProfile {
                path: "Step",
                glyph: "🟡",
                description: "Your experience is driven by emotion, listening to your inner questions to transcend limitations.",
            },
        }
    }

    /// Returns the color name of this category ("Red", "Green", ...).
    pub fn name(&self) -> &'static str {
        match self {
            Category::Red => "Red",
            Category::Green => "Green",
            Category::Blue => "Blue",
            Category::Yellow => "Yellow",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Category {
    type Err = TendError;

    /// Parses user input into a category.
    ///
    /// Accepts the color name ("red"), the path name ("universe"), the
    /// glyph, or a 1-based menu index ("1".."4"). Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        for (index, category) in Category::ALL.iter().enumerate() {
            let profile = category.profile();
            if normalized == category.name().to_lowercase()
                || normalized == profile.path.to_lowercase()
                || normalized == profile.glyph
                || normalized == (index + 1).to_string()
            {
                return Ok(*category);
            }
        }
        Err(TendError::UnknownCategory(s.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_all_matches_iter() {
        let from_iter: Vec<Category> = Category::iter().collect();
        assert_eq!(from_iter, Category::ALL.to_vec());
    }

    #[test]
    fn test_profile_metadata() {
        assert_eq!(Category::Red.profile().path, "Universe");
        assert_eq!(Category::Green.profile().path, "Game");
        assert_eq!(Category::Blue.profile().path, "Race");
        assert_eq!(Category::Yellow.profile().path, "Step");
    }

    #[test]
    fn test_from_str_color_name() {
        assert_eq!("green".parse::<Category>().unwrap(), Category::Green);
        assert_eq!("RED".parse::<Category>().unwrap(), Category::Red);
    }

    #[test]
    fn test_from_str_path_name_and_index() {
        assert_eq!("universe".parse::<Category>().unwrap(), Category::Red);
        assert_eq!("3".parse::<Category>().unwrap(), Category::Blue);
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "purple".parse::<Category>().unwrap_err();
        assert!(matches!(err, TendError::UnknownCategory(_)));
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&Category::Yellow).unwrap();
        assert_eq!(json, "\"yellow\"");
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Category::Yellow);
    }
}
