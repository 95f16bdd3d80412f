//! Keyword classifier for reflection text.
//!
//! Maps free text to one of the four categories by evaluating an ordered
//! set of keyword rules; the first matching rule wins. Input that matches
//! no rule falls back to a uniform random category, so callers must treat
//! unmatched input as non-reproducible unless they seed the RNG.

use crate::category::Category;
use rand::Rng;
use rand::seq::SliceRandom;
use regex::Regex;

/// Ordered keyword rules, one per category. Evaluated top to bottom.
const RULES: [(Category, &str); 4] = [
    (Category::Red, r"(?i)\b(past|memory|memories|relationship)\b"),
    (Category::Green, r"(?i)\b(goal|goals|future|plan|plans)\b"),
    (Category::Blue, r"(?i)\b(focus|work|discipline)\b"),
    (Category::Yellow, r"(?i)\b(feel|feeling|emotion|wonder|question)\b"),
];

/// Classifies reflection text into a category.
pub struct Classifier {
    rules: Vec<(Category, Regex)>,
}

impl Classifier {
    /// Builds the classifier, compiling the rule patterns once.
    pub fn new() -> Self {
        let rules = RULES
            .iter()
            .map(|(category, pattern)| {
                // The patterns are fixed literals, so compilation cannot fail.
                let regex = Regex::new(pattern)
                    .unwrap_or_else(|e| panic!("invalid classifier pattern {pattern}: {e}"));
                (*category, regex)
            })
            .collect();
        Self { rules }
    }

    /// Returns the category whose rule matches first, if any.
    pub fn match_rule(&self, text: &str) -> Option<Category> {
        self.rules
            .iter()
            .find(|(_, regex)| regex.is_match(text))
            .map(|(category, _)| *category)
    }

    /// Classifies the text, drawing a uniform random category when no rule
    /// matches.
    pub fn classify<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> Category {
        match self.match_rule(text) {
            Some(category) => category,
            None => {
                let fallback = *Category::ALL
                    .choose(rng)
                    .expect("Category::ALL is non-empty");
                log::debug!("no rule matched; falling back to {fallback}");
                fallback
            }
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}
