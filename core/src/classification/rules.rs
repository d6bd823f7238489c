use crate::types::{Laterality, ViewPosition};

/// One way a lowercased description can match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    Contains(&'static str),
    StartsWith(&'static str),
    EndsWith(&'static str),
}

impl Pattern {
    /// Tests the pattern against already-lowercased text
    pub fn matches(&self, text: &str) -> bool {
        match self {
            Pattern::Contains(p) => text.contains(p),
            Pattern::StartsWith(p) => text.starts_with(p),
            Pattern::EndsWith(p) => text.ends_with(p),
        }
    }
}

/// Label assigned when any of its patterns match
#[derive(Debug, Clone, Copy)]
pub struct PatternRule<T> {
    pub label: T,
    pub patterns: &'static [Pattern],
}

impl<T> PatternRule<T> {
    pub fn matches(&self, text: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(text))
    }
}

/// Returns the label of the first rule that matches `text`
///
/// Matching is case-insensitive; rules are tried in slice order.
pub fn match_rules<T: Copy>(text: &str, rules: &[PatternRule<T>]) -> Option<T> {
    let text = text.to_lowercase();
    rules
        .iter()
        .find(|rule| rule.matches(&text))
        .map(|rule| rule.label)
}

// Right is tried before left, so a description matching both sides reads as right
pub const LATERALITY_RULES: &[PatternRule<Laterality>] = &[
    PatternRule {
        label: Laterality::Right,
        patterns: &[
            Pattern::Contains(" r "),
            Pattern::Contains("right"),
            Pattern::Contains("_r"),
            Pattern::Contains("-r"),
            Pattern::Contains("r_"),
            Pattern::Contains("r-"),
            Pattern::Contains("r."),
            Pattern::Contains(".r"),
            Pattern::StartsWith("r "),
            Pattern::EndsWith(" r"),
        ],
    },
    PatternRule {
        label: Laterality::Left,
        patterns: &[
            Pattern::Contains(" l "),
            Pattern::Contains("left"),
            Pattern::Contains("_l"),
            Pattern::Contains("-l"),
            Pattern::Contains("l_"),
            Pattern::Contains("l-"),
            Pattern::Contains("l."),
            Pattern::Contains(".l"),
            Pattern::StartsWith("l "),
            Pattern::EndsWith(" l"),
        ],
    },
];

pub const VIEW_RULES: &[PatternRule<ViewPosition>] = &[
    PatternRule {
        label: ViewPosition::Cc,
        patterns: &[Pattern::Contains("cc")],
    },
    PatternRule {
        label: ViewPosition::Mlo,
        patterns: &[Pattern::Contains("mlo")],
    },
];
