use serde::{Deserialize, Serialize};
use std::fmt;

/// Breast laterality of a series
///
/// Serialized as the DICOM code (`"r"` / `"l"`); anything else reads back
/// as [`Laterality::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Laterality {
    #[serde(rename = "l")]
    Left,
    #[serde(rename = "r")]
    Right,
    #[default]
    #[serde(other)]
    Unknown,
}

impl Laterality {
    /// Returns whether this laterality is unknown
    pub fn is_unknown(&self) -> bool {
        matches!(self, Laterality::Unknown)
    }

    /// Returns the opposite laterality
    pub fn opposite(&self) -> Self {
        match self {
            Laterality::Left => Laterality::Right,
            Laterality::Right => Laterality::Left,
            Laterality::Unknown => Laterality::Unknown,
        }
    }

    /// Returns short string representation
    pub fn short_str(&self) -> &'static str {
        match self {
            Laterality::Left => "l",
            Laterality::Right => "r",
            Laterality::Unknown => "",
        }
    }

    /// Returns simple name for display
    pub fn simple_name(&self) -> &'static str {
        match self {
            Laterality::Left => "left",
            Laterality::Right => "right",
            Laterality::Unknown => "unknown",
        }
    }

    /// Parses an explicit DICOM laterality code
    ///
    /// Only `R` and `L` (any case, surrounding whitespace ignored) are
    /// recognised; every other value is unknown.
    pub fn from_code(s: &str) -> Self {
        let s_lower = s.trim().to_lowercase();
        if s_lower == "r" {
            Laterality::Right
        } else if s_lower == "l" {
            Laterality::Left
        } else {
            Laterality::Unknown
        }
    }
}

impl fmt::Display for Laterality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_name())
    }
}

/// Mammographic view position of a series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewPosition {
    Cc,  // Cranio-caudal
    Mlo, // Medio-lateral oblique
    #[default]
    #[serde(other)]
    Unknown,
}

impl ViewPosition {
    /// Returns whether this view position is unknown
    pub fn is_unknown(&self) -> bool {
        matches!(self, ViewPosition::Unknown)
    }

    /// Returns short string representation
    pub fn short_str(&self) -> &'static str {
        match self {
            ViewPosition::Unknown => "",
            ViewPosition::Cc => "cc",
            ViewPosition::Mlo => "mlo",
        }
    }

    /// Returns simple name for display
    pub fn simple_name(&self) -> &'static str {
        match self {
            ViewPosition::Unknown => "unknown",
            other => other.short_str(),
        }
    }

    /// Parses an explicit ViewPosition code (`CC` / `MLO`, any case)
    pub fn from_code(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "cc" => ViewPosition::Cc,
            "mlo" => ViewPosition::Mlo,
            _ => ViewPosition::Unknown,
        }
    }

    /// Parses a coded view meaning such as `cranio-caudal`
    pub fn from_code_meaning(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "cranio-caudal" => ViewPosition::Cc,
            "medio-lateral oblique" => ViewPosition::Mlo,
            _ => ViewPosition::Unknown,
        }
    }
}

impl fmt::Display for ViewPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_name())
    }
}
