//! Visitor categories
//!
//! The museum sells exactly four ticket classes. The set is closed: price
//! lists, breakdowns, and reports all key on these values and nothing else.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PricingError;

/// Visitor category for a ticket
///
/// Staff-facing screens show the Indonesian labels; the API and storage
/// use the English names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    /// School and university students ("Pelajar")
    Student,
    /// General public ("Umum")
    Public,
    /// Foreign visitors ("Asing")
    Foreign,
    /// Special arrangements such as research visits ("Khusus")
    Custom,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 4] = [
        Category::Student,
        Category::Public,
        Category::Foreign,
        Category::Custom,
    ];

    /// Returns the canonical English name
    pub fn name(&self) -> &'static str {
        match self {
            Category::Student => "Student",
            Category::Public => "Public",
            Category::Foreign => "Foreign",
            Category::Custom => "Custom",
        }
    }

    /// Returns the Indonesian desk label
    pub fn local_label(&self) -> &'static str {
        match self {
            Category::Student => "Pelajar",
            Category::Public => "Umum",
            Category::Foreign => "Asing",
            Category::Custom => "Khusus",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Category {
    type Err = PricingError;

    /// Parses either the English name or the Indonesian label,
    /// case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "student" | "pelajar" => Ok(Category::Student),
            "public" | "umum" => Ok(Category::Public),
            "foreign" | "asing" => Ok(Category::Foreign),
            "custom" | "khusus" => Ok(Category::Custom),
            _ => Err(PricingError::UnknownCategory(s.to_string())),
        }
    }
}
