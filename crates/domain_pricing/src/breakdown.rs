//! Visit breakdown
//!
//! Per-category ticket counts for one transaction or reporting period.

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::error::PricingError;

/// One line of a breakdown: a category and its ticket count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownEntry {
    pub category: Category,
    pub ticket_count: u32,
}

impl BreakdownEntry {
    pub fn new(category: Category, ticket_count: u32) -> Self {
        Self {
            category,
            ticket_count,
        }
    }
}

/// Ordered per-category ticket counts for one transaction
///
/// Categories are unique within a breakdown; the constructor rejects
/// duplicates. Counts are non-negative by construction. Iteration preserves
/// the order the entries were given in, which is also the order revenue
/// lines are reported in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitBreakdown {
    entries: Vec<BreakdownEntry>,
}

impl VisitBreakdown {
    /// Creates a breakdown from entries
    ///
    /// # Errors
    ///
    /// Returns an error if a category appears more than once.
    pub fn new(entries: Vec<BreakdownEntry>) -> Result<Self, PricingError> {
        for (i, entry) in entries.iter().enumerate() {
            if entries[..i].iter().any(|e| e.category == entry.category) {
                return Err(PricingError::DuplicateCategory(entry.category.to_string()));
            }
        }
        Ok(Self { entries })
    }

    /// Creates a breakdown from (category, count) pairs
    pub fn from_counts(
        counts: impl IntoIterator<Item = (Category, u32)>,
    ) -> Result<Self, PricingError> {
        Self::new(
            counts
                .into_iter()
                .map(|(category, ticket_count)| BreakdownEntry {
                    category,
                    ticket_count,
                })
                .collect(),
        )
    }

    /// Creates an empty breakdown
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns the entries in insertion order
    pub fn entries(&self) -> &[BreakdownEntry] {
        &self.entries
    }

    /// Returns the ticket count for a category, zero when absent
    pub fn count_for(&self, category: Category) -> u32 {
        self.entries
            .iter()
            .find(|e| e.category == category)
            .map(|e| e.ticket_count)
            .unwrap_or(0)
    }

    /// Sum of all ticket counts
    pub fn total_tickets(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.ticket_count)).sum()
    }

    /// Returns true if the breakdown has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_counts_preserves_order() {
        let breakdown = VisitBreakdown::from_counts([
            (Category::Foreign, 19),
            (Category::Student, 369),
        ])
        .unwrap();

        let categories: Vec<Category> =
            breakdown.entries().iter().map(|e| e.category).collect();
        assert_eq!(categories, vec![Category::Foreign, Category::Student]);
    }

    #[test]
    fn test_rejects_duplicate_category() {
        let result = VisitBreakdown::from_counts([
            (Category::Student, 10),
            (Category::Public, 5),
            (Category::Student, 3),
        ]);
        assert!(matches!(result, Err(PricingError::DuplicateCategory(_))));
    }

    #[test]
    fn test_count_for_missing_category_is_zero() {
        let breakdown = VisitBreakdown::from_counts([(Category::Public, 223)]).unwrap();
        assert_eq!(breakdown.count_for(Category::Public), 223);
        assert_eq!(breakdown.count_for(Category::Foreign), 0);
    }

    #[test]
    fn test_total_tickets() {
        let breakdown = VisitBreakdown::from_counts([
            (Category::Student, 369),
            (Category::Public, 223),
            (Category::Foreign, 19),
            (Category::Custom, 0),
        ])
        .unwrap();
        assert_eq!(breakdown.total_tickets(), 611);
    }

    #[test]
    fn test_empty_breakdown() {
        let breakdown = VisitBreakdown::empty();
        assert!(breakdown.is_empty());
        assert_eq!(breakdown.total_tickets(), 0);
    }

    #[test]
    fn test_zero_count_entries_are_kept() {
        let breakdown = VisitBreakdown::from_counts([(Category::Custom, 0)]).unwrap();
        assert!(!breakdown.is_empty());
        assert_eq!(breakdown.entries().len(), 1);
    }
}
