//! Cross-record revenue aggregation
//!
//! Grand totals for a reporting period are elementwise sums over the
//! payment computations of the records in that period. Addition is
//! commutative and associative, so the result is independent of the order
//! records are folded in — summaries never depend on query ordering.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use core_kernel::{Currency, Money};
use domain_pricing::{Category, PaymentComputation};

/// Accumulated tickets and revenue for one category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotals {
    pub ticket_count: u64,
    pub revenue: Money,
}

/// Elementwise aggregation of payment computations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportTotals {
    currency: Currency,
    per_category: BTreeMap<Category, CategoryTotals>,
    total_visitors: u64,
    total_revenue: Money,
}

impl ReportTotals {
    /// Creates empty totals in the given currency
    pub fn new(currency: Currency) -> Self {
        Self {
            currency,
            per_category: BTreeMap::new(),
            total_visitors: 0,
            total_revenue: Money::zero(currency),
        }
    }

    /// Folds one computation into the totals
    pub fn add(&mut self, computation: &PaymentComputation) {
        for line in computation.lines() {
            let entry = self
                .per_category
                .entry(line.category)
                .or_insert(CategoryTotals {
                    ticket_count: 0,
                    revenue: Money::zero(self.currency),
                });
            entry.ticket_count += u64::from(line.ticket_count);
            entry.revenue = entry.revenue + line.revenue;
        }
        self.total_visitors += computation.total_visitors();
        self.total_revenue = self.total_revenue + computation.total_revenue();
    }

    /// Aggregates a whole set of computations
    pub fn from_computations<'a>(
        currency: Currency,
        computations: impl IntoIterator<Item = &'a PaymentComputation>,
    ) -> Self {
        let mut totals = Self::new(currency);
        for computation in computations {
            totals.add(computation);
        }
        totals
    }

    /// Totals for one category, zero when the category never appeared
    pub fn for_category(&self, category: Category) -> CategoryTotals {
        self.per_category
            .get(&category)
            .copied()
            .unwrap_or(CategoryTotals {
                ticket_count: 0,
                revenue: Money::zero(self.currency),
            })
    }

    /// Grand visitor total
    pub fn total_visitors(&self) -> u64 {
        self.total_visitors
    }

    /// Grand revenue total
    pub fn total_revenue(&self) -> Money {
        self.total_revenue
    }

    /// Aggregation currency
    pub fn currency(&self) -> Currency {
        self.currency
    }
}
