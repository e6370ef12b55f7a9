//! Payment reconciliation engine
//!
//! Deterministic, side-effect-free arithmetic over a breakdown and a price
//! list. The engine assumes validated input and never fails: missing prices
//! resolve to zero, and negative counts are unrepresentable.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{Currency, Money};

use crate::breakdown::VisitBreakdown;
use crate::category::Category;
use crate::price_list::PriceList;

/// Revenue for one category of a computed breakdown
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevenueLine {
    pub category: Category,
    pub ticket_count: u32,
    pub revenue: Money,
}

/// Derived amounts for one transaction or reporting period
///
/// Computed fresh on every request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentComputation {
    lines: Vec<RevenueLine>,
    total_visitors: u64,
    total_revenue: Money,
}

impl PaymentComputation {
    /// Revenue lines in breakdown order
    pub fn lines(&self) -> &[RevenueLine] {
        &self.lines
    }

    /// Returns the line for a category, if it was in the breakdown
    pub fn line(&self, category: Category) -> Option<&RevenueLine> {
        self.lines.iter().find(|l| l.category == category)
    }

    /// Total ticket count across all categories
    pub fn total_visitors(&self) -> u64 {
        self.total_visitors
    }

    /// Total revenue across all categories
    pub fn total_revenue(&self) -> Money {
        self.total_revenue
    }

    /// Currency the computation was performed in
    pub fn currency(&self) -> Currency {
        self.total_revenue.currency()
    }
}

/// Whether a payment covered the computed total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Paid,
    Unpaid,
}

impl PaymentStatus {
    pub fn is_paid(&self) -> bool {
        matches!(self, PaymentStatus::Paid)
    }
}

/// Change amount and payment status for a transaction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    pub change_amount: Money,
    pub status: PaymentStatus,
}

impl Settlement {
    pub fn is_paid(&self) -> bool {
        self.status.is_paid()
    }
}

/// Stateless reconciliation functions
///
/// Both operations are pure: no storage access, no clock, no mutation of
/// inputs.
pub struct PricingEngine;

impl PricingEngine {
    /// Computes per-category revenues and totals for a breakdown
    ///
    /// For each entry, in the order given:
    /// `revenue = ticket_count × unit_price(category)`, where categories
    /// absent from the price list price at zero. Totals are the sums over
    /// all entries.
    pub fn compute_breakdown(
        breakdown: &VisitBreakdown,
        prices: &PriceList,
    ) -> PaymentComputation {
        let mut lines = Vec::with_capacity(breakdown.entries().len());
        let mut total_revenue = Money::zero(prices.currency());

        for entry in breakdown.entries() {
            let unit = prices.unit_price(entry.category);
            let revenue = unit.multiply(Decimal::from(entry.ticket_count));
            total_revenue = total_revenue + revenue;
            lines.push(RevenueLine {
                category: entry.category,
                ticket_count: entry.ticket_count,
                revenue,
            });
        }

        PaymentComputation {
            lines,
            total_visitors: breakdown.total_tickets(),
            total_revenue,
        }
    }

    /// Derives the change amount and payment status from a payment
    ///
    /// `change = max(0, down_payment − total_revenue)`, and the status is
    /// `Paid` exactly when `down_payment ≥ total_revenue`. A zero total
    /// against a zero payment is therefore `Paid`; zero-visitor draft
    /// records rely on that.
    pub fn compute_payment_status(total_revenue: Money, down_payment: Money) -> Settlement {
        if down_payment.covers(&total_revenue) {
            Settlement {
                change_amount: down_payment - total_revenue,
                status: PaymentStatus::Paid,
            }
        } else {
            Settlement {
                change_amount: Money::zero(total_revenue.currency()),
                status: PaymentStatus::Unpaid,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn idr(amount: i64) -> Money {
        Money::from_minor(amount, Currency::IDR)
    }

    fn standard_prices() -> PriceList {
        PriceList::new(Currency::IDR)
            .with_price(Category::Student, idr(3000))
            .unwrap()
            .with_price(Category::Public, idr(5000))
            .unwrap()
            .with_price(Category::Foreign, idr(25000))
            .unwrap()
            .with_price(Category::Custom, idr(0))
            .unwrap()
    }

    // Scenario A from the reporting desk: a full day's walk-in counts.
    #[test]
    fn test_full_day_breakdown() {
        let breakdown = VisitBreakdown::from_counts([
            (Category::Student, 369),
            (Category::Public, 223),
            (Category::Foreign, 19),
            (Category::Custom, 0),
        ])
        .unwrap();

        let computation = PricingEngine::compute_breakdown(&breakdown, &standard_prices());

        assert_eq!(
            computation.line(Category::Student).unwrap().revenue.amount(),
            dec!(1107000)
        );
        assert_eq!(
            computation.line(Category::Public).unwrap().revenue.amount(),
            dec!(1115000)
        );
        assert_eq!(
            computation.line(Category::Foreign).unwrap().revenue.amount(),
            dec!(475000)
        );
        assert!(computation.line(Category::Custom).unwrap().revenue.is_zero());
        assert_eq!(computation.total_visitors(), 611);
        assert_eq!(computation.total_revenue().amount(), dec!(2697000));
    }

    #[test]
    fn test_missing_price_defaults_to_zero() {
        let prices = PriceList::new(Currency::IDR)
            .with_price(Category::Student, idr(3000))
            .unwrap();
        let breakdown = VisitBreakdown::from_counts([
            (Category::Student, 10),
            (Category::Foreign, 500),
        ])
        .unwrap();

        let computation = PricingEngine::compute_breakdown(&breakdown, &prices);

        assert!(computation.line(Category::Foreign).unwrap().revenue.is_zero());
        assert_eq!(computation.total_revenue().amount(), dec!(30000));
        // The missing price still counts its visitors
        assert_eq!(computation.total_visitors(), 510);
    }

    #[test]
    fn test_lines_follow_breakdown_order() {
        let breakdown = VisitBreakdown::from_counts([
            (Category::Custom, 1),
            (Category::Student, 2),
        ])
        .unwrap();

        let computation = PricingEngine::compute_breakdown(&breakdown, &standard_prices());
        let order: Vec<Category> = computation.lines().iter().map(|l| l.category).collect();
        assert_eq!(order, vec![Category::Custom, Category::Student]);
    }

    #[test]
    fn test_exact_payment_is_paid_with_zero_change() {
        let settlement =
            PricingEngine::compute_payment_status(idr(2697000), idr(2697000));
        assert_eq!(settlement.status, PaymentStatus::Paid);
        assert!(settlement.change_amount.is_zero());
    }

    #[test]
    fn test_underpayment_is_unpaid_with_change_clamped_to_zero() {
        let settlement =
            PricingEngine::compute_payment_status(idr(2697000), idr(2000000));
        assert_eq!(settlement.status, PaymentStatus::Unpaid);
        assert!(settlement.change_amount.is_zero());
    }

    #[test]
    fn test_overpayment_returns_change() {
        let settlement = PricingEngine::compute_payment_status(idr(13000), idr(20000));
        assert_eq!(settlement.status, PaymentStatus::Paid);
        assert_eq!(settlement.change_amount.amount(), dec!(7000));
    }

    #[test]
    fn test_zero_total_zero_payment_is_paid() {
        let settlement = PricingEngine::compute_payment_status(
            Money::zero(Currency::IDR),
            Money::zero(Currency::IDR),
        );
        assert_eq!(settlement.status, PaymentStatus::Paid);
        assert!(settlement.change_amount.is_zero());
    }

    #[test]
    fn test_payment_status_serializes_as_plain_words() {
        assert_eq!(
            serde_json::to_string(&PaymentStatus::Paid).unwrap(),
            "\"Paid\""
        );
        assert_eq!(
            serde_json::to_string(&PaymentStatus::Unpaid).unwrap(),
            "\"Unpaid\""
        );
    }
}
