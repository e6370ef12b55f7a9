//! Pre-built Test Fixtures
//!
//! Ready-to-use test data for common entities across the ticketing system.
//! Designed to be consistent and predictable for unit tests; the standard
//! price list matches the museum's long-standing desk prices.

use chrono::NaiveDate;
use once_cell::sync::Lazy;

use core_kernel::{Currency, IssuedCode, Money};
use domain_pricing::{Category, PaymentComputation, PriceList, PricingEngine, VisitBreakdown};

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Creates an IDR amount
    pub fn idr(amount: i64) -> Money {
        Money::from_minor(amount, Currency::IDR)
    }

    /// Creates a zero rupiah amount
    pub fn idr_zero() -> Money {
        Money::zero(Currency::IDR)
    }

    /// The full-day revenue total used across reconciliation tests
    pub fn full_day_total() -> Money {
        Self::idr(2_697_000)
    }

    /// A USD amount for currency mismatch tests
    pub fn usd_100() -> Money {
        Money::from_minor(10000, Currency::USD)
    }
}

/// The standard desk price list: Student 3 000, Public 5 000,
/// Foreign 25 000, Custom 0
pub static STANDARD_PRICES: Lazy<PriceList> = Lazy::new(|| {
    PriceList::new(Currency::IDR)
        .with_price(Category::Student, MoneyFixtures::idr(3000))
        .expect("valid fixture price")
        .with_price(Category::Public, MoneyFixtures::idr(5000))
        .expect("valid fixture price")
        .with_price(Category::Foreign, MoneyFixtures::idr(25000))
        .expect("valid fixture price")
        .with_price(Category::Custom, MoneyFixtures::idr(0))
        .expect("valid fixture price")
});

/// Fixture for price list test data
pub struct PriceFixtures;

impl PriceFixtures {
    /// Returns the standard desk price list
    pub fn standard() -> PriceList {
        STANDARD_PRICES.clone()
    }

    /// A price list missing the Foreign category
    pub fn without_foreign() -> PriceList {
        let mut prices = Self::standard();
        prices.remove_price(Category::Foreign);
        prices
    }
}

/// Fixture for breakdown test data
pub struct BreakdownFixtures;

impl BreakdownFixtures {
    /// The canonical full-day counts: 369 students, 223 public,
    /// 19 foreign, 0 custom
    pub fn full_day() -> VisitBreakdown {
        VisitBreakdown::from_counts([
            (Category::Student, 369),
            (Category::Public, 223),
            (Category::Foreign, 19),
            (Category::Custom, 0),
        ])
        .expect("valid fixture breakdown")
    }

    /// A small school group
    pub fn school_group() -> VisitBreakdown {
        VisitBreakdown::from_counts([(Category::Student, 40)]).expect("valid fixture breakdown")
    }

    /// Computes the full-day reconciliation against the standard prices
    pub fn full_day_computation() -> PaymentComputation {
        PricingEngine::compute_breakdown(&Self::full_day(), &PriceFixtures::standard())
    }
}

/// Fixture for code test data
pub struct CodeFixtures;

impl CodeFixtures {
    /// The organization prefix used in tests
    pub const PREFIX: &'static str = "MSM-";

    /// A well-formed issued code
    pub fn code(suffix: &str) -> IssuedCode {
        IssuedCode::from_parts(Self::PREFIX, suffix)
    }
}

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// A Thursday mid-March used as the canonical visit date
    pub fn visit_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 14).expect("valid fixture date")
    }

    /// Monday of the week containing [`Self::visit_date`]
    pub fn week_start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 11).expect("valid fixture date")
    }

    /// A reservation date in May
    pub fn scheduled_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 2).expect("valid fixture date")
    }
}
