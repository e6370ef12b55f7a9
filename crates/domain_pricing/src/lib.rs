//! Pricing Domain - Payment Reconciliation
//!
//! This crate implements the payment reconciliation core of the ticketing
//! system: converting per-category visitor counts and a price list into
//! per-category revenues, aggregate totals, a change amount, and a payment
//! status.
//!
//! # Design
//!
//! The engine is deterministic and side-effect-free. For well-typed input
//! it never fails:
//!
//! - categories absent from the price list price at zero rather than
//!   erroring (degrade-gracefully policy)
//! - negative counts are unrepresentable (`u32`)
//! - malformed client input is rejected at the API validation boundary
//!   before it reaches this crate
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_pricing::{Category, PriceList, PricingEngine, VisitBreakdown};
//!
//! let prices = PriceList::new(Currency::IDR)
//!     .with_price(Category::Student, Money::new(dec!(3000), Currency::IDR))?;
//! let breakdown = VisitBreakdown::from_counts([(Category::Student, 369)])?;
//!
//! let computation = PricingEngine::compute_breakdown(&breakdown, &prices);
//! let settlement = PricingEngine::compute_payment_status(
//!     computation.total_revenue(),
//!     tendered,
//! );
//! ```

pub mod category;
pub mod price_list;
pub mod breakdown;
pub mod engine;
pub mod ports;
pub mod error;

pub use category::Category;
pub use price_list::PriceList;
pub use breakdown::{BreakdownEntry, VisitBreakdown};
pub use engine::{PaymentComputation, PaymentStatus, PricingEngine, RevenueLine, Settlement};
pub use ports::PriceSource;
pub use error::PricingError;
