//! Walk-in visit records

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{IssuedCode, Money, VisitId};
use domain_pricing::{PaymentComputation, PricingEngine, Settlement, VisitBreakdown};

/// A walk-in visit recorded at the ticket desk
///
/// The settlement here is the cash reconciliation for the desk: the change
/// amount is what the cashier hands back when the tendered cash exceeds the
/// computed total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalkInVisit {
    /// Unique identifier
    pub id: VisitId,
    /// Public-facing record code printed on the receipt
    pub code: IssuedCode,
    /// Date of the visit
    pub visit_date: NaiveDate,
    /// Per-category ticket counts
    pub breakdown: VisitBreakdown,
    /// Derived revenues and totals
    pub computation: PaymentComputation,
    /// Cash tendered at the desk
    pub tendered: Money,
    /// Change amount and payment status
    pub settlement: Settlement,
    /// Staff member who recorded the visit
    pub recorded_by: Option<String>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl WalkInVisit {
    /// Creates a new walk-in record, deriving the settlement from the
    /// computation and the tendered amount
    pub fn new(
        code: IssuedCode,
        visit_date: NaiveDate,
        breakdown: VisitBreakdown,
        computation: PaymentComputation,
        tendered: Money,
    ) -> Self {
        let settlement =
            PricingEngine::compute_payment_status(computation.total_revenue(), tendered);

        Self {
            id: VisitId::new_v7(),
            code,
            visit_date,
            breakdown,
            computation,
            tendered,
            settlement,
            recorded_by: None,
            created_at: Utc::now(),
        }
    }

    /// Sets the recording staff member
    pub fn with_recorded_by(mut self, staff: impl Into<String>) -> Self {
        self.recorded_by = Some(staff.into());
        self
    }
}
