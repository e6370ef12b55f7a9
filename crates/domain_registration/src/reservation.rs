//! Group and custom reservations

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{IssuedCode, Money, ReservationId};
use domain_pricing::{PaymentComputation, PricingEngine, Settlement, VisitBreakdown};

use crate::error::RegistrationError;

/// Kind of reservation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReservationKind {
    /// Standard group booking at list prices
    Group,
    /// Special arrangement (research visits, events) priced per agreement
    Custom,
}

/// Reservation lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReservationStatus {
    /// Created, awaiting confirmation
    Pending,
    /// Confirmed by staff
    Confirmed,
    /// Visit took place
    Completed,
    /// Cancelled before the visit
    Cancelled,
}

impl ReservationStatus {
    fn name(&self) -> &'static str {
        match self {
            ReservationStatus::Pending => "Pending",
            ReservationStatus::Confirmed => "Confirmed",
            ReservationStatus::Completed => "Completed",
            ReservationStatus::Cancelled => "Cancelled",
        }
    }
}

/// A group or custom reservation
///
/// `down_payment` accumulates across payments; the settlement is
/// recomputed against the computed total on every payment, so the payment
/// status flips to `Paid` exactly when the cumulative amount covers the
/// total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    /// Unique identifier
    pub id: ReservationId,
    /// Public-facing record code
    pub code: IssuedCode,
    /// Reservation kind
    pub kind: ReservationKind,
    /// Name of the visiting group or organization
    pub group_name: String,
    /// Contact phone number
    pub contact_phone: Option<String>,
    /// Scheduled visit date
    pub scheduled_date: NaiveDate,
    /// Per-category ticket counts
    pub breakdown: VisitBreakdown,
    /// Derived revenues and totals
    pub computation: PaymentComputation,
    /// Cumulative down payment
    pub down_payment: Money,
    /// Change amount and payment status against the computed total
    pub settlement: Settlement,
    /// Lifecycle status
    pub status: ReservationStatus,
    /// Free-form notes
    pub notes: Option<String>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Reservation {
    /// Creates a new pending reservation
    pub fn new(
        code: IssuedCode,
        kind: ReservationKind,
        group_name: impl Into<String>,
        scheduled_date: NaiveDate,
        breakdown: VisitBreakdown,
        computation: PaymentComputation,
        down_payment: Money,
    ) -> Self {
        let settlement =
            PricingEngine::compute_payment_status(computation.total_revenue(), down_payment);
        let now = Utc::now();

        Self {
            id: ReservationId::new_v7(),
            code,
            kind,
            group_name: group_name.into(),
            contact_phone: None,
            scheduled_date,
            breakdown,
            computation,
            down_payment,
            settlement,
            status: ReservationStatus::Pending,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the contact phone
    pub fn with_contact_phone(mut self, phone: impl Into<String>) -> Self {
        self.contact_phone = Some(phone.into());
        self
    }

    /// Sets the notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Records an additional down payment and recomputes the settlement
    ///
    /// # Errors
    ///
    /// Rejected on cancelled reservations.
    pub fn record_payment(&mut self, amount: Money) -> Result<(), RegistrationError> {
        if self.status == ReservationStatus::Cancelled {
            return Err(self.bad_transition("Payment"));
        }
        self.down_payment = self.down_payment.checked_add(&amount).map_err(|_| {
            RegistrationError::CurrencyMismatch {
                expected: self.down_payment.currency().to_string(),
                actual: amount.currency().to_string(),
            }
        })?;
        self.settlement = PricingEngine::compute_payment_status(
            self.computation.total_revenue(),
            self.down_payment,
        );
        self.touch();
        Ok(())
    }

    /// Confirms a pending reservation
    pub fn confirm(&mut self) -> Result<(), RegistrationError> {
        if self.status != ReservationStatus::Pending {
            return Err(self.bad_transition("Confirmed"));
        }
        self.status = ReservationStatus::Confirmed;
        self.touch();
        Ok(())
    }

    /// Marks a confirmed reservation as completed
    pub fn complete(&mut self) -> Result<(), RegistrationError> {
        if self.status != ReservationStatus::Confirmed {
            return Err(self.bad_transition("Completed"));
        }
        self.status = ReservationStatus::Completed;
        self.touch();
        Ok(())
    }

    /// Cancels a reservation that has not yet completed
    pub fn cancel(&mut self, reason: impl Into<String>) -> Result<(), RegistrationError> {
        if matches!(
            self.status,
            ReservationStatus::Completed | ReservationStatus::Cancelled
        ) {
            return Err(self.bad_transition("Cancelled"));
        }
        self.status = ReservationStatus::Cancelled;
        self.notes = Some(format!("Cancelled: {}", reason.into()));
        self.touch();
        Ok(())
    }

    fn bad_transition(&self, to: &str) -> RegistrationError {
        RegistrationError::InvalidStateTransition {
            from: self.status.name().to_string(),
            to: to.to_string(),
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::Currency;
    use domain_pricing::{Category, PaymentStatus, PriceList};

    fn idr(amount: i64) -> Money {
        Money::from_minor(amount, Currency::IDR)
    }

    fn sample_reservation(down_payment: Money) -> Reservation {
        let prices = PriceList::new(Currency::IDR)
            .with_price(Category::Student, idr(3000))
            .unwrap();
        let breakdown = VisitBreakdown::from_counts([(Category::Student, 40)]).unwrap();
        let computation = PricingEngine::compute_breakdown(&breakdown, &prices);

        Reservation::new(
            IssuedCode::from_parts("MSM-", "BBBBBB"),
            ReservationKind::Group,
            "SDN 4 Menteng",
            NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
            breakdown,
            computation,
            down_payment,
        )
    }

    #[test]
    fn test_new_reservation_is_pending() {
        // total 120_000; half paid up front
        let reservation = sample_reservation(idr(60000));
        assert_eq!(reservation.status, ReservationStatus::Pending);
        assert_eq!(reservation.settlement.status, PaymentStatus::Unpaid);
    }

    #[test]
    fn test_payments_accumulate_until_paid() {
        let mut reservation = sample_reservation(idr(60000));

        reservation.record_payment(idr(30000)).unwrap();
        assert_eq!(reservation.settlement.status, PaymentStatus::Unpaid);

        reservation.record_payment(idr(30000)).unwrap();
        assert_eq!(reservation.settlement.status, PaymentStatus::Paid);
        assert!(reservation.settlement.change_amount.is_zero());
    }

    #[test]
    fn test_overpayment_shows_change() {
        let mut reservation = sample_reservation(idr(0));
        reservation.record_payment(idr(150000)).unwrap();

        assert_eq!(reservation.settlement.status, PaymentStatus::Paid);
        assert_eq!(
            reservation.settlement.change_amount,
            idr(30000)
        );
    }

    #[test]
    fn test_zero_total_reservation_starts_paid() {
        let prices = PriceList::new(Currency::IDR);
        let breakdown = VisitBreakdown::empty();
        let computation = PricingEngine::compute_breakdown(&breakdown, &prices);
        let reservation = Reservation::new(
            IssuedCode::from_parts("MSM-", "CCCCCC"),
            ReservationKind::Custom,
            "Draft",
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            breakdown,
            computation,
            idr(0),
        );

        // 0 >= 0: draft records with no visitors count as paid
        assert_eq!(reservation.settlement.status, PaymentStatus::Paid);
    }

    #[test]
    fn test_lifecycle_transitions() {
        let mut reservation = sample_reservation(idr(120000));

        reservation.confirm().unwrap();
        assert_eq!(reservation.status, ReservationStatus::Confirmed);

        reservation.complete().unwrap();
        assert_eq!(reservation.status, ReservationStatus::Completed);

        // completed reservations cannot be cancelled
        assert!(reservation.cancel("too late").is_err());
    }

    #[test]
    fn test_cannot_complete_unconfirmed() {
        let mut reservation = sample_reservation(idr(0));
        assert!(matches!(
            reservation.complete(),
            Err(RegistrationError::InvalidStateTransition { .. })
        ));
    }

    #[test]
    fn test_cancelled_reservation_rejects_payment() {
        let mut reservation = sample_reservation(idr(0));
        reservation.cancel("school closed").unwrap();
        assert!(reservation.record_payment(idr(1000)).is_err());
        assert!(reservation.notes.as_deref().unwrap().contains("school closed"));
    }

    #[test]
    fn test_payment_currency_mismatch_is_rejected() {
        let mut reservation = sample_reservation(idr(0));
        let result = reservation.record_payment(Money::from_minor(100, Currency::USD));
        assert!(matches!(
            result,
            Err(RegistrationError::CurrencyMismatch { .. })
        ));
    }
}
