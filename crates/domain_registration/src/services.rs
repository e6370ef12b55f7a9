//! Registration domain services
//!
//! Orchestrates record creation: load the active prices, run the pricing
//! engine, issue a unique code, persist. A storage-level uniqueness
//! conflict (two issuances racing on the same candidate) re-enters code
//! issuance from scratch instead of failing the request.

use chrono::NaiveDate;
use std::sync::Arc;

use core_kernel::Money;
use domain_pricing::{PriceSource, PricingEngine, VisitBreakdown};

use crate::code::CodeIssuer;
use crate::error::RegistrationError;
use crate::ports::{RegistrationStore, ReservationCodes, VisitCodes};
use crate::reservation::{Reservation, ReservationKind};
use crate::visit::WalkInVisit;

/// Issuance rounds allowed when persistence keeps reporting code conflicts
///
/// Each round runs a full bounded issuance; conflicts at this level mean
/// the existence check raced another writer, which is astronomically rare
/// in a 36^6 space.
const CONFLICT_ROUNDS: u32 = 3;

/// Request to record a walk-in visit
#[derive(Debug, Clone)]
pub struct WalkInRequest {
    pub visit_date: NaiveDate,
    pub breakdown: VisitBreakdown,
    pub tendered: Money,
    pub recorded_by: Option<String>,
}

/// Request to create a reservation
#[derive(Debug, Clone)]
pub struct ReservationRequest {
    pub kind: ReservationKind,
    pub group_name: String,
    pub contact_phone: Option<String>,
    pub scheduled_date: NaiveDate,
    pub breakdown: VisitBreakdown,
    pub down_payment: Money,
    pub notes: Option<String>,
}

/// Service for creating and updating registration records
pub struct RegistrationService {
    prices: Arc<dyn PriceSource>,
    store: Arc<dyn RegistrationStore>,
    issuer: CodeIssuer,
}

impl RegistrationService {
    /// Creates a new service over the given ports
    pub fn new(
        prices: Arc<dyn PriceSource>,
        store: Arc<dyn RegistrationStore>,
        issuer: CodeIssuer,
    ) -> Self {
        Self {
            prices,
            store,
            issuer,
        }
    }

    /// Records a walk-in visit
    ///
    /// Loads the active price list, computes the reconciliation, issues a
    /// code unique among walk-in records, and persists.
    ///
    /// # Errors
    ///
    /// Code exhaustion and persistent conflicts surface as retriable
    /// errors; the caller shows "please try again", never a raw failure.
    pub async fn register_walk_in(
        &self,
        request: WalkInRequest,
    ) -> Result<WalkInVisit, RegistrationError> {
        let prices = self.prices.price_list().await?;
        self.check_currency(request.tendered, prices.currency())?;
        let computation = PricingEngine::compute_breakdown(&request.breakdown, &prices);

        let mut rounds = 0;
        loop {
            let code = self.issuer.issue(&VisitCodes(self.store.as_ref())).await?;
            let mut visit = WalkInVisit::new(
                code,
                request.visit_date,
                request.breakdown.clone(),
                computation.clone(),
                request.tendered,
            );
            if let Some(staff) = &request.recorded_by {
                visit = visit.with_recorded_by(staff.clone());
            }

            match self.store.insert_visit(&visit).await {
                Ok(()) => {
                    tracing::info!(
                        code = %visit.code,
                        visitors = visit.computation.total_visitors(),
                        revenue = %visit.computation.total_revenue(),
                        "walk-in visit recorded"
                    );
                    return Ok(visit);
                }
                Err(e) => rounds = self.handle_insert_error(e, rounds, visit.code.as_str())?,
            }
        }
    }

    /// Creates a group or custom reservation
    pub async fn create_reservation(
        &self,
        request: ReservationRequest,
    ) -> Result<Reservation, RegistrationError> {
        let prices = self.prices.price_list().await?;
        self.check_currency(request.down_payment, prices.currency())?;
        let computation = PricingEngine::compute_breakdown(&request.breakdown, &prices);

        let mut rounds = 0;
        loop {
            let code = self
                .issuer
                .issue(&ReservationCodes(self.store.as_ref()))
                .await?;
            let mut reservation = Reservation::new(
                code,
                request.kind,
                request.group_name.clone(),
                request.scheduled_date,
                request.breakdown.clone(),
                computation.clone(),
                request.down_payment,
            );
            if let Some(phone) = &request.contact_phone {
                reservation = reservation.with_contact_phone(phone.clone());
            }
            if let Some(notes) = &request.notes {
                reservation = reservation.with_notes(notes.clone());
            }

            match self.store.insert_reservation(&reservation).await {
                Ok(()) => {
                    tracing::info!(
                        code = %reservation.code,
                        group = %reservation.group_name,
                        "reservation created"
                    );
                    return Ok(reservation);
                }
                Err(e) => {
                    rounds = self.handle_insert_error(e, rounds, reservation.code.as_str())?;
                }
            }
        }
    }

    /// Records an additional down payment on a reservation
    pub async fn record_reservation_payment(
        &self,
        id: core_kernel::ReservationId,
        amount: Money,
    ) -> Result<Reservation, RegistrationError> {
        let mut reservation = self.store.get_reservation(id).await?;
        reservation.record_payment(amount)?;
        self.store.update_reservation(&reservation).await?;
        tracing::info!(
            code = %reservation.code,
            paid = %reservation.down_payment,
            status = ?reservation.settlement.status,
            "reservation payment recorded"
        );
        Ok(reservation)
    }

    /// Confirms a pending reservation
    pub async fn confirm_reservation(
        &self,
        id: core_kernel::ReservationId,
    ) -> Result<Reservation, RegistrationError> {
        let mut reservation = self.store.get_reservation(id).await?;
        reservation.confirm()?;
        self.store.update_reservation(&reservation).await?;
        Ok(reservation)
    }

    /// Cancels a reservation
    pub async fn cancel_reservation(
        &self,
        id: core_kernel::ReservationId,
        reason: &str,
    ) -> Result<Reservation, RegistrationError> {
        let mut reservation = self.store.get_reservation(id).await?;
        reservation.cancel(reason)?;
        self.store.update_reservation(&reservation).await?;
        Ok(reservation)
    }

    fn check_currency(
        &self,
        amount: Money,
        expected: core_kernel::Currency,
    ) -> Result<(), RegistrationError> {
        if amount.currency() != expected {
            return Err(RegistrationError::CurrencyMismatch {
                expected: expected.to_string(),
                actual: amount.currency().to_string(),
            });
        }
        Ok(())
    }

    /// Converts an insert failure into either another issuance round or a
    /// terminal error
    fn handle_insert_error(
        &self,
        error: core_kernel::PortError,
        rounds: u32,
        code: &str,
    ) -> Result<u32, RegistrationError> {
        if error.is_conflict() {
            let next = rounds + 1;
            if next >= CONFLICT_ROUNDS {
                tracing::error!(code, rounds = next, "giving up after repeated code conflicts");
                return Err(RegistrationError::ConflictExhausted { rounds: next });
            }
            tracing::warn!(code, round = next, "code conflicted at persistence, reissuing");
            Ok(next)
        } else {
            Err(error.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use core_kernel::{
        Currency, IssuedCode, PortError, ReservationId, VisitId,
    };
    use domain_pricing::{Category, PriceList};
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Mutex;

    use crate::code::SeededRandom;
    use crate::reservation::ReservationStatus;

    fn idr(amount: i64) -> Money {
        Money::from_minor(amount, Currency::IDR)
    }

    struct FixedPrices;

    #[async_trait]
    impl PriceSource for FixedPrices {
        async fn price_list(&self) -> Result<PriceList, PortError> {
            Ok(PriceList::new(Currency::IDR)
                .with_price(Category::Student, idr(3000))
                .unwrap()
                .with_price(Category::Public, idr(5000))
                .unwrap()
                .with_price(Category::Foreign, idr(25000))
                .unwrap())
        }
    }

    impl core_kernel::DomainPort for FixedPrices {}

    /// In-memory store that rejects the first `conflicts` inserts with a
    /// uniqueness conflict
    #[derive(Default)]
    struct MemoryStore {
        conflicts: AtomicU32,
        visits: Mutex<Vec<WalkInVisit>>,
        reservations: Mutex<Vec<Reservation>>,
    }

    impl MemoryStore {
        fn with_conflicts(conflicts: u32) -> Self {
            Self {
                conflicts: AtomicU32::new(conflicts),
                ..Default::default()
            }
        }

        fn take_conflict(&self) -> bool {
            self.conflicts
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
                .is_ok()
        }
    }

    impl core_kernel::DomainPort for MemoryStore {}

    #[async_trait]
    impl RegistrationStore for MemoryStore {
        async fn visit_code_taken(&self, code: &str) -> Result<bool, PortError> {
            Ok(self
                .visits
                .lock()
                .unwrap()
                .iter()
                .any(|v| v.code.as_str() == code))
        }

        async fn reservation_code_taken(&self, code: &str) -> Result<bool, PortError> {
            Ok(self
                .reservations
                .lock()
                .unwrap()
                .iter()
                .any(|r| r.code.as_str() == code))
        }

        async fn insert_visit(&self, visit: &WalkInVisit) -> Result<(), PortError> {
            if self.take_conflict() {
                return Err(PortError::conflict("duplicate code"));
            }
            self.visits.lock().unwrap().push(visit.clone());
            Ok(())
        }

        async fn insert_reservation(&self, reservation: &Reservation) -> Result<(), PortError> {
            if self.take_conflict() {
                return Err(PortError::conflict("duplicate code"));
            }
            self.reservations.lock().unwrap().push(reservation.clone());
            Ok(())
        }

        async fn get_visit(&self, id: VisitId) -> Result<WalkInVisit, PortError> {
            self.visits
                .lock()
                .unwrap()
                .iter()
                .find(|v| v.id == id)
                .cloned()
                .ok_or_else(|| PortError::not_found("WalkInVisit", id))
        }

        async fn get_reservation(&self, id: ReservationId) -> Result<Reservation, PortError> {
            self.reservations
                .lock()
                .unwrap()
                .iter()
                .find(|r| r.id == id)
                .cloned()
                .ok_or_else(|| PortError::not_found("Reservation", id))
        }

        async fn find_reservation_by_code(
            &self,
            code: &IssuedCode,
        ) -> Result<Reservation, PortError> {
            self.reservations
                .lock()
                .unwrap()
                .iter()
                .find(|r| r.code == *code)
                .cloned()
                .ok_or_else(|| PortError::not_found("Reservation", code))
        }

        async fn update_reservation(&self, reservation: &Reservation) -> Result<(), PortError> {
            let mut reservations = self.reservations.lock().unwrap();
            let slot = reservations
                .iter_mut()
                .find(|r| r.id == reservation.id)
                .ok_or_else(|| PortError::not_found("Reservation", reservation.id))?;
            *slot = reservation.clone();
            Ok(())
        }
    }

    fn service(store: Arc<MemoryStore>) -> RegistrationService {
        RegistrationService::new(
            Arc::new(FixedPrices),
            store,
            CodeIssuer::new("MSM-").with_random_source(SeededRandom::new(11)),
        )
    }

    fn walk_in_request() -> WalkInRequest {
        WalkInRequest {
            visit_date: NaiveDate::from_ymd_opt(2024, 3, 14).unwrap(),
            breakdown: VisitBreakdown::from_counts([
                (Category::Student, 369),
                (Category::Public, 223),
                (Category::Foreign, 19),
                (Category::Custom, 0),
            ])
            .unwrap(),
            tendered: idr(2697000),
            recorded_by: Some("sari".to_string()),
        }
    }

    #[tokio::test]
    async fn test_register_walk_in_computes_and_persists() {
        let store = Arc::new(MemoryStore::default());
        let visit = service(store.clone())
            .register_walk_in(walk_in_request())
            .await
            .unwrap();

        assert!(visit.code.as_str().starts_with("MSM-"));
        assert_eq!(visit.computation.total_visitors(), 611);
        assert_eq!(
            visit.computation.total_revenue(),
            idr(2697000)
        );
        assert!(visit.settlement.is_paid());
        assert!(visit.settlement.change_amount.is_zero());
        assert_eq!(store.visits.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_persistence_conflict_reissues_code() {
        let store = Arc::new(MemoryStore::with_conflicts(1));
        let visit = service(store.clone())
            .register_walk_in(walk_in_request())
            .await
            .unwrap();

        // the conflicting insert was retried with a fresh code
        assert_eq!(store.visits.lock().unwrap().len(), 1);
        assert!(visit.code.as_str().starts_with("MSM-"));
    }

    #[tokio::test]
    async fn test_repeated_conflicts_exhaust_rounds() {
        let store = Arc::new(MemoryStore::with_conflicts(u32::MAX));
        let result = service(store).register_walk_in(walk_in_request()).await;

        match result {
            Err(RegistrationError::ConflictExhausted { rounds }) => assert_eq!(rounds, 3),
            other => panic!("expected ConflictExhausted, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_currency_mismatch_rejected_before_issuance() {
        let store = Arc::new(MemoryStore::default());
        let mut request = walk_in_request();
        request.tendered = Money::from_minor(100, Currency::USD);

        let result = service(store.clone()).register_walk_in(request).await;
        assert!(matches!(
            result,
            Err(RegistrationError::CurrencyMismatch { .. })
        ));
        assert!(store.visits.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_reservation_flow_with_later_payment() {
        let store = Arc::new(MemoryStore::default());
        let svc = service(store.clone());

        let reservation = svc
            .create_reservation(ReservationRequest {
                kind: ReservationKind::Group,
                group_name: "SMA 1 Bogor".to_string(),
                contact_phone: Some("+62-812-0000-1111".to_string()),
                scheduled_date: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
                breakdown: VisitBreakdown::from_counts([(Category::Student, 40)]).unwrap(),
                down_payment: idr(60000),
                notes: None,
            })
            .await
            .unwrap();

        assert_eq!(reservation.status, ReservationStatus::Pending);
        assert!(!reservation.settlement.is_paid());

        let updated = svc
            .record_reservation_payment(reservation.id, idr(60000))
            .await
            .unwrap();
        assert!(updated.settlement.is_paid());

        let confirmed = svc.confirm_reservation(reservation.id).await.unwrap();
        assert_eq!(confirmed.status, ReservationStatus::Confirmed);
    }

    #[tokio::test]
    async fn test_cancel_reservation() {
        let store = Arc::new(MemoryStore::default());
        let svc = service(store);

        let reservation = svc
            .create_reservation(ReservationRequest {
                kind: ReservationKind::Custom,
                group_name: "Research visit".to_string(),
                contact_phone: None,
                scheduled_date: NaiveDate::from_ymd_opt(2024, 7, 9).unwrap(),
                breakdown: VisitBreakdown::empty(),
                down_payment: idr(0),
                notes: Some("herbarium access".to_string()),
            })
            .await
            .unwrap();

        let cancelled = svc
            .cancel_reservation(reservation.id, "requester withdrew")
            .await
            .unwrap();
        assert_eq!(cancelled.status, ReservationStatus::Cancelled);
    }
}
