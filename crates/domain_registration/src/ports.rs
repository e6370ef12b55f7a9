//! Registration domain ports
//!
//! The store persists records and answers the per-collection existence
//! checks the code issuer needs. Walk-in and reservation codes live in
//! separate collections and are never checked against each other.

use async_trait::async_trait;

use core_kernel::{DomainPort, IssuedCode, PortError, ReservationId, VisitId};

use crate::code::CodeRegistry;
use crate::reservation::Reservation;
use crate::visit::WalkInVisit;

/// Persistence operations for registration records
///
/// `insert_*` must report a storage-level uniqueness violation on the code
/// column as [`PortError::Conflict`]; the registration service reacts by
/// reissuing, never by surfacing the raw database error.
#[async_trait]
pub trait RegistrationStore: DomainPort {
    /// Returns true if a walk-in record already holds `code`
    async fn visit_code_taken(&self, code: &str) -> Result<bool, PortError>;

    /// Returns true if a reservation already holds `code`
    async fn reservation_code_taken(&self, code: &str) -> Result<bool, PortError>;

    /// Persists a new walk-in record
    async fn insert_visit(&self, visit: &WalkInVisit) -> Result<(), PortError>;

    /// Persists a new reservation
    async fn insert_reservation(&self, reservation: &Reservation) -> Result<(), PortError>;

    /// Loads a walk-in record by id
    async fn get_visit(&self, id: VisitId) -> Result<WalkInVisit, PortError>;

    /// Loads a reservation by id
    async fn get_reservation(&self, id: ReservationId) -> Result<Reservation, PortError>;

    /// Loads a reservation by its public code
    async fn find_reservation_by_code(
        &self,
        code: &IssuedCode,
    ) -> Result<Reservation, PortError>;

    /// Persists updated reservation state (payments, lifecycle)
    async fn update_reservation(&self, reservation: &Reservation) -> Result<(), PortError>;
}

/// Scopes a store's walk-in collection as a [`CodeRegistry`]
pub struct VisitCodes<'a>(pub &'a dyn RegistrationStore);

#[async_trait]
impl CodeRegistry for VisitCodes<'_> {
    async fn is_taken(&self, code: &str) -> Result<bool, PortError> {
        self.0.visit_code_taken(code).await
    }
}

/// Scopes a store's reservation collection as a [`CodeRegistry`]
pub struct ReservationCodes<'a>(pub &'a dyn RegistrationStore);

#[async_trait]
impl CodeRegistry for ReservationCodes<'_> {
    async fn is_taken(&self, code: &str) -> Result<bool, PortError> {
        self.0.reservation_code_taken(code).await
    }
}
