//! Registration Domain - Record Creation and Code Issuance
//!
//! This crate covers everything that happens when a staff member records a
//! new visit or reservation:
//!
//! - **Code issuance**: every record receives a short, human-readable code
//!   (`prefix + 6` uppercase-alphanumeric characters) generated by a
//!   bounded retry loop against an existence check.
//! - **Records**: walk-in visits and group/custom reservations, with their
//!   computed payment reconciliation attached.
//! - **Orchestration**: the `RegistrationService` loads prices, runs the
//!   pricing engine, issues a code, and persists — retrying issuance if the
//!   storage-level unique constraint catches a race the existence check
//!   missed.

pub mod code;
pub mod visit;
pub mod reservation;
pub mod ports;
pub mod services;
pub mod error;

pub use code::{
    CodeError, CodeIssuer, CodeRegistry, RandomSource, SeededRandom, ThreadRandom,
    DEFAULT_MAX_ATTEMPTS,
};
pub use visit::WalkInVisit;
pub use reservation::{Reservation, ReservationKind, ReservationStatus};
pub use ports::RegistrationStore;
pub use services::{RegistrationService, ReservationRequest, WalkInRequest};
pub use error::RegistrationError;
