//! Registration domain errors

use thiserror::Error;

use core_kernel::PortError;

use crate::code::CodeError;

/// Errors that can occur while creating or updating registration records
#[derive(Debug, Error)]
pub enum RegistrationError {
    /// Code issuance failed (exhaustion or registry failure)
    #[error("code issuance failed: {0}")]
    Code(#[from] CodeError),

    /// Persistence kept rejecting freshly issued codes
    ///
    /// Raised after the bounded number of reissue rounds following
    /// storage-level uniqueness conflicts. Transient; the caller may retry
    /// the whole registration.
    #[error("registration could not be completed after {rounds} issuance rounds")]
    ConflictExhausted { rounds: u32 },

    /// The payment was tendered in a different currency than the price list
    #[error("Currency mismatch: expected {expected}, got {actual}")]
    CurrencyMismatch { expected: String, actual: String },

    /// Invalid record state transition
    #[error("Invalid state transition from {from} to {to}")]
    InvalidStateTransition { from: String, to: String },

    /// A port operation failed
    #[error(transparent)]
    Port(#[from] PortError),
}

impl RegistrationError {
    /// Returns true if retrying the whole operation may succeed
    pub fn is_retriable(&self) -> bool {
        match self {
            RegistrationError::Code(CodeError::Exhausted { .. }) => true,
            RegistrationError::ConflictExhausted { .. } => true,
            RegistrationError::Port(e) => e.is_transient(),
            _ => false,
        }
    }
}
