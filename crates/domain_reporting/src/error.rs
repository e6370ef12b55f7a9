//! Reporting domain errors

use thiserror::Error;

use core_kernel::PortError;
use domain_registration::CodeError;

/// Errors that can occur while filing or summarising reports
#[derive(Debug, Error)]
pub enum ReportingError {
    /// Code issuance failed (exhaustion or registry failure)
    #[error("code issuance failed: {0}")]
    Code(#[from] CodeError),

    /// Persistence kept rejecting freshly issued codes
    #[error("report could not be filed after {rounds} issuance rounds")]
    ConflictExhausted { rounds: u32 },

    /// A port operation failed
    #[error(transparent)]
    Port(#[from] PortError),
}

impl ReportingError {
    /// Returns true if retrying the whole operation may succeed
    pub fn is_retriable(&self) -> bool {
        match self {
            ReportingError::Code(CodeError::Exhausted { .. }) => true,
            ReportingError::ConflictExhausted { .. } => true,
            ReportingError::Port(e) => e.is_transient(),
            _ => false,
        }
    }
}
