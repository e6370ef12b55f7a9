//! Request/Response data transfer objects

pub mod prices;
pub mod visits;
pub mod reservations;
pub mod reports;

use serde::{Deserialize, Serialize};
use validator::Validate;

/// One per-category count line in a creation request
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct CountEntry {
    /// Category name ("Student", "Public", "Foreign", "Custom" or the
    /// Indonesian desk labels)
    #[validate(length(min = 1, max = 32))]
    pub category: String,
    /// Ticket count; negative values are rejected at deserialization
    pub ticket_count: u32,
}
