//! Pricing domain ports
//!
//! The engine itself is pure; this port is how orchestrating services load
//! the currently active prices from storage.

use async_trait::async_trait;

use core_kernel::{DomainPort, PortError};

use crate::price_list::PriceList;

/// Source of the currently active price list
///
/// Implementations return the configured unit price per category, omitting
/// categories with no configured price — the engine treats omission as a
/// zero price. Reads are uncached; a fresh list per request avoids
/// stale-price bugs, and price writes are rare.
#[async_trait]
pub trait PriceSource: DomainPort {
    /// Loads the active price list
    async fn price_list(&self) -> Result<PriceList, PortError>;
}
