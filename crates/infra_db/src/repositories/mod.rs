//! Repository implementations
//!
//! Repositories own the SQL and the row mapping. Domain records are stored
//! as JSONB documents beside denormalised columns (code, dates, totals)
//! used for lookups and reporting queries.

pub mod prices;
pub mod registrations;
pub mod reports;

pub use prices::{PriceRepository, PriceRow};
pub use registrations::RegistrationRepository;
pub use reports::ReportRepository;
