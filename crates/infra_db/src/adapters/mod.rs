//! Port adapters
//!
//! Internal (database) implementations of the domain port traits, built on
//! the repositories.

pub mod ticketing;

pub use ticketing::PgTicketingAdapter;
