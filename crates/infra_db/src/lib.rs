//! Infrastructure Database Layer
//!
//! This crate provides the PostgreSQL persistence for the ticketing system
//! using SQLx.
//!
//! # Architecture
//!
//! The crate follows the repository pattern: repositories own the SQL and
//! row mapping, and the adapters in [`adapters`] implement the domain port
//! traits on top of them, translating [`DatabaseError`] into `PortError`.
//!
//! Each record table carries a `UNIQUE` constraint on its public code
//! column. That constraint is the authoritative backstop for code
//! collisions; the issuer's existence check merely catches most of them
//! early. A violation maps to `DatabaseError::DuplicateEntry` and surfaces
//! to the domain as a conflict, which re-enters code issuance.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{DatabaseConfig, create_pool, adapters::PgTicketingAdapter};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/ticketing")).await?;
//! let adapter = PgTicketingAdapter::new(pool);
//! ```

pub mod pool;
pub mod error;
pub mod repositories;
pub mod adapters;

pub use pool::{create_pool, create_pool_from_url, DatabaseConfig, DatabasePool};
pub use error::DatabaseError;
pub use adapters::PgTicketingAdapter;
