//! Core Kernel - Foundational types and utilities for the ticketing system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money types with precise decimal arithmetic
//! - Strongly-typed identifiers and the public record code
//! - Port abstractions shared by all domains

pub mod money;
pub mod identifiers;
pub mod error;
pub mod ports;

pub use money::{Money, Currency, MoneyError};
pub use identifiers::{
    VisitId, ReservationId, ReportId, PriceId, StaffId,
    IssuedCode, CODE_ALPHABET, CODE_SUFFIX_LEN,
};
pub use error::CoreError;
pub use ports::{
    PortError, DomainPort,
    HealthCheckable, HealthCheckResult, AdapterHealth,
};
