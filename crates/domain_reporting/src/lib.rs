//! Reporting Domain - Weekly Sales Reports
//!
//! Weekly reports are records like any other: staff submit per-category
//! counts for a week, the pricing engine derives revenues, and the report
//! receives its own issued code. On top of the records this crate provides
//! the aggregation used for period summaries: elementwise, order-independent
//! sums of computations across any set of records.

pub mod totals;
pub mod weekly;
pub mod ports;
pub mod services;
pub mod error;

pub use totals::{CategoryTotals, ReportTotals};
pub use weekly::{week_start_of, WeeklyReport};
pub use ports::ReportStore;
pub use services::{ReportingService, WeeklyReportRequest};
pub use error::ReportingError;
