//! Test Data Builders
//!
//! Builder patterns for constructing request data with sensible defaults.
//! Tests specify only the relevant fields; names and phone numbers come
//! from `fake` so fixtures don't all look alike.

use chrono::NaiveDate;
use fake::faker::company::en::CompanyName;
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;

use core_kernel::Money;
use domain_pricing::VisitBreakdown;
use domain_registration::{ReservationKind, ReservationRequest, WalkInRequest};

use crate::fixtures::{BreakdownFixtures, MoneyFixtures, TemporalFixtures};

/// Builder for walk-in registration requests
pub struct WalkInRequestBuilder {
    visit_date: NaiveDate,
    breakdown: VisitBreakdown,
    tendered: Money,
    recorded_by: Option<String>,
}

impl Default for WalkInRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl WalkInRequestBuilder {
    /// Creates a builder with the canonical full-day defaults
    pub fn new() -> Self {
        Self {
            visit_date: TemporalFixtures::visit_date(),
            breakdown: BreakdownFixtures::full_day(),
            tendered: MoneyFixtures::full_day_total(),
            recorded_by: Some("desk".to_string()),
        }
    }

    /// Sets the visit date
    pub fn with_visit_date(mut self, date: NaiveDate) -> Self {
        self.visit_date = date;
        self
    }

    /// Sets the breakdown
    pub fn with_breakdown(mut self, breakdown: VisitBreakdown) -> Self {
        self.breakdown = breakdown;
        self
    }

    /// Sets the tendered cash
    pub fn with_tendered(mut self, tendered: Money) -> Self {
        self.tendered = tendered;
        self
    }

    /// Sets the recording staff member
    pub fn with_recorded_by(mut self, staff: impl Into<String>) -> Self {
        self.recorded_by = Some(staff.into());
        self
    }

    /// Builds the request
    pub fn build(self) -> WalkInRequest {
        WalkInRequest {
            visit_date: self.visit_date,
            breakdown: self.breakdown,
            tendered: self.tendered,
            recorded_by: self.recorded_by,
        }
    }
}

/// Builder for reservation requests
pub struct ReservationRequestBuilder {
    kind: ReservationKind,
    group_name: String,
    contact_phone: Option<String>,
    scheduled_date: NaiveDate,
    breakdown: VisitBreakdown,
    down_payment: Money,
    notes: Option<String>,
}

impl Default for ReservationRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReservationRequestBuilder {
    /// Creates a builder for a school group with a fake name and phone
    pub fn new() -> Self {
        Self {
            kind: ReservationKind::Group,
            group_name: CompanyName().fake(),
            contact_phone: Some(PhoneNumber().fake()),
            scheduled_date: TemporalFixtures::scheduled_date(),
            breakdown: BreakdownFixtures::school_group(),
            down_payment: MoneyFixtures::idr_zero(),
            notes: None,
        }
    }

    /// Sets the reservation kind
    pub fn with_kind(mut self, kind: ReservationKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the group name
    pub fn with_group_name(mut self, name: impl Into<String>) -> Self {
        self.group_name = name.into();
        self
    }

    /// Sets the scheduled date
    pub fn with_scheduled_date(mut self, date: NaiveDate) -> Self {
        self.scheduled_date = date;
        self
    }

    /// Sets the breakdown
    pub fn with_breakdown(mut self, breakdown: VisitBreakdown) -> Self {
        self.breakdown = breakdown;
        self
    }

    /// Sets the initial down payment
    pub fn with_down_payment(mut self, amount: Money) -> Self {
        self.down_payment = amount;
        self
    }

    /// Sets the notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Builds the request
    pub fn build(self) -> ReservationRequest {
        ReservationRequest {
            kind: self.kind,
            group_name: self.group_name,
            contact_phone: self.contact_phone,
            scheduled_date: self.scheduled_date,
            breakdown: self.breakdown,
            down_payment: self.down_payment,
            notes: self.notes,
        }
    }
}
