//! Reservation DTOs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use domain_pricing::PaymentStatus;
use domain_registration::{Reservation, ReservationKind, ReservationStatus};

use super::CountEntry;
use super::visits::RevenueLineDto;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateReservationRequest {
    /// "group" or "custom"
    #[validate(length(min = 1, max = 16))]
    pub kind: String,
    #[validate(length(min = 1, max = 120))]
    pub group_name: String,
    #[validate(length(max = 32))]
    pub contact_phone: Option<String>,
    pub scheduled_date: NaiveDate,
    #[validate(length(min = 1, max = 4))]
    pub counts: Vec<CountEntry>,
    /// Initial down payment; zero is allowed for draft bookings
    pub down_payment: Decimal,
    #[validate(length(max = 500))]
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct RecordPaymentRequest {
    pub amount: Decimal,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CancelReservationRequest {
    #[validate(length(min = 1, max = 200))]
    pub reason: String,
}

#[derive(Debug, Serialize)]
pub struct ReservationResponse {
    pub id: Uuid,
    pub code: String,
    pub kind: ReservationKind,
    pub group_name: String,
    pub contact_phone: Option<String>,
    pub scheduled_date: NaiveDate,
    pub lines: Vec<RevenueLineDto>,
    pub total_visitors: u64,
    pub total_revenue: Decimal,
    pub currency: String,
    pub down_payment: Decimal,
    pub change_amount: Decimal,
    pub payment_status: PaymentStatus,
    pub status: ReservationStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Reservation> for ReservationResponse {
    fn from(reservation: Reservation) -> Self {
        Self {
            id: *reservation.id.as_uuid(),
            code: reservation.code.to_string(),
            kind: reservation.kind,
            group_name: reservation.group_name,
            contact_phone: reservation.contact_phone,
            scheduled_date: reservation.scheduled_date,
            lines: reservation
                .computation
                .lines()
                .iter()
                .map(Into::into)
                .collect(),
            total_visitors: reservation.computation.total_visitors(),
            total_revenue: reservation.computation.total_revenue().amount(),
            currency: reservation.computation.currency().to_string(),
            down_payment: reservation.down_payment.amount(),
            change_amount: reservation.settlement.change_amount.amount(),
            payment_status: reservation.settlement.status,
            status: reservation.status,
            notes: reservation.notes,
            created_at: reservation.created_at,
            updated_at: reservation.updated_at,
        }
    }
}
