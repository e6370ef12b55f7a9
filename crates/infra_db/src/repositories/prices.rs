//! Ticket price repository
//!
//! One row per category; the table is tiny and read on every record
//! creation, so no caching layer sits in front of it — a fresh read per
//! request avoids stale-price bugs after an administrative update.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::error::DatabaseError;

/// A configured unit price row
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PriceRow {
    pub category: String,
    pub amount: Decimal,
    pub currency: String,
    pub updated_at: DateTime<Utc>,
}

/// Repository for the ticket price table
#[derive(Debug, Clone)]
pub struct PriceRepository {
    pool: PgPool,
}

impl PriceRepository {
    /// Creates a new PriceRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns all configured prices
    pub async fn get_all(&self) -> Result<Vec<PriceRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, PriceRow>(
            r#"
            SELECT category, amount, currency, updated_at
            FROM ticket_prices
            ORDER BY category
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Inserts or replaces the price for a category
    pub async fn upsert(
        &self,
        category: &str,
        amount: Decimal,
        currency: &str,
    ) -> Result<(), DatabaseError> {
        sqlx::query(
            r#"
            INSERT INTO ticket_prices (category, amount, currency, updated_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (category)
            DO UPDATE SET amount = EXCLUDED.amount,
                          currency = EXCLUDED.currency,
                          updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(category)
        .bind(amount)
        .bind(currency)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        tracing::debug!(category, %amount, "ticket price upserted");
        Ok(())
    }

    /// Removes the price for a category
    pub async fn delete(&self, category: &str) -> Result<bool, DatabaseError> {
        let result = sqlx::query("DELETE FROM ticket_prices WHERE category = $1")
            .bind(category)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
