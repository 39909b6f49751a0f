//! Repository for the `availability` table.

use skymentor_core::types::DbId;
use sqlx::PgConnection;

use crate::models::schedule::CreateAvailability;

pub struct AvailabilityRepo;

impl AvailabilityRepo {
    /// Insert an availability window, returning its id.
    pub async fn create(
        conn: &mut PgConnection,
        input: &CreateAvailability,
    ) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO availability (user_id, role, day_of_week, start_time, end_time,
                                       start_date, end_date, is_recurring, capacity_override)
             VALUES ($1, $2::role, $3, $4, $5, $6, $7, $8, $9)
             RETURNING id",
        )
        .bind(input.user_id)
        .bind(input.role.as_str())
        .bind(input.day_of_week)
        .bind(input.start_time)
        .bind(input.end_time)
        .bind(input.start_date)
        .bind(input.end_date)
        .bind(input.is_recurring)
        .bind(input.capacity_override)
        .fetch_one(conn)
        .await
    }
}
