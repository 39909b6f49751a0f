//! Repository for the `session_blocks` table.

use sqlx::PgConnection;

use crate::models::schedule::{CreateSessionBlock, SessionBlock};

const COLUMNS: &str = "id, mentor_id, date, start_time, end_time, dz_id, load_interval_min, \
                       block_capacity_hint";

pub struct SessionBlockRepo;

impl SessionBlockRepo {
    /// Insert a session block. Unset load interval and capacity hint fall
    /// back to the column defaults.
    pub async fn create(
        conn: &mut PgConnection,
        input: &CreateSessionBlock,
    ) -> Result<SessionBlock, sqlx::Error> {
        let query = format!(
            "INSERT INTO session_blocks (mentor_id, date, start_time, end_time, dz_id,
                                         load_interval_min, block_capacity_hint)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 90), COALESCE($7, 8))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SessionBlock>(&query)
            .bind(input.mentor_id)
            .bind(input.date)
            .bind(input.start_time)
            .bind(input.end_time)
            .bind(input.dz_id)
            .bind(input.load_interval_min)
            .bind(input.block_capacity_hint)
            .fetch_one(conn)
            .await
    }
}
