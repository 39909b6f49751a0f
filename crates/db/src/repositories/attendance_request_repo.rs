//! Repository for the `attendance_requests` table.

use sqlx::PgConnection;

use crate::models::schedule::{AttendanceRequest, CreateAttendanceRequest};

const COLUMNS: &str = "id, mentee_id, session_block_id, status::text AS status, created_at";

pub struct AttendanceRequestRepo;

impl AttendanceRequestRepo {
    pub async fn create(
        conn: &mut PgConnection,
        input: &CreateAttendanceRequest,
    ) -> Result<AttendanceRequest, sqlx::Error> {
        let query = format!(
            "INSERT INTO attendance_requests (mentee_id, session_block_id, status)
             VALUES ($1, $2, $3::status)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AttendanceRequest>(&query)
            .bind(input.mentee_id)
            .bind(input.session_block_id)
            .bind(input.status.as_str())
            .fetch_one(conn)
            .await
    }
}
