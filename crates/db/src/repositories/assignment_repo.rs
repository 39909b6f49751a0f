//! Repository for the `assignments` table.

use sqlx::PgConnection;

use crate::models::schedule::{Assignment, CreateAssignment};

const COLUMNS: &str =
    "id, session_block_id, mentor_id, mentee_id, status::text AS status, created_at";

pub struct AssignmentRepo;

impl AssignmentRepo {
    pub async fn create(
        conn: &mut PgConnection,
        input: &CreateAssignment,
    ) -> Result<Assignment, sqlx::Error> {
        let query = format!(
            "INSERT INTO assignments (session_block_id, mentor_id, mentee_id, status)
             VALUES ($1, $2, $3, $4::status)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Assignment>(&query)
            .bind(input.session_block_id)
            .bind(input.mentor_id)
            .bind(input.mentee_id)
            .bind(input.status.as_str())
            .fetch_one(conn)
            .await
    }
}
