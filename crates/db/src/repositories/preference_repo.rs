//! Repository for the `preferences` table.

use skymentor_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgConnection;

use crate::models::schedule::CreatePreference;

pub struct PreferenceRepo;

impl PreferenceRepo {
    /// Insert a mentee's ranked and avoided mentor lists, returning the row id.
    pub async fn create(
        conn: &mut PgConnection,
        input: &CreatePreference,
    ) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO preferences (mentee_id, preferred_mentors, avoid_mentors, notes)
             VALUES ($1, $2, $3, $4)
             RETURNING id",
        )
        .bind(input.mentee_id)
        .bind(Json(&input.preferred_mentors))
        .bind(Json(&input.avoid_mentors))
        .bind(&input.notes)
        .fetch_one(conn)
        .await
    }
}
