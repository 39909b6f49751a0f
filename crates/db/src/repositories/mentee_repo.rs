//! Repository for the `mentees` table.

use skymentor_core::types::DbId;
use sqlx::PgConnection;

use crate::models::mentee::{CreateMentee, Mentee};

const COLUMNS: &str =
    "id, goals, comfort_level::text AS comfort_level, canopy_size, last_currency_date";

pub struct MenteeRepo;

impl MenteeRepo {
    /// Insert a mentee profile. Fails with a foreign key violation when the
    /// owning user does not exist.
    pub async fn create(
        conn: &mut PgConnection,
        input: &CreateMentee,
    ) -> Result<Mentee, sqlx::Error> {
        let query = format!(
            "INSERT INTO mentees (id, goals, comfort_level, canopy_size, last_currency_date)
             VALUES ($1, $2, $3::comfort_level, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Mentee>(&query)
            .bind(input.id)
            .bind(&input.goals)
            .bind(input.comfort_level.as_str())
            .bind(input.canopy_size)
            .bind(input.last_currency_date)
            .fetch_one(conn)
            .await
    }

    pub async fn find_by_id(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<Mentee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM mentees WHERE id = $1");
        sqlx::query_as::<_, Mentee>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }
}
