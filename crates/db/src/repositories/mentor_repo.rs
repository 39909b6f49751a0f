//! Repository for the `mentors` table.

use skymentor_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgConnection;

use crate::models::mentor::{CreateMentor, Mentor};

const COLUMNS: &str = "id, ratings, coach_number, disciplines, max_concurrent_mentees, \
                       seniority_score, dz_endorsement";

pub struct MentorRepo;

impl MentorRepo {
    /// Insert a mentor profile. Fails with a foreign key violation when the
    /// owning user does not exist.
    pub async fn create(
        conn: &mut PgConnection,
        input: &CreateMentor,
    ) -> Result<Mentor, sqlx::Error> {
        let query = format!(
            "INSERT INTO mentors (id, ratings, coach_number, disciplines, max_concurrent_mentees,
                                  seniority_score, dz_endorsement)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Mentor>(&query)
            .bind(input.id)
            .bind(&input.ratings)
            .bind(&input.coach_number)
            .bind(Json(&input.disciplines))
            .bind(input.max_concurrent_mentees)
            .bind(input.seniority_score)
            .bind(input.dz_endorsement)
            .fetch_one(conn)
            .await
    }

    pub async fn find_by_id(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<Mentor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM mentors WHERE id = $1");
        sqlx::query_as::<_, Mentor>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }
}
