//! Repository for the `progression_steps` table.

use skymentor_core::labels::Category;
use sqlx::PgConnection;

use crate::models::curriculum::{CreateProgressionStep, ProgressionStep};

/// `references` is a reserved word and must stay quoted.
const COLUMNS: &str = "id, code, title, description, category::text AS category, required, \
                       min_jumps_gate, \"references\"";

pub struct ProgressionStepRepo;

impl ProgressionStepRepo {
    pub async fn create(
        conn: &mut PgConnection,
        input: &CreateProgressionStep,
    ) -> Result<ProgressionStep, sqlx::Error> {
        let query = format!(
            "INSERT INTO progression_steps (code, title, description, category, required,
                                            min_jumps_gate, \"references\")
             VALUES ($1, $2, $3, $4::category, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProgressionStep>(&query)
            .bind(&input.code)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.category.as_str())
            .bind(input.required)
            .bind(input.min_jumps_gate)
            .bind(&input.references)
            .fetch_one(conn)
            .await
    }

    /// Steps in one category, ordered by jump gate.
    pub async fn list_by_category(
        conn: &mut PgConnection,
        category: Category,
    ) -> Result<Vec<ProgressionStep>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM progression_steps
             WHERE category = $1::category
             ORDER BY min_jumps_gate, code"
        );
        sqlx::query_as::<_, ProgressionStep>(&query)
            .bind(category.as_str())
            .fetch_all(conn)
            .await
    }
}
