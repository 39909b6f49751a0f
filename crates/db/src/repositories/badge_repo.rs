//! Repository for the `badges` table.

use sqlx::PgConnection;

use crate::models::curriculum::{Badge, CreateBadge};

const COLUMNS: &str = "id, code, name, description, criteria_json";

pub struct BadgeRepo;

impl BadgeRepo {
    pub async fn create(
        conn: &mut PgConnection,
        input: &CreateBadge,
    ) -> Result<Badge, sqlx::Error> {
        let query = format!(
            "INSERT INTO badges (code, name, description, criteria_json)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Badge>(&query)
            .bind(&input.code)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.criteria_json)
            .fetch_one(conn)
            .await
    }

    pub async fn find_by_code(
        conn: &mut PgConnection,
        code: &str,
    ) -> Result<Option<Badge>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM badges WHERE code = $1");
        sqlx::query_as::<_, Badge>(&query)
            .bind(code)
            .fetch_optional(conn)
            .await
    }
}
