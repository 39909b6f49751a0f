//! Repository for the `users` table.

use skymentor_core::labels::Role;
use sqlx::PgConnection;

use crate::models::user::{CreateUser, User};

/// Column list shared across queries. Enum columns are read as text.
const COLUMNS: &str = "id, role::text AS role, name, email, phone, uspa_license, jumps, \
                       is_active, password_hash, created_at";

pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    pub async fn create(conn: &mut PgConnection, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (role, name, email, phone, uspa_license, jumps, password_hash)
             VALUES ($1::role, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(input.role.as_str())
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.uspa_license)
            .bind(input.jumps)
            .bind(&input.password_hash)
            .fetch_one(conn)
            .await
    }

    /// Find a user by email (case-sensitive).
    pub async fn find_by_email(
        conn: &mut PgConnection,
        email: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(conn)
            .await
    }

    /// List users with the given role, oldest first.
    pub async fn list_by_role(
        conn: &mut PgConnection,
        role: Role,
    ) -> Result<Vec<User>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM users WHERE role = $1::role ORDER BY created_at");
        sqlx::query_as::<_, User>(&query)
            .bind(role.as_str())
            .fetch_all(conn)
            .await
    }
}
