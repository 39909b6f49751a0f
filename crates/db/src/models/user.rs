//! User entity model and DTOs.

use skymentor_core::error::CoreError;
use skymentor_core::labels::Role;
use skymentor_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// `role` is read back as its text label; use [`User::role`] for the typed value.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    #[sqlx(rename = "role")]
    pub role_label: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub uspa_license: Option<String>,
    pub jumps: i32,
    pub is_active: bool,
    pub password_hash: String,
    pub created_at: Timestamp,
}

impl User {
    pub fn role(&self) -> Result<Role, CoreError> {
        Role::parse(&self.role_label)
    }
}

/// DTO for creating a new user. The password must already be hashed.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub role: Role,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub uspa_license: Option<String>,
    pub jumps: i32,
    pub password_hash: String,
}
