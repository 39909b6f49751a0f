//! Mentor profile: a 1:1 extension of a supervising user.

use skymentor_core::types::DbId;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct Mentor {
    pub id: DbId,
    pub ratings: Option<String>,
    pub coach_number: Option<String>,
    /// JSON array of discipline names.
    pub disciplines: serde_json::Value,
    pub max_concurrent_mentees: i32,
    pub seniority_score: i32,
    pub dz_endorsement: bool,
}

/// DTO for creating a mentor profile. `id` is the owning user's id.
#[derive(Debug, Clone)]
pub struct CreateMentor {
    pub id: DbId,
    pub ratings: Option<String>,
    pub coach_number: Option<String>,
    pub disciplines: Vec<String>,
    pub max_concurrent_mentees: i32,
    pub seniority_score: i32,
    pub dz_endorsement: bool,
}
