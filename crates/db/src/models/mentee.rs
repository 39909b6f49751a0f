//! Mentee profile: a 1:1 extension of a mentee user.

use chrono::NaiveDate;
use skymentor_core::labels::ComfortLevel;
use skymentor_core::types::DbId;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct Mentee {
    pub id: DbId,
    pub goals: Option<String>,
    pub comfort_level: Option<String>,
    pub canopy_size: Option<i32>,
    pub last_currency_date: Option<NaiveDate>,
}

/// DTO for creating a mentee profile. `id` is the owning user's id.
#[derive(Debug, Clone)]
pub struct CreateMentee {
    pub id: DbId,
    pub goals: Option<String>,
    pub comfort_level: ComfortLevel,
    pub canopy_size: Option<i32>,
    pub last_currency_date: Option<NaiveDate>,
}
