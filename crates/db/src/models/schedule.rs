//! Scheduling entities: availability windows, session blocks, attendance
//! requests, matching preferences, and confirmed assignments.

use chrono::{NaiveDate, NaiveTime};
use skymentor_core::labels::{Role, Status};
use skymentor_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// DTO for an availability window. Recurring weekly unless `is_recurring` is false.
#[derive(Debug, Clone)]
pub struct CreateAvailability {
    pub user_id: DbId,
    pub role: Role,
    /// 0 = Sunday .. 6 = Saturday.
    pub day_of_week: i32,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub is_recurring: bool,
    pub capacity_override: Option<i32>,
}

#[derive(Debug, Clone, FromRow)]
pub struct SessionBlock {
    pub id: DbId,
    pub mentor_id: DbId,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub dz_id: Option<DbId>,
    pub load_interval_min: i32,
    pub block_capacity_hint: i32,
}

/// DTO for a session block. `None` fields take the column defaults.
#[derive(Debug, Clone)]
pub struct CreateSessionBlock {
    pub mentor_id: DbId,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub dz_id: Option<DbId>,
    pub load_interval_min: Option<i32>,
    pub block_capacity_hint: Option<i32>,
}

#[derive(Debug, Clone, FromRow)]
pub struct AttendanceRequest {
    pub id: DbId,
    pub mentee_id: DbId,
    pub session_block_id: DbId,
    pub status: String,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone)]
pub struct CreateAttendanceRequest {
    pub mentee_id: DbId,
    pub session_block_id: DbId,
    pub status: Status,
}

/// DTO for a mentee's matching preferences.
#[derive(Debug, Clone, Default)]
pub struct CreatePreference {
    pub mentee_id: DbId,
    pub preferred_mentors: Vec<DbId>,
    pub avoid_mentors: Vec<DbId>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, FromRow)]
pub struct Assignment {
    pub id: DbId,
    pub session_block_id: DbId,
    pub mentor_id: DbId,
    pub mentee_id: DbId,
    pub status: String,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone)]
pub struct CreateAssignment {
    pub session_block_id: DbId,
    pub mentor_id: DbId,
    pub mentee_id: DbId,
    pub status: Status,
}
