//! Progression steps and badge definitions.

use skymentor_core::labels::Category;
use skymentor_core::types::DbId;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct ProgressionStep {
    pub id: DbId,
    pub code: String,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub required: bool,
    pub min_jumps_gate: i32,
    pub references: Option<serde_json::Value>,
}

#[derive(Debug, Clone)]
pub struct CreateProgressionStep {
    pub code: String,
    pub title: String,
    pub description: Option<String>,
    pub category: Category,
    pub required: bool,
    pub min_jumps_gate: i32,
    pub references: Option<serde_json::Value>,
}

#[derive(Debug, Clone, FromRow)]
pub struct Badge {
    pub id: DbId,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub criteria_json: Option<serde_json::Value>,
}

#[derive(Debug, Clone)]
pub struct CreateBadge {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub criteria_json: Option<serde_json::Value>,
}
