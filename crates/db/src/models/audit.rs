//! Append-only activity trail.

use skymentor_core::types::DbId;

/// Known audit event types written by provisioning.
pub mod event_types {
    pub const ASSIGNMENT_CONFIRMED: &str = "assignment_confirmed";
}

#[derive(Debug, Clone)]
pub struct CreateAuditEvent {
    pub actor_id: Option<DbId>,
    pub event_type: String,
    pub payload: Option<serde_json::Value>,
}
