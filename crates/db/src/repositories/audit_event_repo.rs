//! Repository for the append-only `audit_events` table.

use skymentor_core::types::DbId;
use sqlx::PgConnection;

use crate::models::audit::CreateAuditEvent;

pub struct AuditEventRepo;

impl AuditEventRepo {
    /// Append an event, returning its id.
    pub async fn append(
        conn: &mut PgConnection,
        input: &CreateAuditEvent,
    ) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO audit_events (actor_id, type, payload_json)
             VALUES ($1, $2, $3)
             RETURNING id",
        )
        .bind(input.actor_id)
        .bind(&input.event_type)
        .bind(&input.payload)
        .fetch_one(conn)
        .await
    }
}
