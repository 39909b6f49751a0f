//! DDL catalog: enumerated types, tables, secondary indexes, and reset.
//!
//! Identifiers interpolated into statements come only from the fixed lists
//! in this module and in [`skymentor_core::labels::ENUM_TYPES`].

use skymentor_core::labels::{EnumType, ENUM_TYPES};
use sqlx::PgConnection;

use crate::error::{DuringStage, ProvisionError};
use crate::provisioner::Stage;

/// A table and its `CREATE TABLE` statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableDef {
    pub name: &'static str,
    pub ddl: &'static str,
}

/// A secondary index and the table it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexDef {
    pub name: &'static str,
    pub table: &'static str,
    pub columns: &'static str,
}

impl IndexDef {
    pub fn ddl(&self) -> String {
        format!("CREATE INDEX {} ON {}({})", self.name, self.table, self.columns)
    }
}

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

/// Every table, parents before the tables that reference them.
pub const TABLES: &[TableDef] = &[
    TableDef {
        name: "users",
        ddl: "CREATE TABLE users (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            role role NOT NULL,
            name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            phone TEXT,
            uspa_license TEXT,
            jumps INTEGER NOT NULL DEFAULT 0,
            is_active BOOLEAN NOT NULL DEFAULT true,
            password_hash TEXT NOT NULL,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )",
    },
    TableDef {
        name: "mentors",
        ddl: "CREATE TABLE mentors (
            id UUID PRIMARY KEY REFERENCES users(id) ON DELETE CASCADE,
            ratings TEXT,
            coach_number TEXT,
            disciplines JSONB NOT NULL DEFAULT '[]',
            max_concurrent_mentees INTEGER NOT NULL DEFAULT 2,
            seniority_score INTEGER NOT NULL DEFAULT 0,
            dz_endorsement BOOLEAN NOT NULL DEFAULT false
        )",
    },
    TableDef {
        name: "mentees",
        ddl: "CREATE TABLE mentees (
            id UUID PRIMARY KEY REFERENCES users(id) ON DELETE CASCADE,
            goals TEXT,
            comfort_level comfort_level DEFAULT 'medium',
            canopy_size INTEGER,
            last_currency_date DATE
        )",
    },
    TableDef {
        name: "availability",
        ddl: "CREATE TABLE availability (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            role role NOT NULL,
            day_of_week INTEGER NOT NULL CHECK (day_of_week BETWEEN 0 AND 6),
            start_time TIME NOT NULL,
            end_time TIME NOT NULL,
            start_date DATE,
            end_date DATE,
            is_recurring BOOLEAN NOT NULL DEFAULT true,
            capacity_override INTEGER
        )",
    },
    TableDef {
        name: "session_blocks",
        ddl: "CREATE TABLE session_blocks (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            mentor_id UUID NOT NULL REFERENCES mentors(id) ON DELETE CASCADE,
            date DATE NOT NULL,
            start_time TIME NOT NULL,
            end_time TIME NOT NULL,
            dz_id UUID,
            load_interval_min INTEGER NOT NULL DEFAULT 90,
            block_capacity_hint INTEGER NOT NULL DEFAULT 8
        )",
    },
    TableDef {
        name: "attendance_requests",
        ddl: "CREATE TABLE attendance_requests (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            mentee_id UUID NOT NULL REFERENCES mentees(id) ON DELETE CASCADE,
            session_block_id UUID NOT NULL REFERENCES session_blocks(id) ON DELETE CASCADE,
            status status NOT NULL DEFAULT 'pending',
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )",
    },
    TableDef {
        name: "preferences",
        ddl: "CREATE TABLE preferences (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            mentee_id UUID NOT NULL REFERENCES mentees(id) ON DELETE CASCADE,
            preferred_mentors JSONB NOT NULL DEFAULT '[]',
            avoid_mentors JSONB NOT NULL DEFAULT '[]',
            notes TEXT
        )",
    },
    TableDef {
        name: "assignments",
        ddl: "CREATE TABLE assignments (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            session_block_id UUID NOT NULL REFERENCES session_blocks(id) ON DELETE CASCADE,
            mentor_id UUID NOT NULL REFERENCES mentors(id) ON DELETE CASCADE,
            mentee_id UUID NOT NULL REFERENCES mentees(id) ON DELETE CASCADE,
            status status NOT NULL DEFAULT 'pending',
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )",
    },
    TableDef {
        name: "progression_steps",
        ddl: "CREATE TABLE progression_steps (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            code TEXT NOT NULL UNIQUE,
            title TEXT NOT NULL,
            description TEXT,
            category category NOT NULL,
            required BOOLEAN NOT NULL DEFAULT true,
            min_jumps_gate INTEGER NOT NULL DEFAULT 0,
            \"references\" JSONB
        )",
    },
    TableDef {
        name: "step_completions",
        ddl: "CREATE TABLE step_completions (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            mentee_id UUID NOT NULL REFERENCES mentees(id) ON DELETE CASCADE,
            step_id UUID NOT NULL REFERENCES progression_steps(id) ON DELETE CASCADE,
            mentor_id UUID NOT NULL REFERENCES mentors(id) ON DELETE CASCADE,
            completed_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            evidence_url TEXT,
            notes TEXT
        )",
    },
    TableDef {
        name: "badges",
        ddl: "CREATE TABLE badges (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            code TEXT NOT NULL UNIQUE,
            name TEXT NOT NULL,
            description TEXT,
            criteria_json JSONB
        )",
    },
    TableDef {
        name: "awards",
        ddl: "CREATE TABLE awards (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            mentee_id UUID NOT NULL REFERENCES mentees(id) ON DELETE CASCADE,
            badge_id UUID NOT NULL REFERENCES badges(id) ON DELETE CASCADE,
            awarded_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )",
    },
    TableDef {
        name: "jump_logs",
        ddl: "CREATE TABLE jump_logs (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            mentee_id UUID NOT NULL REFERENCES mentees(id) ON DELETE CASCADE,
            date DATE NOT NULL,
            jump_number INTEGER NOT NULL,
            aircraft TEXT,
            exit_alt INTEGER,
            freefall_time INTEGER,
            deployment_alt INTEGER,
            pattern_notes TEXT,
            drill_ref TEXT,
            mentor_id UUID REFERENCES mentors(id) ON DELETE SET NULL
        )",
    },
    TableDef {
        name: "audit_events",
        ddl: "CREATE TABLE audit_events (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            actor_id UUID REFERENCES users(id) ON DELETE SET NULL,
            type TEXT NOT NULL,
            payload_json JSONB,
            at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )",
    },
];

/// Table names in creation order.
pub fn table_names() -> impl DoubleEndedIterator<Item = &'static str> {
    TABLES.iter().map(|t| t.name)
}

// ---------------------------------------------------------------------------
// Indexes
// ---------------------------------------------------------------------------

#[rustfmt::skip]
pub const INDEXES: &[IndexDef] = &[
    IndexDef { name: "idx_users_email", table: "users", columns: "email" },
    IndexDef { name: "idx_users_role", table: "users", columns: "role" },
    IndexDef { name: "idx_availability_user_id", table: "availability", columns: "user_id" },
    IndexDef { name: "idx_availability_day_role", table: "availability", columns: "day_of_week, role" },
    IndexDef { name: "idx_session_blocks_mentor_date", table: "session_blocks", columns: "mentor_id, date" },
    IndexDef { name: "idx_attendance_requests_session", table: "attendance_requests", columns: "session_block_id" },
    IndexDef { name: "idx_assignments_session", table: "assignments", columns: "session_block_id" },
    IndexDef { name: "idx_assignments_mentor", table: "assignments", columns: "mentor_id" },
    IndexDef { name: "idx_assignments_mentee", table: "assignments", columns: "mentee_id" },
    IndexDef { name: "idx_step_completions_mentee", table: "step_completions", columns: "mentee_id" },
    IndexDef { name: "idx_step_completions_step", table: "step_completions", columns: "step_id" },
    IndexDef { name: "idx_progression_steps_category", table: "progression_steps", columns: "category" },
    IndexDef { name: "idx_awards_mentee", table: "awards", columns: "mentee_id" },
    IndexDef { name: "idx_jump_logs_mentee", table: "jump_logs", columns: "mentee_id" },
    IndexDef { name: "idx_audit_events_actor", table: "audit_events", columns: "actor_id" },
    IndexDef { name: "idx_audit_events_type_at", table: "audit_events", columns: "type, at" },
];

// ---------------------------------------------------------------------------
// Statements
// ---------------------------------------------------------------------------

/// `CREATE TYPE <name> AS ENUM ('a', 'b', ...)`.
pub fn create_enum_sql(ty: &EnumType) -> String {
    let labels = ty
        .labels
        .iter()
        .map(|l| format!("'{l}'"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("CREATE TYPE {} AS ENUM ({labels})", ty.name)
}

/// Drop every table (dependents first) and then every enumerated type.
///
/// Objects that do not exist are skipped, so this is safe to repeat.
pub async fn drop_schema(conn: &mut PgConnection) -> Result<(), ProvisionError> {
    for table in table_names().rev() {
        tracing::debug!(table, "Dropping table");
        sqlx::query(&format!("DROP TABLE IF EXISTS {table} CASCADE"))
            .execute(&mut *conn)
            .await
            .during(Stage::DropSchema)?;
    }
    for ty in ENUM_TYPES.iter().rev() {
        tracing::debug!(enum_type = ty.name, "Dropping enum type");
        sqlx::query(&format!("DROP TYPE IF EXISTS {} CASCADE", ty.name))
            .execute(&mut *conn)
            .await
            .during(Stage::DropSchema)?;
    }
    Ok(())
}

/// Create the four enumerated types. Fails if any already exists.
pub async fn create_enums(conn: &mut PgConnection) -> Result<(), ProvisionError> {
    for ty in ENUM_TYPES {
        sqlx::query(&create_enum_sql(ty))
            .execute(&mut *conn)
            .await
            .during(Stage::CreateEnums)?;
        tracing::debug!(enum_type = ty.name, labels = ty.labels.len(), "Enum type created");
    }
    Ok(())
}

/// Create every table in dependency order.
pub async fn create_tables(conn: &mut PgConnection) -> Result<(), ProvisionError> {
    for table in TABLES {
        sqlx::query(table.ddl)
            .execute(&mut *conn)
            .await
            .during(Stage::CreateTables)?;
        tracing::debug!(table = table.name, "Table created");
    }
    Ok(())
}

/// Create the secondary indexes. Tables must already exist.
pub async fn create_indexes(conn: &mut PgConnection) -> Result<(), ProvisionError> {
    for index in INDEXES {
        sqlx::query(&index.ddl())
            .execute(&mut *conn)
            .await
            .during(Stage::CreateIndexes)?;
        tracing::debug!(index = index.name, table = index.table, "Index created");
    }
    Ok(())
}
