//! Seed stages: demo accounts, profiles, curriculum, badges, and one
//! illustrative scheduling chain.
//!
//! Every value is bound as a query parameter; nothing from the catalog is
//! interpolated into SQL text.

use chrono::NaiveDate;
use skymentor_core::catalog::{
    self, BADGES, CURRICULUM, DEMO_PASSWORD, DEMO_USERS, MENTOR_PROFILES, SAMPLE_DAY_OF_WEEK,
};
use skymentor_core::credentials;
use skymentor_core::labels::{Role, Status};
use skymentor_core::types::DbId;
use sqlx::PgConnection;

use crate::error::{DuringStage, ProvisionError};
use crate::models::audit::{event_types, CreateAuditEvent};
use crate::models::curriculum::{CreateBadge, CreateProgressionStep};
use crate::models::mentee::CreateMentee;
use crate::models::mentor::CreateMentor;
use crate::models::schedule::{
    CreateAssignment, CreateAttendanceRequest, CreateAvailability, CreatePreference,
    CreateSessionBlock,
};
use crate::models::user::CreateUser;
use crate::provisioner::Stage;
use crate::repositories::{
    AssignmentRepo, AttendanceRequestRepo, AuditEventRepo, AvailabilityRepo, BadgeRepo,
    MenteeRepo, MentorRepo, PreferenceRepo, ProgressionStepRepo, SessionBlockRepo, UserRepo,
};

/// Ids of the seeded demo accounts, one per role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoAccounts {
    pub mentor: DbId,
    pub mentee: DbId,
    pub admin: DbId,
}

impl DemoAccounts {
    pub fn id_for(&self, role: Role) -> DbId {
        match role {
            Role::Mentor => self.mentor,
            Role::Mentee => self.mentee,
            Role::Admin => self.admin,
        }
    }
}

/// Ids created by [`seed_sample_activity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleActivity {
    pub session_block_id: DbId,
    pub session_date: NaiveDate,
    pub attendance_request_id: DbId,
    pub assignment_id: DbId,
}

/// Insert the three demo users with freshly salted credential hashes.
pub async fn seed_users(conn: &mut PgConnection) -> Result<DemoAccounts, ProvisionError> {
    let mut ids = [DbId::nil(); 3];

    for (slot, demo) in ids.iter_mut().zip(DEMO_USERS.iter()) {
        let input = CreateUser {
            role: demo.role,
            name: demo.name.to_string(),
            email: demo.email.to_string(),
            phone: Some(demo.phone.to_string()),
            uspa_license: Some(demo.license.to_string()),
            jumps: demo.jumps,
            password_hash: credentials::hash_password(DEMO_PASSWORD)?,
        };
        let user = UserRepo::create(conn, &input).await.during(Stage::SeedUsers)?;
        tracing::debug!(
            user_id = %user.id,
            role = %demo.role,
            email = demo.email,
            "Demo user created"
        );
        *slot = user.id;
    }

    let by_role = |role: Role| {
        DEMO_USERS
            .iter()
            .zip(ids)
            .find(|(demo, _)| demo.role == role)
            .map(|(_, id)| id)
            .unwrap_or_default()
    };

    Ok(DemoAccounts {
        mentor: by_role(Role::Mentor),
        mentee: by_role(Role::Mentee),
        admin: by_role(Role::Admin),
    })
}

/// Insert the mentor profiles (mentor and admin) and the mentee profile.
pub async fn seed_profiles(
    conn: &mut PgConnection,
    accounts: &DemoAccounts,
) -> Result<(), ProvisionError> {
    for profile in &MENTOR_PROFILES {
        let input = CreateMentor {
            id: accounts.id_for(profile.role),
            ratings: Some(profile.ratings.to_string()),
            coach_number: Some(profile.coach_number.to_string()),
            disciplines: profile.disciplines.iter().map(|d| d.to_string()).collect(),
            max_concurrent_mentees: profile.max_concurrent_mentees,
            seniority_score: profile.seniority_score,
            dz_endorsement: profile.dz_endorsement,
        };
        MentorRepo::create(conn, &input).await.during(Stage::SeedProfiles)?;
    }

    let mentee = catalog::mentee_profile();
    let input = CreateMentee {
        id: accounts.mentee,
        goals: Some(mentee.goals.to_string()),
        comfort_level: mentee.comfort_level,
        canopy_size: Some(mentee.canopy_size),
        last_currency_date: mentee.last_currency_date,
    };
    MenteeRepo::create(conn, &input).await.during(Stage::SeedProfiles)?;

    Ok(())
}

/// Insert the 24-step progression curriculum. Returns the number of rows.
pub async fn seed_curriculum(conn: &mut PgConnection) -> Result<usize, ProvisionError> {
    for (index, step) in CURRICULUM.iter().enumerate() {
        let input = CreateProgressionStep {
            code: step.code.to_string(),
            title: step.title.to_string(),
            description: Some(step.description.to_string()),
            category: step.category,
            required: true,
            min_jumps_gate: step.min_jumps_gate,
            references: Some(catalog::step_references(index)),
        };
        ProgressionStepRepo::create(conn, &input)
            .await
            .during(Stage::SeedCurriculum)?;
    }
    Ok(CURRICULUM.len())
}

/// Insert the badge definitions. Returns the number of rows.
pub async fn seed_badges(conn: &mut PgConnection) -> Result<usize, ProvisionError> {
    for badge in &BADGES {
        let criteria = serde_json::to_value(badge.criteria)?;
        let input = CreateBadge {
            code: badge.code.to_string(),
            name: badge.name.to_string(),
            description: Some(badge.description.to_string()),
            criteria_json: Some(criteria),
        };
        BadgeRepo::create(conn, &input).await.during(Stage::SeedBadges)?;
    }
    Ok(BADGES.len())
}

/// Insert one availability / session / request / assignment chain showing a
/// confirmed pairing of the demo mentor and mentee, plus the mentee's
/// preference for that mentor and an audit entry for the confirmation.
pub async fn seed_sample_activity(
    conn: &mut PgConnection,
    accounts: &DemoAccounts,
) -> Result<SampleActivity, ProvisionError> {
    const STAGE: Stage = Stage::SeedSampleActivity;

    for window in catalog::sample_availability() {
        let input = CreateAvailability {
            user_id: accounts.id_for(window.role),
            role: window.role,
            day_of_week: SAMPLE_DAY_OF_WEEK,
            start_time: window.start,
            end_time: window.end,
            start_date: None,
            end_date: None,
            is_recurring: true,
            capacity_override: None,
        };
        AvailabilityRepo::create(conn, &input).await.during(STAGE)?;
    }

    // Dated by the server clock so the block is always "tomorrow" for the database.
    let session_date: NaiveDate = sqlx::query_scalar("SELECT CURRENT_DATE + 1")
        .fetch_one(&mut *conn)
        .await
        .during(STAGE)?;
    let (start_time, end_time) = catalog::sample_session_hours();

    let block = SessionBlockRepo::create(
        conn,
        &CreateSessionBlock {
            mentor_id: accounts.mentor,
            date: session_date,
            start_time,
            end_time,
            dz_id: None,
            load_interval_min: None,
            block_capacity_hint: None,
        },
    )
    .await
    .during(STAGE)?;

    let request = AttendanceRequestRepo::create(
        conn,
        &CreateAttendanceRequest {
            mentee_id: accounts.mentee,
            session_block_id: block.id,
            status: Status::Confirmed,
        },
    )
    .await
    .during(STAGE)?;

    PreferenceRepo::create(
        conn,
        &CreatePreference {
            mentee_id: accounts.mentee,
            preferred_mentors: vec![accounts.mentor],
            avoid_mentors: Vec::new(),
            notes: Some("Prefers the same mentor for formation progression".to_string()),
        },
    )
    .await
    .during(STAGE)?;

    let assignment = AssignmentRepo::create(
        conn,
        &CreateAssignment {
            session_block_id: block.id,
            mentor_id: accounts.mentor,
            mentee_id: accounts.mentee,
            status: Status::Confirmed,
        },
    )
    .await
    .during(STAGE)?;

    AuditEventRepo::append(
        conn,
        &CreateAuditEvent {
            actor_id: Some(accounts.admin),
            event_type: event_types::ASSIGNMENT_CONFIRMED.to_string(),
            payload: Some(serde_json::json!({
                "assignment_id": assignment.id,
                "session_block_id": block.id,
                "mentor_id": accounts.mentor,
                "mentee_id": accounts.mentee,
            })),
        },
    )
    .await
    .during(STAGE)?;

    tracing::debug!(
        session_block_id = %block.id,
        assignment_id = %assignment.id,
        %session_date,
        "Sample activity created",
    );

    Ok(SampleActivity {
        session_block_id: block.id,
        session_date,
        attendance_request_id: request.id,
        assignment_id: assignment.id,
    })
}
