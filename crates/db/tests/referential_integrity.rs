//! Foreign keys, uniqueness, column defaults and stage ordering.

use assert_matches::assert_matches;
use chrono::NaiveTime;
use skymentor_core::labels::{ComfortLevel, Role};
use skymentor_db::models::mentee::CreateMentee;
use skymentor_db::models::mentor::CreateMentor;
use skymentor_db::models::schedule::CreateSessionBlock;
use skymentor_db::models::user::CreateUser;
use skymentor_db::repositories::{MenteeRepo, MentorRepo, SessionBlockRepo, UserRepo};
use skymentor_db::{plan, schema, seed, sqlstate, ProvisionError, Provisioner, Stage};
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

fn db_code(err: &sqlx::Error) -> Option<String> {
    err.as_database_error()
        .and_then(|e| e.code())
        .map(|c| c.into_owned())
}

async fn provisioned(pool: &PgPool) -> Provisioner {
    let conn = pool.acquire().await.unwrap().detach();
    let mut provisioner = Provisioner::new(conn);
    provisioner.run(&plan(false)).await.unwrap();
    provisioner
}

async fn schema_only(conn: &mut PgConnection) {
    schema::create_enums(conn).await.unwrap();
    schema::create_tables(conn).await.unwrap();
}

#[sqlx::test(migrations = false)]
async fn test_every_profile_has_a_parent_user(pool: PgPool) {
    let mut provisioner = provisioned(&pool).await;
    let conn = provisioner.connection();

    for table in ["mentors", "mentees"] {
        let orphans: i64 = sqlx::query_scalar(&format!(
            "SELECT COUNT(*) FROM {table} p LEFT JOIN users u ON u.id = p.id WHERE u.id IS NULL"
        ))
        .fetch_one(&mut *conn)
        .await
        .unwrap();
        assert_eq!(orphans, 0, "{table} has rows without a user");
    }

    let mentor_roles: Vec<(String,)> = sqlx::query_as(
        "SELECT u.role::text FROM mentors m JOIN users u ON u.id = m.id ORDER BY u.role",
    )
    .fetch_all(&mut *conn)
    .await
    .unwrap();
    assert_eq!(
        mentor_roles,
        vec![("mentor".to_string(),), ("admin".to_string(),)]
    );

    let accounts = provisioner.outcome().accounts.unwrap();
    let conn = provisioner.connection();
    let admin_profile = MentorRepo::find_by_id(conn, accounts.admin).await.unwrap();
    assert_eq!(admin_profile.map(|m| m.id), Some(accounts.admin));
    assert!(MentorRepo::find_by_id(conn, accounts.mentee).await.unwrap().is_none());

    let mentee_profile = MenteeRepo::find_by_id(conn, accounts.mentee)
        .await
        .unwrap()
        .expect("mentee profile should exist");
    assert_eq!(mentee_profile.comfort_level.as_deref(), Some("medium"));
    assert!(MenteeRepo::find_by_id(conn, accounts.mentor).await.unwrap().is_none());

    provisioner.close().await;
}

#[sqlx::test(migrations = false)]
async fn test_profile_with_unknown_parent_is_rejected(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    schema_only(&mut conn).await;

    let err = MentorRepo::create(
        &mut conn,
        &CreateMentor {
            id: Uuid::new_v4(),
            ratings: None,
            coach_number: None,
            disciplines: vec![],
            max_concurrent_mentees: 2,
            seniority_score: 0,
            dz_endorsement: false,
        },
    )
    .await
    .unwrap_err();
    assert_eq!(db_code(&err).as_deref(), Some(sqlstate::FOREIGN_KEY_VIOLATION));

    let err = MenteeRepo::create(
        &mut conn,
        &CreateMentee {
            id: Uuid::new_v4(),
            goals: None,
            comfort_level: ComfortLevel::Low,
            canopy_size: None,
            last_currency_date: None,
        },
    )
    .await
    .unwrap_err();
    assert_eq!(db_code(&err).as_deref(), Some(sqlstate::FOREIGN_KEY_VIOLATION));
}

#[sqlx::test(migrations = false)]
async fn test_session_block_requires_mentor_profile(pool: PgPool) {
    let mut provisioner = provisioned(&pool).await;
    let mentee = provisioner.outcome().accounts.unwrap().mentee;
    let conn = provisioner.connection();

    // A mentee's user id has no mentor profile behind it.
    let err = SessionBlockRepo::create(
        conn,
        &CreateSessionBlock {
            mentor_id: mentee,
            date: chrono::NaiveDate::from_ymd_opt(2025, 6, 7).unwrap(),
            start_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            dz_id: None,
            load_interval_min: None,
            block_capacity_hint: None,
        },
    )
    .await
    .unwrap_err();
    assert_eq!(db_code(&err).as_deref(), Some(sqlstate::FOREIGN_KEY_VIOLATION));

    provisioner.close().await;
}

#[sqlx::test(migrations = false)]
async fn test_duplicate_email_is_rejected(pool: PgPool) {
    let mut provisioner = provisioned(&pool).await;
    let conn = provisioner.connection();

    let err = UserRepo::create(
        conn,
        &CreateUser {
            role: Role::Mentee,
            name: "Someone Else".to_string(),
            email: "mentee@test.com".to_string(),
            phone: None,
            uspa_license: None,
            jumps: 0,
            password_hash: "x".to_string(),
        },
    )
    .await
    .unwrap_err();
    assert_eq!(db_code(&err).as_deref(), Some(sqlstate::UNIQUE_VIOLATION));

    provisioner.close().await;
}

#[sqlx::test(migrations = false)]
async fn test_profiles_before_users_is_out_of_order(pool: PgPool) {
    let conn = pool.acquire().await.unwrap().detach();
    let mut provisioner = Provisioner::new(conn);
    provisioner
        .run(&[Stage::CreateEnums, Stage::CreateTables])
        .await
        .unwrap();

    let err = provisioner.run_stage(Stage::SeedProfiles).await.unwrap_err();
    assert_matches!(
        err,
        ProvisionError::OutOfOrder {
            stage: Stage::SeedProfiles,
            requires: Stage::SeedUsers
        }
    );
    provisioner.close().await;
}

#[sqlx::test(migrations = false)]
async fn test_stages_run_independently(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    schema_only(&mut conn).await;

    assert_eq!(seed::seed_curriculum(&mut conn).await.unwrap(), 24);
    assert_eq!(seed::seed_badges(&mut conn).await.unwrap(), 10);

    let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(&mut *conn)
        .await
        .unwrap();
    assert_eq!(users, 0);
}

async fn insert_bare_user(conn: &mut PgConnection, role: &str, email: &str) -> (Uuid, i32, bool) {
    sqlx::query_as(
        "INSERT INTO users (role, name, email, password_hash)
         VALUES ($1::role, $2, $3, 'x')
         RETURNING id, jumps, is_active",
    )
    .bind(role)
    .bind(email)
    .bind(email)
    .fetch_one(conn)
    .await
    .unwrap()
}

#[sqlx::test(migrations = false)]
async fn test_omitted_columns_take_their_defaults(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    schema_only(&mut conn).await;

    let (mentor_id, jumps, is_active) = insert_bare_user(&mut conn, "mentor", "m@test.com").await;
    assert_eq!(jumps, 0);
    assert!(is_active);
    let (mentee_id, _, _) = insert_bare_user(&mut conn, "mentee", "e@test.com").await;

    sqlx::query("INSERT INTO mentors (id) VALUES ($1)")
        .bind(mentor_id)
        .execute(&mut *conn)
        .await
        .unwrap();
    sqlx::query("INSERT INTO mentees (id) VALUES ($1)")
        .bind(mentee_id)
        .execute(&mut *conn)
        .await
        .unwrap();

    let block = SessionBlockRepo::create(
        &mut conn,
        &CreateSessionBlock {
            mentor_id,
            date: chrono::NaiveDate::from_ymd_opt(2025, 6, 7).unwrap(),
            start_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            dz_id: None,
            load_interval_min: None,
            block_capacity_hint: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(block.load_interval_min, 90);
    assert_eq!(block.block_capacity_hint, 8);

    let request_status: String = sqlx::query_scalar(
        "INSERT INTO attendance_requests (mentee_id, session_block_id)
         VALUES ($1, $2)
         RETURNING status::text",
    )
    .bind(mentee_id)
    .bind(block.id)
    .fetch_one(&mut *conn)
    .await
    .unwrap();
    assert_eq!(request_status, "pending");

    let assignment_status: String = sqlx::query_scalar(
        "INSERT INTO assignments (session_block_id, mentor_id, mentee_id)
         VALUES ($1, $2, $3)
         RETURNING status::text",
    )
    .bind(block.id)
    .bind(mentor_id)
    .bind(mentee_id)
    .fetch_one(&mut *conn)
    .await
    .unwrap();
    assert_eq!(assignment_status, "pending");
}
