//! Schema creation and idempotent reset.

use assert_matches::assert_matches;
use skymentor_core::labels::ENUM_TYPES;
use skymentor_db::schema::{self, INDEXES, TABLES};
use skymentor_db::{plan, sqlstate, ProvisionError, Provisioner, Stage};
use sqlx::{PgConnection, PgPool};

async fn create_all(conn: &mut PgConnection) {
    schema::create_enums(conn).await.unwrap();
    schema::create_tables(conn).await.unwrap();
    schema::create_indexes(conn).await.unwrap();
}

async fn table_exists(conn: &mut PgConnection, table: &str) -> bool {
    sqlx::query_scalar(
        "SELECT EXISTS (
            SELECT 1 FROM information_schema.tables
            WHERE table_schema = 'public' AND table_name = $1
        )",
    )
    .bind(table)
    .fetch_one(conn)
    .await
    .unwrap()
}

/// Every enum creation fails on a second attempt without a reset.
#[sqlx::test(migrations = false)]
async fn test_enums_cannot_be_created_twice(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    schema::create_enums(&mut conn).await.unwrap();

    for ty in ENUM_TYPES {
        let err = sqlx::query(&schema::create_enum_sql(ty))
            .execute(&mut *conn)
            .await
            .unwrap_err();
        let code = err.as_database_error().and_then(|e| e.code()).map(|c| c.into_owned());
        assert_eq!(
            code.as_deref(),
            Some(sqlstate::DUPLICATE_OBJECT),
            "{} should already exist",
            ty.name
        );
    }

    let err = schema::create_enums(&mut conn).await.unwrap_err();
    assert_matches!(err, ProvisionError::Statement { stage: Stage::CreateEnums, .. });
    assert_eq!(err.sqlstate().as_deref(), Some(sqlstate::DUPLICATE_OBJECT));
}

#[sqlx::test(migrations = false)]
async fn test_tables_cannot_be_created_twice(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    schema::create_enums(&mut conn).await.unwrap();
    schema::create_tables(&mut conn).await.unwrap();

    let err = schema::create_tables(&mut conn).await.unwrap_err();
    assert_matches!(err, ProvisionError::Statement { stage: Stage::CreateTables, .. });
    assert_eq!(err.sqlstate().as_deref(), Some(sqlstate::DUPLICATE_TABLE));
}

#[sqlx::test(migrations = false)]
async fn test_reset_then_create_yields_empty_tables(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    schema::drop_schema(&mut conn).await.unwrap();
    create_all(&mut conn).await;

    for table in TABLES {
        assert!(table_exists(&mut conn, table.name).await, "{} missing", table.name);
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table.name))
            .fetch_one(&mut *conn)
            .await
            .unwrap();
        assert_eq!(count, 0, "{} should be empty before seeding", table.name);
    }

    let index_count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM pg_indexes WHERE schemaname = 'public' AND indexname LIKE 'idx_%'",
    )
    .fetch_one(&mut *conn)
    .await
    .unwrap();
    assert_eq!(index_count, INDEXES.len() as i64);
}

/// Resetting an empty database twice in a row succeeds.
#[sqlx::test(migrations = false)]
async fn test_reset_is_idempotent(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    schema::drop_schema(&mut conn).await.unwrap();
    schema::drop_schema(&mut conn).await.unwrap();
}

#[sqlx::test(migrations = false)]
async fn test_rerun_requires_reset(pool: PgPool) {
    let conn = pool.acquire().await.unwrap().detach();
    let mut provisioner = Provisioner::new(conn);
    provisioner.run(&plan(false)).await.unwrap();

    let err = provisioner.run(&plan(false)).await.unwrap_err();
    assert_matches!(err, ProvisionError::Statement { stage: Stage::CreateEnums, .. });

    let outcome = provisioner.run(&plan(true)).await.unwrap();
    let report = outcome.report.clone().unwrap();
    assert_eq!(report.count("users"), Some(3));
    assert!(report.is_consistent());

    let conn = provisioner.connection();
    for table in TABLES {
        assert!(table_exists(conn, table.name).await);
    }
    provisioner.close().await;
}

#[sqlx::test(migrations = false)]
async fn test_reset_removes_every_table_and_type(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    create_all(&mut conn).await;
    schema::drop_schema(&mut conn).await.unwrap();

    for table in TABLES {
        assert!(!table_exists(&mut conn, table.name).await, "{} survived reset", table.name);
    }
    let remaining: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM pg_type t
         JOIN pg_namespace n ON n.oid = t.typnamespace
         WHERE n.nspname = 'public' AND t.typtype = 'e'",
    )
    .fetch_one(&mut *conn)
    .await
    .unwrap();
    assert_eq!(remaining, 0);
}
