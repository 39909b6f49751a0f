//! `skymentor-db` -- PostgreSQL schema provisioning and seeding.
//!
//! Opens a single auto-commit connection, runs the DDL catalog in
//! [`schema`], inserts the seed catalog through [`repositories`], and
//! verifies the result. [`provisioner`] strings the stages together.

use skymentor_core::config::DbConfig;
use sqlx::postgres::PgConnectOptions;
use sqlx::{ConnectOptions, PgConnection};

pub mod error;
pub mod models;
pub mod provisioner;
pub mod repositories;
pub mod schema;
pub mod seed;
pub mod verify;

pub use error::ProvisionError;
pub use provisioner::{plan, Outcome, Provisioner, Stage};

/// SQLSTATE codes the provisioning tests and callers match on.
pub mod sqlstate {
    pub const UNIQUE_VIOLATION: &str = "23505";
    pub const FOREIGN_KEY_VIOLATION: &str = "23503";
    pub const DUPLICATE_OBJECT: &str = "42710";
    pub const DUPLICATE_TABLE: &str = "42P07";
}

/// Build connect options from explicit configuration only.
pub fn connect_options(config: &DbConfig) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .database(&config.database)
        .username(&config.user)
        .password(&config.password)
}

/// Open the single provisioning connection. Not retried.
pub async fn connect(config: &DbConfig) -> Result<PgConnection, ProvisionError> {
    tracing::info!(
        address = %config.address(),
        database = %config.database,
        "Connecting to PostgreSQL"
    );
    let mut conn = connect_options(config)
        .connect()
        .await
        .map_err(|source| ProvisionError::Connect {
            address: config.address(),
            source,
        })?;

    health_check(&mut conn)
        .await
        .map_err(|source| ProvisionError::Connect {
            address: config.address(),
            source,
        })?;
    tracing::info!("✓ Database connection established");
    Ok(conn)
}

/// Round-trip a trivial query to confirm the session is usable.
pub async fn health_check(conn: &mut PgConnection) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(conn).await?;
    Ok(())
}
