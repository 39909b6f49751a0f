//! Ordered provisioning pipeline.
//!
//! Each [`Stage`] maps to one public function in [`crate::schema`],
//! [`crate::seed`] or [`crate::verify`]; the [`Provisioner`] runs a plan of
//! stages over a single auto-commit connection and stops at the first
//! failure. Completed statements stay committed.

use std::fmt;

use sqlx::{Connection, PgConnection};

use crate::error::ProvisionError;
use crate::schema;
use crate::seed::{self, DemoAccounts, SampleActivity};
use crate::verify::{self, VerificationReport};

/// A named provisioning stage, listed in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stage {
    DropSchema,
    CreateEnums,
    CreateTables,
    CreateIndexes,
    SeedUsers,
    SeedProfiles,
    SeedCurriculum,
    SeedBadges,
    SeedSampleActivity,
    Verify,
}

impl Stage {
    pub const ALL: [Stage; 10] = [
        Stage::DropSchema,
        Stage::CreateEnums,
        Stage::CreateTables,
        Stage::CreateIndexes,
        Stage::SeedUsers,
        Stage::SeedProfiles,
        Stage::SeedCurriculum,
        Stage::SeedBadges,
        Stage::SeedSampleActivity,
        Stage::Verify,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DropSchema => "drop_schema",
            Self::CreateEnums => "create_enums",
            Self::CreateTables => "create_tables",
            Self::CreateIndexes => "create_indexes",
            Self::SeedUsers => "seed_users",
            Self::SeedProfiles => "seed_profiles",
            Self::SeedCurriculum => "seed_curriculum",
            Self::SeedBadges => "seed_badges",
            Self::SeedSampleActivity => "seed_sample_activity",
            Self::Verify => "verify",
        }
    }

    /// Operator-facing description used in progress output.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::DropSchema => "Dropping existing schema",
            Self::CreateEnums => "Creating enums",
            Self::CreateTables => "Creating tables",
            Self::CreateIndexes => "Creating indexes",
            Self::SeedUsers => "Creating seed users",
            Self::SeedProfiles => "Creating user profiles",
            Self::SeedCurriculum => "Creating progression steps",
            Self::SeedBadges => "Creating badges",
            Self::SeedSampleActivity => "Creating sample data",
            Self::Verify => "Verifying database setup",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The full plan: every stage, with the destructive reset only on request.
pub fn plan(drop_existing: bool) -> Vec<Stage> {
    Stage::ALL
        .into_iter()
        .filter(|stage| drop_existing || *stage != Stage::DropSchema)
        .collect()
}

/// What a provisioning run produced.
#[derive(Debug, Clone, Default)]
pub struct Outcome {
    pub accounts: Option<DemoAccounts>,
    pub sample: Option<SampleActivity>,
    pub report: Option<VerificationReport>,
    pub completed: Vec<Stage>,
}

/// Runs stages over one owned connection.
pub struct Provisioner {
    conn: PgConnection,
    outcome: Outcome,
}

impl Provisioner {
    pub fn new(conn: PgConnection) -> Self {
        Self {
            conn,
            outcome: Outcome::default(),
        }
    }

    pub fn connection(&mut self) -> &mut PgConnection {
        &mut self.conn
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Run one stage. Seed stages that need demo account ids fail with
    /// [`ProvisionError::OutOfOrder`] if `SeedUsers` has not run on this
    /// provisioner.
    pub async fn run_stage(&mut self, stage: Stage) -> Result<(), ProvisionError> {
        tracing::info!(%stage, "{}...", stage.describe());
        let conn = &mut self.conn;

        match stage {
            Stage::DropSchema => schema::drop_schema(conn).await?,
            Stage::CreateEnums => schema::create_enums(conn).await?,
            Stage::CreateTables => schema::create_tables(conn).await?,
            Stage::CreateIndexes => schema::create_indexes(conn).await?,
            Stage::SeedUsers => {
                self.outcome.accounts = Some(seed::seed_users(conn).await?);
            }
            Stage::SeedProfiles => {
                let accounts = Self::require_accounts(&self.outcome, stage)?;
                seed::seed_profiles(conn, &accounts).await?;
            }
            Stage::SeedCurriculum => {
                let count = seed::seed_curriculum(conn).await?;
                tracing::debug!(count, "Progression steps inserted");
            }
            Stage::SeedBadges => {
                let count = seed::seed_badges(conn).await?;
                tracing::debug!(count, "Badges inserted");
            }
            Stage::SeedSampleActivity => {
                let accounts = Self::require_accounts(&self.outcome, stage)?;
                self.outcome.sample = Some(seed::seed_sample_activity(conn, &accounts).await?);
            }
            Stage::Verify => {
                self.outcome.report = Some(verify::verify(conn).await?);
            }
        }

        self.outcome.completed.push(stage);
        tracing::info!(%stage, "✓ {} done", stage.describe());
        Ok(())
    }

    /// Run `stages` in order, stopping at the first failure.
    pub async fn run(&mut self, stages: &[Stage]) -> Result<&Outcome, ProvisionError> {
        for &stage in stages {
            if let Err(e) = self.run_stage(stage).await {
                tracing::error!(%stage, error = %e, "Stage failed, aborting remaining stages");
                return Err(e);
            }
        }
        Ok(&self.outcome)
    }

    /// Release the connection. Close errors are logged, not returned, so this
    /// can run on every exit path.
    pub async fn close(self) -> Outcome {
        if let Err(e) = self.conn.close().await {
            tracing::warn!(error = %e, "Error while closing database connection");
        } else {
            tracing::debug!("Database connection closed");
        }
        self.outcome
    }

    fn require_accounts(outcome: &Outcome, stage: Stage) -> Result<DemoAccounts, ProvisionError> {
        outcome.accounts.ok_or(ProvisionError::OutOfOrder {
            stage,
            requires: Stage::SeedUsers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_without_reset_skips_drop() {
        let stages = plan(false);
        assert_eq!(stages.first(), Some(&Stage::CreateEnums));
        assert!(!stages.contains(&Stage::DropSchema));
        assert_eq!(stages.len(), 9);
    }

    #[test]
    fn plan_with_reset_starts_with_drop() {
        let stages = plan(true);
        assert_eq!(stages.first(), Some(&Stage::DropSchema));
        assert_eq!(stages.last(), Some(&Stage::Verify));
        assert_eq!(stages.len(), 10);
    }

    #[test]
    fn plan_is_in_dependency_order() {
        let stages = plan(true);
        assert!(stages.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn stage_names_are_snake_case() {
        assert_eq!(Stage::SeedSampleActivity.to_string(), "seed_sample_activity");
        assert_eq!(Stage::CreateEnums.describe(), "Creating enums");
    }
}
