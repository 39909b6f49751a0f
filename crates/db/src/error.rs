use skymentor_core::error::CoreError;

use crate::provisioner::Stage;

/// Failure of a provisioning run. Nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum ProvisionError {
    /// Transport or authentication failure while opening the session.
    #[error("Error connecting to database at {address}: {source}")]
    Connect {
        address: String,
        #[source]
        source: sqlx::Error,
    },

    /// A DDL or DML statement failed; later stages were not attempted.
    #[error("Stage '{stage}' failed: {source}")]
    Statement {
        stage: Stage,
        #[source]
        source: sqlx::Error,
    },

    #[error(transparent)]
    Core(#[from] CoreError),

    /// A catalog value could not be encoded as a JSON column value.
    #[error("Failed to encode JSON column value: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A seed stage was invoked before the stage that produces its inputs.
    #[error("Stage '{stage}' requires '{requires}' to have run first")]
    OutOfOrder { stage: Stage, requires: Stage },
}

impl ProvisionError {
    /// The database error behind this failure, if any.
    pub fn database_error(&self) -> Option<&sqlx::Error> {
        match self {
            Self::Connect { source, .. } | Self::Statement { source, .. } => Some(source),
            _ => None,
        }
    }

    /// PostgreSQL SQLSTATE code of the underlying statement error, if any.
    pub fn sqlstate(&self) -> Option<String> {
        match self.database_error()? {
            sqlx::Error::Database(db) => db.code().map(|c| c.into_owned()),
            _ => None,
        }
    }
}

/// Attach the running stage to a raw sqlx result.
pub(crate) trait DuringStage<T> {
    fn during(self, stage: Stage) -> Result<T, ProvisionError>;
}

impl<T> DuringStage<T> for Result<T, sqlx::Error> {
    fn during(self, stage: Stage) -> Result<T, ProvisionError> {
        self.map_err(|source| ProvisionError::Statement { stage, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn json_encoding_failure_is_a_serialization_error() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ProvisionError::from(source);

        assert_matches!(err, ProvisionError::Serialization(_));
        assert!(err.to_string().starts_with("Failed to encode JSON column value"));
        assert!(err.database_error().is_none());
        assert_eq!(err.sqlstate(), None);
    }

    #[test]
    fn statement_error_carries_its_stage() {
        let err = Err::<(), _>(sqlx::Error::RowNotFound)
            .during(Stage::SeedBadges)
            .unwrap_err();

        assert_matches!(err, ProvisionError::Statement { stage: Stage::SeedBadges, .. });
        assert!(err.to_string().starts_with("Stage 'seed_badges' failed"));
        assert!(err.database_error().is_some());
    }
}
