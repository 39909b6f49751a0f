//! Read-only post-seed verification.

use skymentor_core::catalog;
use skymentor_core::labels::Category;
use sqlx::PgConnection;

use crate::error::{DuringStage, ProvisionError};
use crate::provisioner::Stage;
use crate::schema::TABLES;

/// Tables the seed stages are expected to populate.
pub const SEEDED_TABLES: &[&str] = &[
    "users",
    "mentors",
    "mentees",
    "availability",
    "session_blocks",
    "attendance_requests",
    "preferences",
    "assignments",
    "progression_steps",
    "badges",
    "audit_events",
];

/// Row counts gathered after seeding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerificationReport {
    /// Every table, in creation order.
    pub table_counts: Vec<(&'static str, i64)>,
    /// Progression steps per category, in label order.
    pub category_counts: Vec<(Category, i64)>,
}

impl VerificationReport {
    pub fn count(&self, table: &str) -> Option<i64> {
        self.table_counts
            .iter()
            .find(|(name, _)| *name == table)
            .map(|(_, n)| *n)
    }

    pub fn category_count(&self, category: Category) -> i64 {
        self.category_counts
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }

    /// Seeded tables that unexpectedly hold no rows.
    pub fn empty_seeded_tables(&self) -> Vec<&'static str> {
        self.table_counts
            .iter()
            .filter(|(name, count)| *count == 0 && SEEDED_TABLES.contains(name))
            .map(|(name, _)| *name)
            .collect()
    }

    /// Categories whose step count differs from the catalog, as
    /// `(category, expected, actual)`.
    pub fn curriculum_mismatches(&self) -> Vec<(Category, i64, i64)> {
        Category::ALL
            .into_iter()
            .filter_map(|category| {
                let expected = catalog::steps_in(category) as i64;
                let actual = self.category_count(category);
                (expected != actual).then_some((category, expected, actual))
            })
            .collect()
    }

    pub fn is_consistent(&self) -> bool {
        self.empty_seeded_tables().is_empty() && self.curriculum_mismatches().is_empty()
    }
}

/// Count rows in every table and progression steps per category.
///
/// Never writes. Unexpected volumes are logged as warnings, not errors.
pub async fn verify(conn: &mut PgConnection) -> Result<VerificationReport, ProvisionError> {
    let mut report = VerificationReport::default();

    for table in TABLES {
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table.name))
            .fetch_one(&mut *conn)
            .await
            .during(Stage::Verify)?;
        tracing::debug!(table = table.name, count, "Row count");
        report.table_counts.push((table.name, count));
    }

    let rows: Vec<(String, i64)> = sqlx::query_as(
        "SELECT category::text, COUNT(*)
         FROM progression_steps
         GROUP BY category
         ORDER BY category",
    )
    .fetch_all(&mut *conn)
    .await
    .during(Stage::Verify)?;

    report.category_counts = Category::ALL
        .into_iter()
        .map(|category| {
            let count = rows
                .iter()
                .find(|(label, _)| label == category.as_str())
                .map(|(_, n)| *n)
                .unwrap_or(0);
            (category, count)
        })
        .collect();

    for table in report.empty_seeded_tables() {
        tracing::warn!(table, "Seeded table is empty");
    }
    for (category, expected, actual) in report.curriculum_mismatches() {
        tracing::warn!(%category, expected, actual, "Unexpected progression step count");
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_with(
        counts: &[(&'static str, i64)],
        categories: &[(Category, i64)],
    ) -> VerificationReport {
        VerificationReport {
            table_counts: counts.to_vec(),
            category_counts: categories.to_vec(),
        }
    }

    fn full_curriculum() -> Vec<(Category, i64)> {
        Category::ALL
            .into_iter()
            .map(|c| (c, catalog::steps_in(c) as i64))
            .collect()
    }

    #[test]
    fn unseeded_tables_may_be_empty() {
        let report = report_with(
            &[("users", 3), ("jump_logs", 0), ("awards", 0)],
            &full_curriculum(),
        );
        assert!(report.empty_seeded_tables().is_empty());
        assert!(report.is_consistent());
    }

    #[test]
    fn empty_seeded_table_is_flagged() {
        let report = report_with(&[("users", 3), ("badges", 0)], &full_curriculum());
        assert_eq!(report.empty_seeded_tables(), vec!["badges"]);
        assert!(!report.is_consistent());
    }

    #[test]
    fn curriculum_mismatch_is_flagged() {
        let mut categories = full_curriculum();
        categories[2].1 = 9;
        let report = report_with(&[("users", 3)], &categories);
        assert_eq!(report.curriculum_mismatches(), vec![(Category::FourWay, 10, 9)]);
    }

    #[test]
    fn lookups_by_name() {
        let report = report_with(&[("users", 3)], &[(Category::Canopy, 3)]);
        assert_eq!(report.count("users"), Some(3));
        assert_eq!(report.count("nope"), None);
        assert_eq!(report.category_count(Category::Canopy), 3);
        assert_eq!(report.category_count(Category::Safety), 0);
    }
}
