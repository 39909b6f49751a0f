//! Human-readable run summary.

use std::fmt::Write;

use skymentor_core::catalog::{DEMO_PASSWORD, DEMO_USERS};
use skymentor_core::config::DbConfig;
use skymentor_db::verify::VerificationReport;
use skymentor_db::Outcome;

pub const BANNER: &str = "🚀 SkyMentor Database Setup";

/// Row counts per table followed by the per-category curriculum breakdown.
pub fn render_verification(report: &VerificationReport) -> String {
    let mut out = String::new();
    let width = report
        .table_counts
        .iter()
        .map(|(name, _)| name.len())
        .max()
        .unwrap_or(0);

    for (table, count) in &report.table_counts {
        let _ = writeln!(out, "  {table:<width$}  {count} records");
    }

    let _ = writeln!(out, "\nProgression breakdown:");
    for (category, count) in &report.category_counts {
        let _ = writeln!(out, "  {:<6}  {count} skills", category.as_str());
    }

    let empty = report.empty_seeded_tables();
    if !empty.is_empty() {
        let _ = writeln!(out, "\n⚠️  Empty after seeding: {}", empty.join(", "));
    }
    for (category, expected, actual) in report.curriculum_mismatches() {
        let _ = writeln!(
            out,
            "⚠️  {category}: expected {expected} steps, found {actual}"
        );
    }
    out
}

/// Final success summary including the demo logins and target database.
pub fn render_summary(outcome: &Outcome, config: &DbConfig) -> String {
    let mut out = String::new();

    if let Some(report) = &outcome.report {
        out.push_str(&render_verification(report));
    }

    let _ = writeln!(out, "\n🎉 Database setup completed successfully!");
    let _ = writeln!(out, "\nTest accounts created:");
    for user in DEMO_USERS {
        let _ = writeln!(
            out,
            "  {:<7} {} / {DEMO_PASSWORD}",
            format!("{}:", capitalize(user.role.as_str())),
            user.email
        );
    }
    let _ = writeln!(out, "\nDatabase: {}", config.database);
    let _ = writeln!(out, "Host: {}", config.address());
    out
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
