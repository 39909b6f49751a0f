//! `skymentor-setup` -- one-shot SkyMentor database provisioning.
//!
//! Creates the enumerated types, tables, and indexes, seeds demo users,
//! profiles, the progression curriculum, badges, and a sample session, then
//! verifies row counts and prints a summary.
//!
//! # Environment variables
//!
//! | Variable     | Required | Default     |
//! |--------------|----------|-------------|
//! | `PGHOST`     | no       | `localhost` |
//! | `PGPORT`     | no       | `5432`      |
//! | `PGDATABASE` | yes      | --          |
//! | `PGUSER`     | yes      | --          |
//! | `PGPASSWORD` | yes      | --          |
//!
//! # Exit codes
//!
//! `0` on success or when the operator declines `--drop-existing`; `1` on a
//! configuration, connection, or statement failure.

use std::process::ExitCode;

use clap::Parser;
use skymentor_core::config::DbConfig;
use skymentor_setup::cli::{self, SetupArgs};
use skymentor_setup::report;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    let args = SetupArgs::parse();

    dotenvy::dotenv().ok();

    let default_filter = if args.verbose {
        "skymentor_setup=debug,skymentor_db=debug"
    } else {
        "skymentor_setup=info,skymentor_db=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    println!("{}", report::BANNER);
    println!("{}", "=".repeat(40));

    // --- Configuration ---
    let config = match DbConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            eprintln!("✗ Error: {e}");
            eprintln!("Please set these in your .env file or environment.");
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!(?config, "Loaded database configuration");

    // --- Confirmation ---
    if args.drop_existing {
        match cli::confirm_drop(std::io::stdin().lock(), std::io::stderr()) {
            Ok(true) => {}
            Ok(false) => {
                println!("Setup cancelled.");
                return ExitCode::SUCCESS;
            }
            Err(e) => {
                eprintln!("✗ Could not read confirmation: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    // --- Provisioning ---
    match skymentor_setup::provision(&config, args.drop_existing).await {
        Ok(outcome) => {
            print!("{}", report::render_summary(&outcome, &config));
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Provisioning aborted");
            eprintln!("✗ Setup failed: {e}");
            ExitCode::FAILURE
        }
    }
}
