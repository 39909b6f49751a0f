//! `skymentor-setup` library crate.
//!
//! Command-line parsing, the destructive-reset confirmation, and summary
//! rendering live here so they can be tested without a terminal. The binary
//! entrypoint lives in `main.rs`.

pub mod cli;
pub mod report;

use skymentor_core::config::DbConfig;
use skymentor_db::{Outcome, ProvisionError, Provisioner};

/// Connect, run the full plan, and release the connection on every path.
pub async fn provision(config: &DbConfig, drop_existing: bool) -> Result<Outcome, ProvisionError> {
    let conn = skymentor_db::connect(config).await?;
    let mut provisioner = Provisioner::new(conn);

    let result = provisioner
        .run(&skymentor_db::plan(drop_existing))
        .await
        .map(|_| ());
    let outcome = provisioner.close().await;

    result.map(|()| outcome)
}
