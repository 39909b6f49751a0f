//! `skymentor-core` -- database-free building blocks for the SkyMentor
//! provisioning tool.
//!
//! Holds the closed label sets backing the PostgreSQL enumerated types,
//! the connection configuration, demo credential derivation, and the
//! static seed catalog (demo accounts, curriculum, badges).

pub mod catalog;
pub mod config;
pub mod credentials;
pub mod error;
pub mod labels;
pub mod types;
