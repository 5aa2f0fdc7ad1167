//! Configuration for the Teacher Portal API.
//!
//! Each submodule owns one concern, loaded from environment variables at
//! startup (after `dotenvy` has populated the process environment).
//!
//! # Modules
//!
//! - [`database`]: PostgreSQL connection pool initialization
//! - [`jwt`]: Token signing secret, issuer, and audience
//! - [`rate_limit`]: Throttling knobs for the auth endpoints

pub mod database;
pub mod jwt;
pub mod rate_limit;
