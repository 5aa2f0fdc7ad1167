//! Teacher directory module.
//!
//! Read-only views over registered teachers: the shared directory with live
//! student counts, and the caller's own profile. Account creation lives in
//! the auth module.

pub mod controller;
pub mod model;
pub mod router;
pub mod service;
