//! Authentication module.
//!
//! Registration and login for teachers, producing the signed access tokens
//! that every other route requires.

pub mod controller;
pub mod model;
pub mod router;
pub mod service;
