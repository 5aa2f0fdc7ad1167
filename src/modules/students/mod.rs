//! Student roster module.
//!
//! Students belong to exactly one teacher. Listing, creation, and deletion
//! are scoped to the authenticated owner; a paginated, searchable view
//! backs the roster screen.

pub mod controller;
pub mod model;
pub mod router;
pub mod service;
