//! Shared utilities used throughout the application:
//!
//! - [`errors`]: Application error taxonomy and the HTTP boundary translator
//! - [`jwt`]: Access token issuance and verification
//! - [`pagination`]: Page parameters and the paged response envelope
//! - [`password`]: Password hashing and verification

pub mod errors;
pub mod jwt;
pub mod pagination;
pub mod password;
