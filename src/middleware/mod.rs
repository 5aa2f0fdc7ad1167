//! Extractors for handling cross-cutting request concerns.
//!
//! # Authentication Flow
//!
//! 1. Client sends a request with an `Authorization: Bearer <token>` header
//! 2. The [`auth::AuthUser`] extractor verifies the token and exposes its
//!    claims to the handler
//! 3. Ownership of the data being touched is enforced in the services,
//!    scoped by the caller's teacher id
//!
//! ```ignore
//! use crate::middleware::auth::AuthUser;
//!
//! async fn my_students(auth_user: AuthUser) -> impl IntoResponse {
//!     let teacher_id = auth_user.teacher_id()?;
//!     // ...
//! }
//! ```

pub mod auth;
