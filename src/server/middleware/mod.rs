//! Request-scoped authentication helpers.
//!
//! `session` wraps tower-sessions with typed accessors, and `auth` resolves the session
//! user and checks permissions before a controller does any work.

pub mod auth;
pub mod session;
