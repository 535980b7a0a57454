//! Wire DTOs shared by the HTTP API.
//!
//! Field names are camelCase on the wire and dates use the `YYYY-MM-DD` format.

pub mod api;
pub mod booking;
pub mod cabin;
pub mod offering;
pub mod user;
