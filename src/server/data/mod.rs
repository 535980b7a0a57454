//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to keep the data layer separate from business logic.
//!
//! Every repository is generic over `ConnectionTrait`, so the same code runs against the
//! connection pool or inside a transaction opened by the service layer.

pub mod booking;
pub mod cabin;
pub mod offering;
pub mod user;

#[cfg(test)]
mod test;
