//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation. Factories take
//! any SeaORM connection, so they also work inside a transaction.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::create_user(&db).await?;
//!     let cabin = factory::create_cabin(&db).await?;
//!
//!     let booking = factory::booking::BookingFactory::new(&db, user.id, cabin.id)
//!         .check_in(factory::helpers::date(2024, 1, 1))
//!         .check_out(factory::helpers::date(2024, 1, 5))
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod booking;
pub mod cabin;
pub mod helpers;
pub mod offering;
pub mod user;

pub use booking::create_booking;
pub use cabin::create_cabin;
pub use offering::create_offering;
pub use user::create_user;
