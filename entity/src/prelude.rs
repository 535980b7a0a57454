pub use super::booking::Entity as Booking;
pub use super::booking_offering::Entity as BookingOffering;
pub use super::cabin::Entity as Cabin;
pub use super::offering::Entity as Offering;
pub use super::user::Entity as User;
