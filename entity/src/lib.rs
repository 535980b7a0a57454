pub mod prelude;

pub mod booking;
pub mod booking_offering;
pub mod cabin;
pub mod offering;
pub mod user;
