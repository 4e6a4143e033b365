pub mod checkin;
pub mod collection;
pub mod lenient;
pub mod nav_item;
pub mod overview;
pub mod sos;
pub mod user;
