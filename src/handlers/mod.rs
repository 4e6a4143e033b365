pub mod auth_handlers;
pub mod checkin_handlers;
pub mod dashboard;
pub mod sos_handlers;
pub mod theme_handlers;
pub mod user_handlers;
