pub mod csrf;
pub mod guard;
pub mod middleware;
pub mod rate_limit;
pub mod session;
pub mod validate;
