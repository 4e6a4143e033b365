//! Route guard: who may see which page, decided from the session alone.

use super::session::ADMIN_ROLE;

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/admin";
pub const ACCESS_DENIED: &str = "Access denied. Admins only.";

/// What the session holds that matters for routing.
#[derive(Debug, Default, Clone)]
pub struct SessionState {
    pub token: Option<String>,
    pub role: Option<String>,
}

impl SessionState {
    pub fn is_admin(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
            && self.role.as_deref() == Some(ADMIN_ROLE)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Access {
    Allow,
    RedirectToLogin,
    RedirectToDashboard,
}

pub fn is_admin_path(path: &str) -> bool {
    path == DASHBOARD_PATH || path.starts_with("/admin/")
}

pub fn check(path: &str, state: &SessionState) -> Access {
    if is_admin_path(path) && !state.is_admin() {
        return Access::RedirectToLogin;
    }
    if path == LOGIN_PATH && state.is_admin() {
        return Access::RedirectToDashboard;
    }
    Access::Allow
}
