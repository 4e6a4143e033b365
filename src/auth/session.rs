use actix_session::Session;

use crate::api::LoginData;
use crate::errors::AppError;

pub const TOKEN_KEY: &str = "auth_token";
pub const ROLE_KEY: &str = "user_role";
pub const EMAIL_KEY: &str = "admin_email";
pub const FLASH_KEY: &str = "flash";
pub const THEME_KEY: &str = "theme";

/// The only role allowed into the dashboard.
pub const ADMIN_ROLE: &str = "admin";

pub fn get_token(session: &Session) -> Option<String> {
    session.get::<String>(TOKEN_KEY).unwrap_or(None)
}

pub fn get_role(session: &Session) -> Option<String> {
    session.get::<String>(ROLE_KEY).unwrap_or(None)
}

pub fn get_admin_email(session: &Session) -> String {
    session.get::<String>(EMAIL_KEY).unwrap_or(None).unwrap_or_default()
}

/// Bearer token for backend calls. Missing only if the guard was bypassed.
pub fn require_token(session: &Session) -> Result<String, AppError> {
    get_token(session).ok_or(AppError::Unauthenticated)
}

/// Persist a successful admin login.
pub fn store_login(session: &Session, login: &LoginData, email: &str) -> Result<(), AppError> {
    session.renew();
    session
        .insert(TOKEN_KEY, &login.token)
        .and_then(|_| session.insert(ROLE_KEY, &login.role))
        .and_then(|_| session.insert(EMAIL_KEY, email))
        .map_err(|e| AppError::Session(format!("Failed to store login: {e}")))
}

pub fn set_flash(session: &Session, message: &str) {
    let _ = session.insert(FLASH_KEY, message);
}

pub fn take_flash(session: &Session) -> Option<String> {
    let flash = session.get::<String>(FLASH_KEY).unwrap_or(None);
    if flash.is_some() {
        session.remove(FLASH_KEY);
    }
    flash
}

pub fn is_dark_theme(session: &Session) -> bool {
    session.get::<String>(THEME_KEY).unwrap_or(None).as_deref() == Some("dark")
}

/// Flip between dark and light; returns the new theme name.
pub fn toggle_theme(session: &Session) -> &'static str {
    let next = if is_dark_theme(session) { "light" } else { "dark" };
    let _ = session.insert(THEME_KEY, next);
    next
}

/// Drop login state but keep the theme, leaving a message for the login page.
pub fn expire(session: &Session, message: &str) {
    let dark = is_dark_theme(session);
    session.clear();
    if dark {
        let _ = session.insert(THEME_KEY, "dark");
    }
    set_flash(session, message);
}
