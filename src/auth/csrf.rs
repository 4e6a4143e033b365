//! Per-session form tokens. Every POST form renders `form_token` in a hidden
//! `csrf_token` field and its handler calls `verify` before touching the backend.

use actix_session::Session;

use crate::errors::AppError;

const SESSION_KEY: &str = "csrf_token";
const TOKEN_BYTES: usize = 32;

/// Token for the forms on the page being rendered. Created on first use.
pub fn form_token(session: &Session) -> String {
    match session.get::<String>(SESSION_KEY) {
        Ok(Some(token)) => token,
        _ => {
            let token = hex::encode(rand::random::<[u8; TOKEN_BYTES]>());
            if let Err(e) = session.insert(SESSION_KEY, &token) {
                log::warn!("Could not store CSRF token: {e}");
            }
            token
        }
    }
}

/// Reject the submission unless it echoes the session's token.
pub fn verify(session: &Session, submitted: &str) -> Result<(), AppError> {
    match session.get::<String>(SESSION_KEY) {
        Ok(Some(expected)) if same_bytes(expected.as_bytes(), submitted.as_bytes()) => Ok(()),
        _ => {
            log::warn!("Rejected form post with a bad CSRF token");
            Err(AppError::Csrf)
        }
    }
}

/// Length-checked comparison that looks at every byte.
fn same_bytes(a: &[u8], b: &[u8]) -> bool {
    if a.is_empty() || a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b) {
        diff |= x ^ y;
    }
    diff == 0
}
