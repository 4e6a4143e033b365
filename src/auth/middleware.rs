use actix_session::SessionExt;
use actix_web::{
    Error,
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    middleware::Next,
};

use super::guard::{self, Access, SessionState};
use super::session;
use crate::errors::{AppError, redirect};

pub const SESSION_EXPIRED: &str = "Session expired. Please log in again.";

/// Apply the route guard before the handler runs, and log the admin out
/// if the backend rejects their token while it does.
pub async fn route_guard(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let session = req.get_session();
    let state = SessionState {
        token: session::get_token(&session),
        role: session::get_role(&session),
    };

    match guard::check(req.path(), &state) {
        Access::Allow => {}
        Access::RedirectToLogin => {
            log::warn!("Blocked {} {}", req.method(), req.path());
            session::set_flash(&session, guard::ACCESS_DENIED);
            let response = redirect(guard::LOGIN_PATH);
            return Ok(req.into_response(response).map_into_right_body());
        }
        Access::RedirectToDashboard => {
            let response = redirect(guard::DASHBOARD_PATH);
            return Ok(req.into_response(response).map_into_right_body());
        }
    }

    let res = next.call(req).await?;

    let expired = res
        .response()
        .error()
        .and_then(|e| e.as_error::<AppError>())
        .is_some_and(AppError::is_session_expired);
    if expired {
        let (http_req, _) = res.into_parts();
        log::info!("Backend rejected session token on {}", http_req.path());
        session::expire(&http_req.get_session(), SESSION_EXPIRED);
        let response = redirect(guard::LOGIN_PATH);
        return Ok(ServiceResponse::new(http_req, response).map_into_right_body());
    }

    Ok(res.map_into_left_body())
}
