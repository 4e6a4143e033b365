use actix_session::Session;
use actix_web::{web, HttpRequest, HttpResponse};

use crate::auth::csrf;
use crate::auth::guard::DASHBOARD_PATH;
use crate::auth::session::toggle_theme;
use crate::errors::{AppError, redirect};
use crate::handlers::auth_handlers::CsrfOnly;

/// Local path of the referring page, if it is one of ours.
fn back_path(req: &HttpRequest) -> Option<String> {
    let referer = req.headers().get("Referer")?.to_str().ok()?;
    let host = req.connection_info().host().to_string();

    let path = match referer.split_once("://") {
        Some((_, rest)) => {
            let (ref_host, path) = rest.split_at(rest.find('/').unwrap_or(rest.len()));
            if ref_host != host {
                return None;
            }
            path
        }
        None => referer,
    };
    if path.starts_with('/') && !path.starts_with("//") {
        Some(path.to_string())
    } else {
        None
    }
}

pub async fn toggle(
    req: HttpRequest,
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::verify(&session, &form.csrf_token)?;
    let theme = toggle_theme(&session);
    log::debug!("Theme switched to {theme}");
    let back = back_path(&req).unwrap_or_else(|| DASHBOARD_PATH.to_string());
    Ok(redirect(&back))
}
