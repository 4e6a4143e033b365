use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::api::SafeTripClient;
use crate::auth::csrf;
use crate::auth::session::{require_token, set_flash};
use crate::config::AppConfig;
use crate::errors::{AppError, redirect, render};
use crate::handlers::auth_handlers::CsrfOnly;
use crate::templates_structs::{CheckinListTemplate, PageContext};

const CHECKINS_PATH: &str = "/admin/checkins";

pub async fn list(
    config: web::Data<AppConfig>,
    api: web::Data<SafeTripClient>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let token = require_token(&session)?;
    let checkins = api.list_checkins(&token).await?;

    let ctx = PageContext::build(&session, &config, CHECKINS_PATH);
    render(CheckinListTemplate { ctx, checkins })
}

pub async fn delete(
    api: web::Data<SafeTripClient>,
    session: Session,
    path: web::Path<String>,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::verify(&session, &form.csrf_token)?;
    let token = require_token(&session)?;
    let id = path.into_inner();

    match api.delete_checkin(&token, &id).await {
        Ok(()) => {
            log::info!("Deleted check-in {id}");
            set_flash(&session, "Check-in deleted");
        }
        Err(e) if e.is_unauthorized() => return Err(e.into()),
        Err(e) => {
            log::error!("Deleting check-in {id} failed: {e}");
            set_flash(&session, "Could not delete check-in.");
        }
    }
    Ok(redirect(CHECKINS_PATH))
}
