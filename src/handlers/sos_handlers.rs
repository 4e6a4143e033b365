use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::api::SafeTripClient;
use crate::auth::csrf;
use crate::auth::session::{require_token, set_flash};
use crate::config::AppConfig;
use crate::errors::{AppError, redirect, render};
use crate::handlers::auth_handlers::CsrfOnly;
use crate::templates_structs::{PageContext, SosListTemplate};

const SOS_PATH: &str = "/admin/sos";

pub async fn list(
    config: web::Data<AppConfig>,
    api: web::Data<SafeTripClient>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let token = require_token(&session)?;
    let alerts = api.list_sos(&token).await?;

    let ctx = PageContext::build(&session, &config, SOS_PATH);
    render(SosListTemplate { ctx, alerts })
}

pub async fn resolve(
    api: web::Data<SafeTripClient>,
    session: Session,
    path: web::Path<String>,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::verify(&session, &form.csrf_token)?;
    let token = require_token(&session)?;
    let id = path.into_inner();

    match api.resolve_sos(&token, &id).await {
        Ok(()) => {
            log::info!("Resolved SOS alert {id}");
            set_flash(&session, "SOS alert resolved");
        }
        Err(e) if e.is_unauthorized() => return Err(e.into()),
        Err(e) => {
            log::error!("Resolving SOS alert {id} failed: {e}");
            set_flash(&session, "Could not resolve SOS alert.");
        }
    }
    Ok(redirect(SOS_PATH))
}
