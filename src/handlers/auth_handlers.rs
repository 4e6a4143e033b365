use actix_session::Session;
use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;

use crate::api::{ApiError, SafeTripClient};
use crate::auth::guard::{DASHBOARD_PATH, LOGIN_PATH};
use crate::auth::session::{self, ADMIN_ROLE};
use crate::auth::{csrf, rate_limit::RateLimiter, validate};
use crate::config::AppConfig;
use crate::errors::{AppError, redirect, render};
use crate::templates_structs::LoginTemplate;

pub const NOT_ADMIN: &str = "You are not authorized to access the admin dashboard.";
pub const LOGIN_FAILED: &str = "Login failed. Check credentials or server status.";
pub const TOO_MANY_ATTEMPTS: &str = "Too many failed login attempts. Please try again later.";

#[derive(Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub csrf_token: String,
}

#[derive(Deserialize)]
pub struct CsrfOnly {
    pub csrf_token: String,
}

fn login_form(
    session: &Session,
    config: &AppConfig,
    error: Option<String>,
    email: &str,
) -> Result<HttpResponse, AppError> {
    let tmpl = LoginTemplate {
        error,
        flash: session::take_flash(session),
        email: email.to_string(),
        app_name: config.app_name.clone(),
        csrf_token: csrf::form_token(session),
        dark_mode: session::is_dark_theme(session),
    };
    render(tmpl)
}

pub async fn login_page(
    config: web::Data<AppConfig>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    login_form(&session, &config, None, "")
}

pub async fn login_submit(
    req: HttpRequest,
    config: web::Data<AppConfig>,
    api: web::Data<SafeTripClient>,
    session: Session,
    form: web::Form<LoginForm>,
    limiter: web::Data<RateLimiter>,
) -> Result<HttpResponse, AppError> {
    csrf::verify(&session, &form.csrf_token)?;

    // Rate-limit check BEFORE calling the backend
    let ip = req.peer_addr()
        .map(|addr| addr.ip())
        .unwrap_or_else(|| std::net::IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED));

    if limiter.is_blocked(ip) {
        log::warn!("Login blocked for {ip}: too many failures");
        return login_form(&session, &config, Some(TOO_MANY_ATTEMPTS.to_string()), &form.email);
    }

    let errors = validate::validate_login(&form.email, &form.password);
    if !errors.is_empty() {
        return login_form(&session, &config, Some(errors.join(". ")), &form.email);
    }

    let email = form.email.trim();
    match api.login(email, &form.password).await {
        Ok(login) if login.role == ADMIN_ROLE => {
            limiter.clear(ip);
            session::store_login(&session, &login, email)?;
            log::info!("Admin {email} logged in");
            Ok(redirect(DASHBOARD_PATH))
        }
        Ok(login) => {
            log::warn!("Rejected dashboard login for {email} with role '{}'", login.role);
            login_form(&session, &config, Some(NOT_ADMIN.to_string()), email)
        }
        Err(e) => {
            log::error!("Login for {email} failed: {e}");
            if matches!(e, ApiError::Unauthorized | ApiError::Api { status: 400..=499, .. }) {
                limiter.record_failure(ip);
            }
            login_form(&session, &config, Some(LOGIN_FAILED.to_string()), email)
        }
    }
}

pub async fn logout(
    api: web::Data<SafeTripClient>,
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::verify(&session, &form.csrf_token)?;

    if let Some(token) = session::get_token(&session) {
        if let Err(e) = api.logout(&token).await {
            log::warn!("Logout API call failed but proceeding: {e}");
        }
    }
    session.purge();
    Ok(redirect(LOGIN_PATH))
}
