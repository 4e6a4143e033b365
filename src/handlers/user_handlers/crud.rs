use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::api::{ApiError, SafeTripClient};
use crate::auth::session::{require_token, set_flash};
use crate::auth::{csrf, validate};
use crate::config::AppConfig;
use crate::errors::{AppError, not_found_page, redirect, render};
use crate::handlers::auth_handlers::CsrfOnly;
use crate::models::user::{self, ROLES, User, UserForm};
use crate::templates_structs::{PageContext, UserFormTemplate};

const USERS_PATH: &str = "/admin/users";

fn form_page(
    session: &Session,
    config: &AppConfig,
    form_action: String,
    form_title: &str,
    user: Option<User>,
    errors: Vec<String>,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(session, config, USERS_PATH);
    let tmpl = UserFormTemplate {
        ctx,
        form_action,
        form_title: form_title.to_string(),
        user,
        roles: ROLES.iter().map(|r| r.to_string()).collect(),
        errors,
    };
    render(tmpl)
}

/// Message shown on the form when the backend refuses a change.
fn backend_message(action: &str, e: &ApiError) -> String {
    match e {
        ApiError::Api { message, .. } if !message.is_empty() => format!("Error {action} user: {message}"),
        _ => format!("Error {action} user. Check server status."),
    }
}

pub async fn new_form(
    config: web::Data<AppConfig>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    form_page(&session, &config, USERS_PATH.to_string(), "Create User", None, vec![])
}

pub async fn create(
    config: web::Data<AppConfig>,
    api: web::Data<SafeTripClient>,
    session: Session,
    form: web::Form<UserForm>,
) -> Result<HttpResponse, AppError> {
    csrf::verify(&session, &form.csrf_token)?;
    let token = require_token(&session)?;

    let errors = validate::validate_user_form(&form, true);
    if !errors.is_empty() {
        return form_page(&session, &config, USERS_PATH.to_string(), "Create User", Some(form.to_user("")), errors);
    }

    let input = form.to_input();
    match api.create_user(&token, &input).await {
        Ok(()) => {
            log::info!("Created user {}", input.email);
            set_flash(&session, "User created successfully");
            Ok(redirect(USERS_PATH))
        }
        Err(e) if e.is_unauthorized() => Err(e.into()),
        Err(e) => {
            log::error!("Creating user {} failed: {e}", input.email);
            let errors = vec![backend_message("creating", &e)];
            form_page(&session, &config, USERS_PATH.to_string(), "Create User", Some(form.to_user("")), errors)
        }
    }
}

pub async fn edit_form(
    config: web::Data<AppConfig>,
    api: web::Data<SafeTripClient>,
    session: Session,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let token = require_token(&session)?;

    let users = api.list_users(&token).await?;
    match user::find_by_id(&users, &id) {
        Some(u) => form_page(&session, &config, format!("{USERS_PATH}/{id}"), "Edit User", Some(u.clone()), vec![]),
        None => not_found_page(&config.app_name),
    }
}

pub async fn update(
    config: web::Data<AppConfig>,
    api: web::Data<SafeTripClient>,
    session: Session,
    path: web::Path<String>,
    form: web::Form<UserForm>,
) -> Result<HttpResponse, AppError> {
    csrf::verify(&session, &form.csrf_token)?;
    let token = require_token(&session)?;
    let id = path.into_inner();
    let form_action = format!("{USERS_PATH}/{id}");

    let errors = validate::validate_user_form(&form, false);
    if !errors.is_empty() {
        return form_page(&session, &config, form_action, "Edit User", Some(form.to_user(&id)), errors);
    }

    let input = form.to_input();
    match api.update_user(&token, &id, &input).await {
        Ok(()) => {
            log::info!("Updated user {id}");
            set_flash(&session, "User updated successfully");
            Ok(redirect(USERS_PATH))
        }
        Err(ApiError::Api { status: 404, .. }) => not_found_page(&config.app_name),
        Err(e) if e.is_unauthorized() => Err(e.into()),
        Err(e) => {
            log::error!("Updating user {id} failed: {e}");
            let errors = vec![backend_message("updating", &e)];
            form_page(&session, &config, form_action, "Edit User", Some(form.to_user(&id)), errors)
        }
    }
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

    match api.delete_user(&token, &id).await {
        Ok(()) => {
            log::info!("Deleted user {id}");
            set_flash(&session, "User deleted");
        }
        Err(e) if e.is_unauthorized() => return Err(e.into()),
        Err(e) => {
            log::error!("Deleting user {id} failed: {e}");
            set_flash(&session, "Could not delete user.");
        }
    }
    Ok(redirect(USERS_PATH))
}
