use actix_session::Session;
use actix_web::{web, HttpResponse};
use chrono::Local;

use crate::api::SafeTripClient;
use crate::auth::session::require_token;
use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::models::user::User;
use crate::templates_structs::{PageContext, UserListTemplate};

pub async fn list(
    config: web::Data<AppConfig>,
    api: web::Data<SafeTripClient>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let token = require_token(&session)?;
    let users = api.list_users(&token).await?;

    let ctx = PageContext::build(&session, &config, "/admin/users");
    render(UserListTemplate { ctx, users })
}

pub async fn export_csv(
    api: web::Data<SafeTripClient>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let token = require_token(&session)?;
    let users = api.list_users(&token).await?;
    log::info!("Exporting {} users as CSV", users.len());

    let today = Local::now().format("%Y-%m-%d");
    Ok(HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"safetrip-users-{today}.csv\""),
        ))
        .body(users_csv(&users)))
}

fn escape_csv(s: &str) -> String {
    if s.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

fn users_csv(users: &[User]) -> String {
    let mut csv = String::from("id,name,email,role\n");
    for u in users {
        csv.push_str(&format!(
            "{},{},{},{}\n",
            escape_csv(&u.id),
            escape_csv(&u.name),
            escape_csv(&u.email),
            escape_csv(&u.role),
        ));
    }
    csv
}
