use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{HttpResponse, cookie::Key, web};

use crate::config::AppConfig;
use crate::errors::{AppError, not_found_page, redirect};
use crate::handlers::{
    auth_handlers, checkin_handlers, dashboard, sos_handlers, theme_handlers, user_handlers,
};

pub fn session_middleware(key: Key, cookie_secure: bool) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .build()
}

async fn not_found(config: web::Data<AppConfig>) -> Result<HttpResponse, AppError> {
    not_found_page(&config.app_name)
}

/// URL table. The route guard and session middleware are wrapped around this by the caller.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        // Static files
        .service(actix_files::Files::new("/static", "./static"))
        // Root redirect
        .route("/", web::get().to(|| async { redirect("/admin") }))
        // Public routes
        .route("/login", web::get().to(auth_handlers::login_page))
        .route("/login", web::post().to(auth_handlers::login_submit))
        .route("/logout", web::post().to(auth_handlers::logout))
        .route("/theme", web::post().to(theme_handlers::toggle))
        // Admin-only routes
        .service(
            web::scope("/admin")
                .route("", web::get().to(dashboard::index))
                // /users/new and /users/export.csv BEFORE /users/{id}
                .route("/users", web::get().to(user_handlers::list))
                .route("/users/new", web::get().to(user_handlers::new_form))
                .route("/users/export.csv", web::get().to(user_handlers::export_csv))
                .route("/users", web::post().to(user_handlers::create))
                .route("/users/{id}/edit", web::get().to(user_handlers::edit_form))
                .route("/users/{id}", web::post().to(user_handlers::update))
                .route("/users/{id}/delete", web::post().to(user_handlers::delete))
                .route("/sos", web::get().to(sos_handlers::list))
                .route("/sos/{id}/resolve", web::post().to(sos_handlers::resolve))
                .route("/checkins", web::get().to(checkin_handlers::list))
                .route("/checkins/{id}/delete", web::post().to(checkin_handlers::delete)),
        )
        // Default 404 handler
        .default_service(web::to(not_found));
}
