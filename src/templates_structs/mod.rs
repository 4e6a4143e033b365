//! Template context structures for askama templates, organized by screen.

use actix_session::Session;

use crate::auth::csrf;
use crate::auth::session::{get_admin_email, is_dark_theme, take_flash};
use crate::config::AppConfig;
use crate::models::nav_item::{self, NavModule};

mod common;
mod dashboard;
mod checkin;
mod sos;
mod user;

pub use self::common::{LoginTemplate, NotFoundTemplate};
pub use self::dashboard::DashboardTemplate;
pub use self::checkin::CheckinListTemplate;
pub use self::sos::SosListTemplate;
pub use self::user::{UserListTemplate, UserFormTemplate};

/// Common context shared by all authenticated pages.
/// Templates access these as `ctx.admin_email`, `ctx.nav_modules`, etc.
pub struct PageContext {
    pub admin_email: String,
    pub avatar_initial: String,
    pub flash: Option<String>,
    pub nav_modules: Vec<NavModule>,
    pub app_name: String,
    pub csrf_token: String,
    pub dark_mode: bool,
    pub current_path: String,
}

impl PageContext {
    pub fn build(session: &Session, config: &AppConfig, current_path: &str) -> Self {
        let admin_email = get_admin_email(session);
        let avatar_initial = admin_email
            .chars()
            .next()
            .unwrap_or('?')
            .to_uppercase()
            .to_string();
        Self {
            avatar_initial,
            admin_email,
            flash: take_flash(session),
            nav_modules: nav_item::find_navigation(current_path),
            app_name: config.app_name.clone(),
            csrf_token: csrf::form_token(session),
            dark_mode: is_dark_theme(session),
            current_path: current_path.to_string(),
        }
    }
}

/// Per-section outcome for pages that keep rendering when one fetch fails.
pub enum Section<T> {
    Loaded(Vec<T>),
    Failed(String),
}

impl<T> Section<T> {
    pub fn count(&self) -> usize {
        match self {
            Section::Loaded(items) => items.len(),
            Section::Failed(_) => 0,
        }
    }
}
