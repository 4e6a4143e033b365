use actix_session::Session;
use actix_web::{web, HttpResponse};
use chrono::{Local, Timelike};

use crate::api::{ApiError, SafeTripClient};
use crate::auth::session::require_token;
use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::models::overview::Overview;
use crate::templates_structs::{DashboardTemplate, PageContext, Section};

fn time_greeting(name: &str, hour: u32) -> String {
    let period = match hour {
        5..=11 => "Good morning",
        12..=16 => "Good afternoon",
        _ => "Good evening",
    };
    if name.is_empty() {
        period.to_string()
    } else {
        format!("{}, {}", period, name)
    }
}

/// A failed collection becomes an inline message, unless the token was refused.
pub(crate) fn section<T>(result: Result<Vec<T>, ApiError>, failure: &str) -> Result<Section<T>, AppError> {
    match result {
        Ok(items) => Ok(Section::Loaded(items)),
        Err(e) if e.is_unauthorized() => Err(e.into()),
        Err(e) => {
            log::error!("{failure} {e}");
            Ok(Section::Failed(failure.to_string()))
        }
    }
}

pub async fn index(
    config: web::Data<AppConfig>,
    api: web::Data<SafeTripClient>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let token = require_token(&session)?;

    let (overview, users, sos_alerts, checkins) = tokio::join!(
        api.overview(&token),
        api.list_users(&token),
        api.list_sos(&token),
        api.list_checkins(&token),
    );

    let overview = match overview {
        Ok(o) => o,
        Err(e) if e.is_unauthorized() => return Err(e.into()),
        Err(e) => {
            log::error!("Could not load overview: {e}");
            Overview::default()
        }
    };
    let users = section(users, "Could not load users.")?;
    let sos_alerts = section(sos_alerts, "Could not load SOS alerts.")?;
    let checkins = section(checkins, "Could not load check-ins.")?;

    let ctx = PageContext::build(&session, &config, "/admin");
    let name = ctx.admin_email.split('@').next().unwrap_or_default().to_string();
    let greeting = time_greeting(&name, Local::now().hour());

    let tmpl = DashboardTemplate {
        ctx,
        greeting,
        overview,
        users,
        sos_alerts,
        checkins,
    };
    render(tmpl)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_by_hour() {
        assert_eq!(time_greeting("ada", 8), "Good morning, ada");
        assert_eq!(time_greeting("ada", 13), "Good afternoon, ada");
        assert_eq!(time_greeting("ada", 23), "Good evening, ada");
        assert_eq!(time_greeting("", 3), "Good evening");
    }

    #[test]
    fn failed_section_keeps_page_alive() {
        let s = section::<u8>(Err(ApiError::Network("down".into())), "Could not load users.").unwrap();
        assert!(matches!(s, Section::Failed(ref m) if m == "Could not load users."));
    }

    #[test]
    fn unauthorized_section_propagates() {
        let err = section::<u8>(Err(ApiError::Unauthorized), "x").err().unwrap();
        assert!(err.is_session_expired());
    }
}
