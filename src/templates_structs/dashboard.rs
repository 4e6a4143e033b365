use askama::Template;

use crate::models::checkin::Checkin;
use crate::models::overview::Overview;
use crate::models::sos::SosAlert;
use crate::models::user::User;
use super::{PageContext, Section};

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub ctx: PageContext,
    pub greeting: String,
    pub overview: Overview,
    pub users: Section<User>,
    pub sos_alerts: Section<SosAlert>,
    pub checkins: Section<Checkin>,
}
