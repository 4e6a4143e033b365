use askama::Template;

use crate::models::checkin::Checkin;
use super::PageContext;

#[derive(Template)]
#[template(path = "checkins/list.html")]
pub struct CheckinListTemplate {
    pub ctx: PageContext,
    pub checkins: Vec<Checkin>,
}
