use askama::Template;

use crate::models::sos::SosAlert;
use super::PageContext;

#[derive(Template)]
#[template(path = "sos/list.html")]
pub struct SosListTemplate {
    pub ctx: PageContext,
    pub alerts: Vec<SosAlert>,
}
