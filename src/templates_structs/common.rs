use askama::Template;

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
    pub flash: Option<String>,
    pub email: String,
    pub app_name: String,
    pub csrf_token: String,
    pub dark_mode: bool,
}

#[derive(Template)]
#[template(path = "errors/404.html")]
pub struct NotFoundTemplate {
    pub app_name: String,
}
