//! Shared test infrastructure: an in-process fake SafeTrip backend and helpers for
//! driving the dashboard through `actix_web::test`.
//!
//! # Fake backend
//! - `FakeBackend::start()` - real HTTP server on an ephemeral port, seeded with sample data
//! - `backend.state()` - lock the recorded requests and knobs (`fail_sos`, `reject_token`, ...)
//!
//! # App helpers (macros, because the test service type cannot be named)
//! - `init_app!(url)` - the full app: guard, session, routes
//! - `send!(app, jar, request)` - call the app, carrying the session cookie in `jar`
//! - `login!(app, jar)` - log in as the seeded admin

#![allow(dead_code, unused_macros)]

use std::sync::{Arc, Mutex, MutexGuard};

use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use regex::Regex;
use serde_json::{Value, json};

// ============================================================================
// TEST CONSTANTS
// ============================================================================

pub const TOKEN: &str = "tok-123";
pub const ADMIN_EMAIL: &str = "ada@safetrip.test";
pub const ADMIN_PASS: &str = "correct-horse";

/// Session cookie carried between requests.
pub type Jar = Option<actix_web::cookie::Cookie<'static>>;

// ============================================================================
// FAKE BACKEND
// ============================================================================

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub auth: Option<String>,
    pub body: Value,
}

pub struct BackendState {
    pub users: Vec<Value>,
    pub sos: Vec<Value>,
    pub checkins: Vec<Value>,
    pub overview: Value,
    pub login_role: String,
    pub fail_sos: bool,
    pub reject_token: bool,
    pub requests: Vec<Recorded>,
}

impl BackendState {
    fn seeded() -> Self {
        Self {
            users: vec![
                json!({"_id": "u1", "name": "Ada Obi", "email": ADMIN_EMAIL, "role": "admin"}),
                json!({"_id": "u2", "name": "<script>alert(1)</script>", "email": "mal@safetrip.test", "role": "user"}),
            ],
            sos: vec![json!({
                "id": 1,
                "user": {"name": "Ada Obi"},
                "location": {"lat": 6.5, "lng": 3.4},
                "time": "2024-05-02T08:30:00Z",
                "status": "pending"
            })],
            checkins: vec![json!({
                "_id": "c1", "user": "Bo Mensah", "location": "Accra", "date": "2024-05-01", "notes": "arrived safely"
            })],
            overview: json!({"totalUsers": 2, "totalSOS": 1, "totalCheckins": 1}),
            login_role: "admin".to_string(),
            fail_sos: false,
            reject_token: false,
            requests: vec![],
        }
    }

    /// Requests matching a method and path, in arrival order.
    pub fn calls(&self, method: &str, path: &str) -> Vec<Recorded> {
        self.requests
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .cloned()
            .collect()
    }
}

pub struct FakeBackend {
    pub url: String,
    state: Arc<Mutex<BackendState>>,
}

impl FakeBackend {
    pub async fn start() -> Self {
        let state = Arc::new(Mutex::new(BackendState::seeded()));
        let data = web::Data::from(state.clone());

        let server = HttpServer::new(move || {
            App::new()
                .app_data(data.clone())
                .default_service(web::to(handle))
        })
        .workers(1)
        .disable_signals()
        .bind(("127.0.0.1", 0))
        .expect("Failed to bind fake backend");

        let addr = server.addrs()[0];
        actix_web::rt::spawn(server.run());

        Self {
            url: format!("http://{addr}"),
            state,
        }
    }

    pub fn state(&self) -> MutexGuard<'_, BackendState> {
        self.state.lock().expect("Fake backend state poisoned")
    }
}

fn id_of(v: &Value) -> String {
    v.get("_id")
        .or_else(|| v.get("id"))
        .map(|id| match id {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .unwrap_or_default()
}

async fn handle(
    req: HttpRequest,
    body: web::Bytes,
    state: web::Data<Mutex<BackendState>>,
) -> HttpResponse {
    let mut s = state.lock().expect("Fake backend state poisoned");

    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let auth = req
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    let body: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    s.requests.push(Recorded {
        method: method.clone(),
        path: path.clone(),
        auth: auth.clone(),
        body: body.clone(),
    });

    let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();
    match (method.as_str(), segments.as_slice()) {
        ("POST", ["api", "auth", "login"]) => {
            if body["email"] == ADMIN_EMAIL && body["password"] == ADMIN_PASS {
                HttpResponse::Ok().json(json!({
                    "success": true,
                    "data": {"token": TOKEN, "role": s.login_role}
                }))
            } else {
                HttpResponse::Unauthorized().json(json!({"message": "Invalid credentials"}))
            }
        }
        ("POST", ["api", "auth", "logout"]) => HttpResponse::Ok().json(json!({"success": true})),
        _ if s.reject_token || auth.as_deref() != Some(format!("Bearer {TOKEN}").as_str()) => {
            HttpResponse::Unauthorized().json(json!({"message": "Token expired"}))
        }
        ("GET", ["api", "admin", "overview"]) => HttpResponse::Ok().json(s.overview.clone()),
        ("GET", ["api", "admin", "users"]) => HttpResponse::Ok().json(json!({"users": s.users})),
        ("GET", ["api", "admin", "sos"]) => {
            if s.fail_sos {
                HttpResponse::InternalServerError().json(json!({"message": "sos store down"}))
            } else {
                HttpResponse::Ok().json(s.sos.clone())
            }
        }
        ("GET", ["api", "admin", "checkins"]) => {
            HttpResponse::Ok().json(json!({"data": {"checkins": s.checkins}}))
        }
        ("POST", ["api", "admin", "users"]) => {
            if s.users.iter().any(|u| u["email"] == body["email"]) {
                return HttpResponse::Conflict().json(json!({"message": "Email already registered"}));
            }
            let mut user = body.clone();
            user["_id"] = json!(format!("u{}", s.users.len() + 1));
            s.users.push(user);
            HttpResponse::Created().json(json!({"success": true}))
        }
        ("PUT", ["api", "admin", "users", id]) => {
            let id = id.to_string();
            match s.users.iter_mut().find(|u| id_of(u) == id) {
                Some(user) => {
                    for key in ["name", "email", "role"] {
                        user[key] = body[key].clone();
                    }
                    HttpResponse::Ok().json(json!({"success": true}))
                }
                None => HttpResponse::NotFound().json(json!({"message": "User not found"})),
            }
        }
        ("DELETE", ["api", "admin", "users", id]) => {
            let id = id.to_string();
            s.users.retain(|u| id_of(u) != id);
            HttpResponse::Ok().json(json!({"success": true}))
        }
        ("PUT", ["api", "admin", "sos", id, "resolve"]) => {
            let id = id.to_string();
            match s.sos.iter_mut().find(|a| id_of(a) == id) {
                Some(alert) => {
                    alert["status"] = json!("resolved");
                    HttpResponse::Ok().json(json!({"success": true}))
                }
                None => HttpResponse::NotFound().json(json!({"message": "Alert not found"})),
            }
        }
        ("DELETE", ["api", "admin", "checkins", id]) => {
            let id = id.to_string();
            s.checkins.retain(|c| id_of(c) != id);
            HttpResponse::NoContent().finish()
        }
        _ => HttpResponse::NotFound().json(json!({"message": "No such route"})),
    }
}

// ============================================================================
// APP HELPERS
// ============================================================================

/// Pull the CSRF token out of a rendered page.
pub fn csrf_from(html: &str) -> String {
    let re = Regex::new(r#"name="csrf_token" value="([0-9a-f]{64})""#).expect("valid regex");
    re.captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .expect("No CSRF token in page")
}

macro_rules! init_app {
    ($api_url:expr) => {{
        let config = safetrip_admin::config::AppConfig {
            api_url: $api_url.to_string(),
            ..Default::default()
        };
        let api = safetrip_admin::api::SafeTripClient::new(&config.api_url, config.api_timeout)
            .expect("Failed to build API client");
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(actix_web::middleware::from_fn(
                    safetrip_admin::auth::middleware::route_guard,
                ))
                .wrap(safetrip_admin::routes::session_middleware(
                    actix_web::cookie::Key::generate(),
                    false,
                ))
                .app_data(actix_web::web::Data::new(config))
                .app_data(actix_web::web::Data::new(api))
                .app_data(actix_web::web::Data::new(
                    safetrip_admin::auth::rate_limit::RateLimiter::new(),
                ))
                .configure(safetrip_admin::routes::configure),
        )
        .await
    }};
}

/// Call the app with the session cookie from `$jar`, then store any refreshed cookie back.
macro_rules! send {
    ($app:expr, $jar:expr, $req:expr) => {{
        let mut req = $req;
        if let Some(cookie) = &$jar {
            req = req.cookie(cookie.clone());
        }
        let resp = actix_web::test::call_service(&$app, req.to_request()).await;
        if let Some(cookie) = resp.response().cookies().find(|c| c.name() == "id") {
            $jar = Some(cookie.into_owned());
        }
        resp
    }};
}

macro_rules! body_of {
    ($resp:expr) => {{
        let bytes = actix_web::test::read_body($resp).await;
        String::from_utf8(bytes.to_vec()).expect("Body is not UTF-8")
    }};
}

macro_rules! location_of {
    ($resp:expr) => {
        $resp
            .headers()
            .get("Location")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    };
}

/// GET a page and return its CSRF token.
macro_rules! csrf_token {
    ($app:expr, $jar:expr, $path:expr) => {{
        let resp = send!($app, $jar, actix_web::test::TestRequest::get().uri($path));
        let html = body_of!(resp);
        common::csrf_from(&html)
    }};
}

/// Submit the login form; returns the response.
macro_rules! submit_login {
    ($app:expr, $jar:expr, $email:expr, $password:expr) => {{
        let csrf = csrf_token!($app, $jar, "/login");
        send!(
            $app,
            $jar,
            actix_web::test::TestRequest::post()
                .uri("/login")
                .set_form([("email", $email), ("password", $password), ("csrf_token", csrf.as_str())])
        )
    }};
}

/// Log in as the seeded admin and assert the redirect to the dashboard.
macro_rules! login {
    ($app:expr, $jar:expr) => {{
        let resp = submit_login!($app, $jar, common::ADMIN_EMAIL, common::ADMIN_PASS);
        assert_eq!(resp.status(), actix_web::http::StatusCode::SEE_OTHER);
        assert_eq!(location_of!(resp), "/admin");
    }};
}
