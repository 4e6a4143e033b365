//! Client for the SafeTrip REST backend.

pub mod error;

pub use error::{ApiError, Result};

use std::time::Duration;

use reqwest::{Response, StatusCode, Url};
use serde::Serialize;
use serde_json::Value;

use crate::models::checkin::Checkin;
use crate::models::collection::{extract_list, unwrap_object};
use crate::models::overview::{COUNTER_KEYS, Overview};
use crate::models::sos::SosAlert;
use crate::models::user::{User, UserInput};

/// Token and role handed back by a successful login.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginData {
    pub token: String,
    pub role: String,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

pub struct SafeTripClient {
    client: reqwest::Client,
    base_url: Url,
}

impl SafeTripClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| ApiError::Config(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::Config(base_url.to_string()));
        }
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Join path segments onto the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Authenticate an administrator. Role checking is left to the caller.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginData> {
        let url = self.endpoint(&["api", "auth", "login"]);
        let resp = self
            .client
            .post(url)
            .json(&LoginRequest { email, password })
            .send()
            .await?;
        let body: Value = check(resp).await?.json().await?;

        let data = body.get("data");
        let field = |name: &str| {
            data.and_then(|d| d.get(name))
                .and_then(Value::as_str)
                .map(str::to_string)
        };
        let token = field("token").filter(|t| !t.is_empty()).ok_or(ApiError::MissingToken)?;
        let role = field("role").unwrap_or_default();
        Ok(LoginData { token, role })
    }

    pub async fn logout(&self, token: &str) -> Result<()> {
        let url = self.endpoint(&["api", "auth", "logout"]);
        let resp = self.client.post(url).bearer_auth(token).send().await?;
        check(resp).await?;
        Ok(())
    }

    pub async fn overview(&self, token: &str) -> Result<Overview> {
        let body = self.get_json(token, &["api", "admin", "overview"]).await?;
        Ok(serde_json::from_value(unwrap_object(body, &COUNTER_KEYS))?)
    }

    pub async fn list_users(&self, token: &str) -> Result<Vec<User>> {
        let body = self.get_json(token, &["api", "admin", "users"]).await?;
        Ok(extract_list(body, "users")?)
    }

    pub async fn list_sos(&self, token: &str) -> Result<Vec<SosAlert>> {
        let body = self.get_json(token, &["api", "admin", "sos"]).await?;
        Ok(extract_list(body, "sos")?)
    }

    pub async fn list_checkins(&self, token: &str) -> Result<Vec<Checkin>> {
        let body = self.get_json(token, &["api", "admin", "checkins"]).await?;
        Ok(extract_list(body, "checkins")?)
    }

    pub async fn create_user(&self, token: &str, input: &UserInput) -> Result<()> {
        let url = self.endpoint(&["api", "admin", "users"]);
        let resp = self.client.post(url).bearer_auth(token).json(input).send().await?;
        check(resp).await?;
        Ok(())
    }

    pub async fn update_user(&self, token: &str, id: &str, input: &UserInput) -> Result<()> {
        let url = self.endpoint(&["api", "admin", "users", id]);
        let resp = self.client.put(url).bearer_auth(token).json(input).send().await?;
        check(resp).await?;
        Ok(())
    }

    pub async fn delete_user(&self, token: &str, id: &str) -> Result<()> {
        let url = self.endpoint(&["api", "admin", "users", id]);
        let resp = self.client.delete(url).bearer_auth(token).send().await?;
        check(resp).await?;
        Ok(())
    }

    pub async fn resolve_sos(&self, token: &str, id: &str) -> Result<()> {
        let url = self.endpoint(&["api", "admin", "sos", id, "resolve"]);
        let resp = self.client.put(url).bearer_auth(token).send().await?;
        check(resp).await?;
        Ok(())
    }

    pub async fn delete_checkin(&self, token: &str, id: &str) -> Result<()> {
        let url = self.endpoint(&["api", "admin", "checkins", id]);
        let resp = self.client.delete(url).bearer_auth(token).send().await?;
        check(resp).await?;
        Ok(())
    }

    async fn get_json(&self, token: &str, segments: &[&str]) -> Result<Value> {
        let url = self.endpoint(segments);
        let resp = self.client.get(url).bearer_auth(token).send().await?;
        Ok(check(resp).await?.json().await?)
    }
}

/// Turn non-2xx responses into errors, keeping the backend's message when it sends one.
async fn check(resp: Response) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(ApiError::Unauthorized);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::Api {
        status: status.as_u16(),
        message: error_message(&body),
    })
}

fn error_message(body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<Value>(body) {
        for key in ["message", "error"] {
            if let Some(msg) = json.get(key).and_then(Value::as_str) {
                return msg.to_string();
            }
        }
    }
    body.chars().take(200).collect()
}
