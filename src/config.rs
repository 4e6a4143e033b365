use std::time::Duration;

use actix_web::cookie::Key;

pub const DEFAULT_API_URL: &str = "https://safetrip-backend-v3.onrender.com";

/// Runtime settings, read from the environment (and `.env` if present).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_url: String,
    pub bind_addr: String,
    pub session_key: Option<String>,
    pub cookie_secure: bool,
    pub app_name: String,
    pub api_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            bind_addr: "127.0.0.1:8080".to_string(),
            session_key: None,
            cookie_secure: false,
            app_name: "SafeTrip Admin".to_string(),
            api_timeout: Duration::from_secs(15),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from an arbitrary variable source; unset or blank values keep defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let api_timeout = match get("API_TIMEOUT_SECS").map(|v| v.parse::<u64>()) {
            Some(Ok(secs)) if secs > 0 => Duration::from_secs(secs),
            Some(_) => {
                log::warn!("Ignoring invalid API_TIMEOUT_SECS");
                defaults.api_timeout
            }
            None => defaults.api_timeout,
        };

        Self {
            api_url: get("API_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_url),
            bind_addr: get("BIND_ADDR").unwrap_or(defaults.bind_addr),
            session_key: get("SESSION_KEY"),
            cookie_secure: get("COOKIE_SECURE")
                .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(defaults.cookie_secure),
            app_name: get("APP_NAME").unwrap_or(defaults.app_name),
            api_timeout,
        }
    }

    /// Cookie signing key. Sessions survive restarts only when SESSION_KEY is long enough.
    pub fn cookie_key(&self) -> Key {
        match &self.session_key {
            Some(val) if val.len() >= 64 => {
                log::info!("Using SESSION_KEY from environment");
                Key::from(val.as_bytes())
            }
            Some(val) => {
                log::warn!("SESSION_KEY too short ({} bytes, need 64+), generating random key", val.len());
                Key::generate()
            }
            None => {
                log::warn!("No SESSION_KEY set, generating random key (sessions lost on restart)");
                Key::generate()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> AppConfig {
        let map: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        AppConfig::from_lookup(|name| map.get(name).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let c = config(&[]);
        assert_eq!(c.api_url, DEFAULT_API_URL);
        assert_eq!(c.bind_addr, "127.0.0.1:8080");
        assert!(!c.cookie_secure);
        assert_eq!(c.api_timeout, Duration::from_secs(15));
    }

    #[test]
    fn api_url_trailing_slash_stripped() {
        let c = config(&[("API_URL", "http://localhost:5000/")]);
        assert_eq!(c.api_url, "http://localhost:5000");
    }

    #[test]
    fn cookie_secure_and_timeout_parsed() {
        let c = config(&[("COOKIE_SECURE", "TRUE"), ("API_TIMEOUT_SECS", "3")]);
        assert!(c.cookie_secure);
        assert_eq!(c.api_timeout, Duration::from_secs(3));
    }

    #[test]
    fn bad_timeout_keeps_default() {
        let c = config(&[("API_TIMEOUT_SECS", "soon")]);
        assert_eq!(c.api_timeout, Duration::from_secs(15));
        let c = config(&[("API_TIMEOUT_SECS", "0")]);
        assert_eq!(c.api_timeout, Duration::from_secs(15));
    }
}
