use serde::Deserialize;

use super::lenient::optional_display;

/// JSON keys of the counters, used to tell a flat body from a `data` envelope.
pub const COUNTER_KEYS: [&str; 3] = ["totalUsers", "totalSOS", "totalCheckins"];

/// Dashboard counters. Any of them may be absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Overview {
    #[serde(default, rename = "totalUsers", deserialize_with = "optional_display")]
    pub total_users: Option<String>,
    #[serde(default, rename = "totalSOS", deserialize_with = "optional_display")]
    pub total_sos: Option<String>,
    #[serde(default, rename = "totalCheckins", deserialize_with = "optional_display")]
    pub total_checkins: Option<String>,
}

impl Overview {
    pub fn users_label(&self) -> &str {
        self.total_users.as_deref().unwrap_or("-")
    }

    pub fn sos_label(&self) -> &str {
        self.total_sos.as_deref().unwrap_or("-")
    }

    pub fn checkins_label(&self) -> &str {
        self.total_checkins.as_deref().unwrap_or("-")
    }
}
