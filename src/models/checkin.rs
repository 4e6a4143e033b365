use serde::Deserialize;

use super::lenient::{display_string, display_time, optional_display, prefer};

/// A traveller check-in.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "CheckinRecord")]
pub struct Checkin {
    pub id: String,
    pub user: String,
    pub location: String,
    pub date: String,
    pub notes: Option<String>,
}

#[derive(Deserialize)]
struct CheckinRecord {
    #[serde(default, deserialize_with = "display_string")]
    id: String,
    #[serde(default, rename = "_id", deserialize_with = "display_string")]
    object_id: String,
    #[serde(default, deserialize_with = "display_string")]
    user: String,
    #[serde(default, deserialize_with = "display_string")]
    location: String,
    #[serde(default, deserialize_with = "display_string")]
    date: String,
    #[serde(default, rename = "createdAt", deserialize_with = "display_string")]
    created_at: String,
    #[serde(default, deserialize_with = "optional_display")]
    notes: Option<String>,
}

impl From<CheckinRecord> for Checkin {
    fn from(r: CheckinRecord) -> Self {
        Checkin {
            id: prefer(r.id, r.object_id),
            user: r.user,
            location: r.location,
            date: prefer(r.date, r.created_at),
            notes: r.notes,
        }
    }
}

impl Checkin {
    pub fn date_display(&self) -> String {
        display_time(&self.date)
    }

    pub fn notes_display(&self) -> &str {
        self.notes.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_notes_render_empty() {
        let c: Checkin = serde_json::from_value(json!({
            "id": "c9", "user": "Bo", "location": "Accra", "date": "2024-01-01", "notes": null
        }))
        .unwrap();
        assert!(c.notes.is_none());
        assert_eq!(c.notes_display(), "");
        assert_eq!(c.date_display(), "2024-01-01");
    }

    #[test]
    fn created_at_fills_missing_date() {
        let c: Checkin = serde_json::from_value(json!({
            "_id": "c1", "id": "c1", "date": null, "createdAt": "2024-05-01T09:15:00Z"
        }))
        .unwrap();
        assert_eq!(c.id, "c1");
        assert_eq!(c.date_display(), "2024-05-01 09:15");

        let c: Checkin =
            serde_json::from_value(json!({"date": "2024-05-02", "createdAt": "2024-05-01"})).unwrap();
        assert_eq!(c.date, "2024-05-02");
    }

    #[test]
    fn notes_kept() {
        let c: Checkin = serde_json::from_value(json!({"notes": "safe at hotel"})).unwrap();
        assert_eq!(c.notes_display(), "safe at hotel");
    }
}
