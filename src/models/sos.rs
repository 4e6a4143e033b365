use serde::Deserialize;

use super::lenient::{display_string, display_time, prefer};

/// An SOS alert raised by a traveller.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "SosRecord")]
pub struct SosAlert {
    pub id: String,
    pub user: String,
    pub location: String,
    pub time: String,
    pub status: String,
}

#[derive(Deserialize)]
struct SosRecord {
    #[serde(default, deserialize_with = "display_string")]
    id: String,
    #[serde(default, rename = "_id", deserialize_with = "display_string")]
    object_id: String,
    #[serde(default, deserialize_with = "display_string")]
    user: String,
    #[serde(default, deserialize_with = "display_string")]
    location: String,
    #[serde(default, deserialize_with = "display_string")]
    time: String,
    #[serde(default, rename = "createdAt", deserialize_with = "display_string")]
    created_at: String,
    #[serde(default, deserialize_with = "display_string")]
    status: String,
}

impl From<SosRecord> for SosAlert {
    fn from(r: SosRecord) -> Self {
        SosAlert {
            id: prefer(r.id, r.object_id),
            user: r.user,
            location: r.location,
            time: prefer(r.time, r.created_at),
            status: r.status,
        }
    }
}

impl SosAlert {
    pub fn time_display(&self) -> String {
        display_time(&self.time)
    }

    pub fn is_resolved(&self) -> bool {
        self.status.eq_ignore_ascii_case("resolved")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn populated_user_and_coordinates() {
        let alert: SosAlert = serde_json::from_value(json!({
            "_id": "a1",
            "user": {"name": "Ada", "email": "ada@example.com"},
            "location": {"lat": 6.45, "lng": 3.39},
            "createdAt": "2024-05-02T08:30:00Z",
            "status": "Resolved"
        }))
        .unwrap();
        assert_eq!(alert.user, "Ada");
        assert_eq!(alert.location, "6.45, 3.39");
        assert_eq!(alert.time_display(), "2024-05-02 08:30");
        assert!(alert.is_resolved());
    }

    #[test]
    fn both_time_fields_prefer_time() {
        let alert: SosAlert = serde_json::from_value(json!({
            "_id": "a1",
            "id": "a1",
            "time": "2024-05-02T08:30:00Z",
            "createdAt": "2024-05-01T00:00:00Z"
        }))
        .unwrap();
        assert_eq!(alert.id, "a1");
        assert_eq!(alert.time_display(), "2024-05-02 08:30");
    }

    #[test]
    fn pending_alert() {
        let alert: SosAlert =
            serde_json::from_value(json!({"id": 3, "status": "pending"})).unwrap();
        assert_eq!(alert.id, "3");
        assert!(!alert.is_resolved());
    }
}
