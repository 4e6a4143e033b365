use serde::{Deserialize, Serialize};

use super::lenient::{display_string, prefer};

/// Roles the backend accepts for an account.
pub const ROLES: [&str; 2] = ["user", "admin"];

/// A SafeTrip account as listed by the admin API.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "UserRecord")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

/// Wire shape of a user. The id may come as `id`, `_id` or both.
#[derive(Deserialize)]
struct UserRecord {
    #[serde(default, deserialize_with = "display_string")]
    id: String,
    #[serde(default, rename = "_id", deserialize_with = "display_string")]
    object_id: String,
    #[serde(default, deserialize_with = "display_string")]
    name: String,
    #[serde(default, deserialize_with = "display_string")]
    email: String,
    #[serde(default, deserialize_with = "display_string")]
    role: String,
}

impl From<UserRecord> for User {
    fn from(r: UserRecord) -> Self {
        User {
            id: prefer(r.id, r.object_id),
            name: r.name,
            email: r.email,
            role: r.role,
        }
    }
}

/// Body sent when creating or updating a user.
#[derive(Debug, Clone, Serialize)]
pub struct UserInput {
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Form data from the create/edit user forms.
#[derive(Debug, Deserialize)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub password: String,
    pub csrf_token: String,
}

impl UserForm {
    /// Text fields are trimmed; the password is sent exactly as typed, or not at all when blank.
    pub fn to_input(&self) -> UserInput {
        let password = (!self.password.trim().is_empty()).then(|| self.password.clone());
        UserInput {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            role: self.role.trim().to_string(),
            password,
        }
    }

    /// Values to re-populate the form with after a failed submission.
    pub fn to_user(&self, id: &str) -> User {
        User {
            id: id.to_string(),
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role.clone(),
        }
    }
}

/// Find a user by id in an already fetched list.
pub fn find_by_id<'a>(users: &'a [User], id: &str) -> Option<&'a User> {
    users.iter().find(|u| u.id == id)
}
