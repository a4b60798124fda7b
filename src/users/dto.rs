use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::repo_types::{User, UserPatch};

/// Account details supplied on creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    #[serde(default)]
    pub role: i32, // 0 unspecified, 1 user, 2 admin
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRequest {
    pub info: UserInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateResponse {
    pub id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetRequest {
    pub id: i64,
}

/// Full user record as returned to callers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GetResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option", default)]
    pub updated_at: Option<OffsetDateTime>,
}

impl From<User> for GetResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
            role: u.role,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}

/// Absent (or null) fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateRequest {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl UpdateRequest {
    pub fn into_parts(self) -> (i64, UserPatch) {
        (
            self.id,
            UserPatch {
                name: self.name,
                email: self.email,
            },
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteRequest {
    pub id: i64,
}

/// Empty acknowledgement.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Empty {}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn never_updated_user_serializes_null_updated_at() {
        let resp = GetResponse {
            id: 42,
            name: "Alice".into(),
            email: "a@x.com".into(),
            role: 1,
            created_at: datetime!(2024-01-01 10:00 UTC),
            updated_at: None,
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["created_at"], "2024-01-01T10:00:00Z");
        assert!(json["updated_at"].is_null());
    }

    #[test]
    fn update_request_distinguishes_absent_fields() {
        let req: UpdateRequest = serde_json::from_str(r#"{"id": 9, "name": "Alicia"}"#).unwrap();
        let (id, patch) = req.into_parts();
        assert_eq!(id, 9);
        assert_eq!(patch.name.as_deref(), Some("Alicia"));
        assert!(patch.email.is_none());

        // an explicitly empty string is a present value
        let req: UpdateRequest = serde_json::from_str(r#"{"id": 9, "email": ""}"#).unwrap();
        assert_eq!(req.email.as_deref(), Some(""));
    }

    #[test]
    fn role_defaults_to_unspecified() {
        let info: UserInfo = serde_json::from_str(
            r#"{"name":"n","email":"e","password":"p","password_confirm":"p"}"#,
        )
        .unwrap();
        assert_eq!(info.role, 0);
    }
}
