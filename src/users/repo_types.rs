use sqlx::FromRow;
use time::OffsetDateTime;

use crate::error::ServiceError;

/// Closed set of account roles. The numeric values are the wire encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Unspecified = 0,
    User = 1,
    Admin = 2,
}

impl Role {
    /// Textual code stored in the `users.role` column.
    pub fn code(self) -> &'static str {
        match self {
            Role::Unspecified => "unspecified",
            Role::User => "user",
            Role::Admin => "admin",
        }
    }

    pub fn from_code(code: &str) -> Option<Role> {
        match code {
            "unspecified" => Some(Role::Unspecified),
            "user" => Some(Role::User),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

impl TryFrom<i32> for Role {
    type Error = ServiceError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Role::Unspecified),
            1 => Ok(Role::User),
            2 => Ok(Role::Admin),
            other => Err(ServiceError::InvalidRole(other.to_string())),
        }
    }
}

impl From<Role> for i32 {
    fn from(role: Role) -> Self {
        role as i32
    }
}

/// A stored user account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: i32, // wire value; the in-memory backend keeps it unvalidated
    pub created_at: OffsetDateTime,
    pub updated_at: Option<OffsetDateTime>, // None until the first update
}

/// Sparse update: only `Some` fields are written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UserPatch {
    /// Applies the supplied fields and stamps `updated_at`, never moving it backwards.
    pub fn apply(self, user: &mut User, now: OffsetDateTime) {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        let floor = user.updated_at.unwrap_or(user.created_at);
        user.updated_at = Some(now.max(floor));
    }
}

/// Row shape of the `users` table.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub created_at: OffsetDateTime,
    pub updated_at: Option<OffsetDateTime>,
}

impl TryFrom<UserRow> for User {
    type Error = ServiceError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let role = Role::from_code(&row.role).ok_or(ServiceError::InvalidRole(row.role))?;
        Ok(User {
            id: row.id,
            name: row.name,
            email: row.email,
            role: role.into(),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn alice() -> User {
        User {
            id: 42,
            name: "Alice".into(),
            email: "a@x.com".into(),
            role: Role::User.into(),
            created_at: datetime!(2024-01-01 10:00 UTC),
            updated_at: None,
        }
    }

    #[test]
    fn role_codes_match_wire_values() {
        for role in [Role::Unspecified, Role::User, Role::Admin] {
            assert_eq!(Role::from_code(role.code()), Some(role));
            assert_eq!(Role::try_from(i32::from(role)).unwrap(), role);
        }
        assert!(Role::from_code("root").is_none());
        assert!(matches!(Role::try_from(9), Err(ServiceError::InvalidRole(v)) if v == "9"));
    }

    #[test]
    fn patch_touches_only_present_fields() {
        let mut user = alice();
        let now = datetime!(2024-01-01 11:00 UTC);
        UserPatch {
            name: Some("Alicia".into()),
            email: None,
        }
        .apply(&mut user, now);

        assert_eq!(user.name, "Alicia");
        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.updated_at, Some(now));
    }

    #[test]
    fn empty_patch_still_stamps_updated_at() {
        let mut user = alice();
        let now = datetime!(2024-01-02 00:00 UTC);
        UserPatch::default().apply(&mut user, now);
        assert_eq!(user.name, "Alice");
        assert_eq!(user.updated_at, Some(now));
    }

    #[test]
    fn updated_at_never_moves_backwards() {
        let mut user = alice();
        user.updated_at = Some(datetime!(2024-03-01 00:00 UTC));
        UserPatch::default().apply(&mut user, datetime!(2024-02-01 00:00 UTC));
        assert_eq!(user.updated_at, Some(datetime!(2024-03-01 00:00 UTC)));
    }

    #[test]
    fn row_with_unknown_role_code_is_rejected() {
        let row = UserRow {
            id: 1,
            name: "n".into(),
            email: "e".into(),
            role: "superuser".into(),
            created_at: datetime!(2024-01-01 0:00 UTC),
            updated_at: None,
        };
        let err = User::try_from(row).unwrap_err();
        assert_eq!(err.to_string(), "invalid role value: superuser");
    }
}
