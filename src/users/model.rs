use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Account role. New accounts default to `student`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Mentor,
    Organization,
    Admin,
}

/// User record as stored. The password hash is never serialized; the
/// [`PublicUser`](crate::users::dto::PublicUser) projection is the only
/// user shape allowed across the HTTP boundary.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: Role,
    pub interests: Vec<String>,
    pub skills: Vec<String>,
    pub created_at: OffsetDateTime,
}

/// Fields for a user insert; the store assigns id and created_at.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub interests: Vec<String>,
    pub skills: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_defaults_to_student() {
        assert_eq!(Role::default(), Role::Student);
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Student).unwrap(), "\"student\"");
        assert_eq!(
            serde_json::to_string(&Role::Organization).unwrap(),
            "\"organization\""
        );
    }

    #[test]
    fn password_hash_is_never_serialized() {
        let user = User {
            id: Uuid::new_v4(),
            name: "A".into(),
            email: "a@x.com".into(),
            password_hash: "argon2-hash".into(),
            role: Role::Student,
            interests: vec![],
            skills: vec![],
            created_at: OffsetDateTime::now_utc(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("password"));
        assert!(!json.contains("argon2-hash"));
    }
}
