use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::users::model::{Role, User};

/// Request body for user registration. Role defaults to `student`,
/// interests and skills to empty.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response returned after registration.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: PublicUser,
}

/// Response returned after login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    pub user: PublicUser,
}

/// Public projection of a user. The only user shape that may leave the
/// system boundary; credential material is dropped by construction.
#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl From<User> for PublicUser {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
            role: u.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;

    #[test]
    fn public_user_drops_credentials() {
        let user = User {
            id: Uuid::new_v4(),
            name: "A".into(),
            email: "a@x.com".into(),
            password_hash: "secret-hash".into(),
            role: Role::Mentor,
            interests: vec!["ml".into()],
            skills: vec!["rust".into()],
            created_at: OffsetDateTime::now_utc(),
        };
        let public = PublicUser::from(user);
        let json = serde_json::to_value(&public).unwrap();
        assert!(json.get("password").is_none());
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["role"], "mentor");
        assert_eq!(json["email"], "a@x.com");
    }

    #[test]
    fn register_request_defaults() {
        let req: RegisterRequest =
            serde_json::from_str(r#"{"name":"A","email":"a@x.com","password":"p"}"#).unwrap();
        assert_eq!(req.role, Role::Student);
        assert!(req.interests.is_empty());
        assert!(req.skills.is_empty());
    }
}
