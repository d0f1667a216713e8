use async_trait::async_trait;
use time::OffsetDateTime;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::internships::model::{Internship, NewInternship};
use crate::users::model::{NewUser, User};

use super::{InternshipStore, UserStore};

/// In-memory store for tests and offline development. Enumeration follows
/// insertion order; duplicate emails are rejected at insert, mirroring the
/// unique constraint of the Postgres backend.
#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<Vec<User>>,
    internships: RwLock<Vec<Internship>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn insert(&self, new: NewUser) -> anyhow::Result<User> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.email == new.email) {
            anyhow::bail!("duplicate key value violates unique constraint on email");
        }
        let user = User {
            id: Uuid::new_v4(),
            name: new.name,
            email: new.email,
            password_hash: new.password_hash,
            role: new.role,
            interests: new.interests,
            skills: new.skills,
            created_at: OffsetDateTime::now_utc(),
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_all(&self) -> anyhow::Result<Vec<User>> {
        Ok(self.users.read().await.clone())
    }
}

#[async_trait]
impl InternshipStore for MemoryStore {
    async fn insert(&self, new: NewInternship) -> anyhow::Result<Internship> {
        let internship = Internship {
            id: Uuid::new_v4(),
            title: new.title,
            description: new.description,
            skills_required: new.skills_required,
            organization: new.organization,
            posted_by: new.posted_by,
            created_at: OffsetDateTime::now_utc(),
        };
        self.internships.write().await.push(internship.clone());
        Ok(internship)
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Internship>> {
        Ok(self.internships.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::model::Role;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            name: "Test".into(),
            email: email.into(),
            password_hash: "hash".into(),
            role: Role::Student,
            interests: vec![],
            skills: vec![],
        }
    }

    #[tokio::test]
    async fn insert_then_find_by_email() {
        let store = MemoryStore::new();
        let created = UserStore::insert(&store, new_user("a@x.com"))
            .await
            .expect("insert");
        let found = store.find_by_email("a@x.com").await.expect("find");
        assert_eq!(found.expect("some").id, created.id);
        assert!(store.find_by_email("b@x.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let store = MemoryStore::new();
        UserStore::insert(&store, new_user("a@x.com"))
            .await
            .expect("first insert");
        let err = UserStore::insert(&store, new_user("a@x.com"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("unique constraint"));
        assert_eq!(UserStore::find_all(&store).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn enumeration_follows_insertion_order() {
        let store = MemoryStore::new();
        for email in ["a@x.com", "b@x.com", "c@x.com"] {
            UserStore::insert(&store, new_user(email)).await.expect("insert");
        }
        let all = UserStore::find_all(&store).await.unwrap();
        let emails: Vec<_> = all.iter().map(|u| u.email.as_str()).collect();
        assert_eq!(emails, vec!["a@x.com", "b@x.com", "c@x.com"]);
    }

    #[tokio::test]
    async fn internship_insert_and_list() {
        let store = MemoryStore::new();
        let created = InternshipStore::insert(
            &store,
            NewInternship {
                title: "Backend intern".into(),
                description: "Rust services".into(),
                skills_required: vec!["rust".into()],
                organization: "Acme".into(),
                posted_by: None,
            },
        )
        .await
        .expect("insert");
        let all = InternshipStore::find_all(&store).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, created.id);
        assert_eq!(all[0].title, "Backend intern");
    }
}
