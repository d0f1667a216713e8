use async_trait::async_trait;
use uuid::Uuid;

use crate::internships::model::{Internship, NewInternship};
use crate::users::model::{NewUser, User};

pub mod memory;
pub mod pg;

pub use memory::MemoryStore;
pub use pg::PgStore;

/// Capability set over user records. Any concrete backend implements this;
/// handlers never see the storage engine.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>>;
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<User>>;
    /// Insert a new user. Fails if the email is already taken; a unique
    /// constraint in the backend is the backstop for concurrent
    /// check-then-insert registrations.
    async fn insert(&self, new: NewUser) -> anyhow::Result<User>;
    async fn find_all(&self) -> anyhow::Result<Vec<User>>;
}

/// Capability set over internship postings.
#[async_trait]
pub trait InternshipStore: Send + Sync {
    async fn insert(&self, new: NewInternship) -> anyhow::Result<Internship>;
    async fn find_all(&self) -> anyhow::Result<Vec<Internship>>;
}
