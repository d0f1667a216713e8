use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool};
use uuid::Uuid;

use crate::internships::model::{Internship, NewInternship};
use crate::users::model::{NewUser, User};

use super::{InternshipStore, UserStore};

/// Postgres-backed store. One pool serves both capability sets.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub async fn connect(database_url: &str) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;
        Ok(Self { pool })
    }

    pub async fn migrate(&self) -> anyhow::Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, role, interests, skills, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, role, interests, skills, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn insert(&self, new: NewUser) -> anyhow::Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password_hash, role, interests, skills)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, email, password_hash, role, interests, skills, created_at
            "#,
        )
        .bind(new.name)
        .bind(new.email)
        .bind(new.password_hash)
        .bind(new.role)
        .bind(new.interests)
        .bind(new.skills)
        .fetch_one(&self.pool)
        .await?;
        Ok(user)
    }

    async fn find_all(&self) -> anyhow::Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, role, interests, skills, created_at
            FROM users
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(users)
    }
}

#[async_trait]
impl InternshipStore for PgStore {
    async fn insert(&self, new: NewInternship) -> anyhow::Result<Internship> {
        let internship = sqlx::query_as::<_, Internship>(
            r#"
            INSERT INTO internships (title, description, skills_required, organization, posted_by)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, description, skills_required, organization, posted_by, created_at
            "#,
        )
        .bind(new.title)
        .bind(new.description)
        .bind(new.skills_required)
        .bind(new.organization)
        .bind(new.posted_by)
        .fetch_one(&self.pool)
        .await?;
        Ok(internship)
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Internship>> {
        let internships = sqlx::query_as::<_, Internship>(
            r#"
            SELECT id, title, description, skills_required, organization, posted_by, created_at
            FROM internships
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(internships)
    }
}
