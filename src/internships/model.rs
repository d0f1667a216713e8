use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Internship posting. Carries no sensitive fields, so the stored record
/// is also the wire shape.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Internship {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub skills_required: Vec<String>,
    pub organization: String,
    pub posted_by: Option<Uuid>,
    pub created_at: OffsetDateTime,
}

/// Fields for an internship insert; the store assigns id and created_at.
#[derive(Debug, Clone)]
pub struct NewInternship {
    pub title: String,
    pub description: String,
    pub skills_required: Vec<String>,
    pub organization: String,
    pub posted_by: Option<Uuid>,
}
