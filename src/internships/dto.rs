use serde::Deserialize;
use uuid::Uuid;

/// Request body for posting an internship. No uniqueness or validation
/// constraints beyond shape.
#[derive(Debug, Deserialize)]
pub struct CreateInternshipRequest {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub skills_required: Vec<String>,
    pub organization: String,
    pub posted_by: Option<Uuid>,
}
