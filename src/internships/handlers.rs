use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{info, instrument};

use crate::{
    error::ApiError,
    internships::{
        dto::CreateInternshipRequest,
        model::{Internship, NewInternship},
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/internships", get(list_internships).post(create_internship))
}

#[instrument(skip(state))]
pub async fn list_internships(
    State(state): State<AppState>,
) -> Result<Json<Vec<Internship>>, ApiError> {
    let internships = state.internships.find_all().await?;
    Ok(Json(internships))
}

#[instrument(skip(state, payload))]
pub async fn create_internship(
    State(state): State<AppState>,
    Json(payload): Json<CreateInternshipRequest>,
) -> Result<(StatusCode, Json<Internship>), ApiError> {
    let internship = state
        .internships
        .insert(NewInternship {
            title: payload.title,
            description: payload.description,
            skills_required: payload.skills_required,
            organization: payload.organization,
            posted_by: payload.posted_by,
        })
        .await?;

    info!(internship_id = %internship.id, organization = %internship.organization, "internship posted");
    Ok((StatusCode::CREATED, Json(internship)))
}
