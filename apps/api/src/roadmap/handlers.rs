use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::roadmap::generator::generate_roadmap;
use crate::roadmap::models::{CareerProfile, CareerRoadmap};
use crate::state::AppState;

/// POST /api/career-plan
///
/// The provider credential is checked here, per request and before any remote
/// call, so a misconfigured deployment fails with a distinct message instead
/// of a generic generation error.
pub async fn handle_career_plan(
    State(state): State<AppState>,
    Json(profile): Json<CareerProfile>,
) -> Result<Json<CareerRoadmap>, AppError> {
    if state.config.openrouter_api_key.is_none() {
        return Err(AppError::Configuration(
            "OPENROUTER_API_KEY is not set".to_string(),
        ));
    }

    let roadmap = generate_roadmap(state.provider.as_ref(), &profile).await?;
    Ok(Json(roadmap))
}
