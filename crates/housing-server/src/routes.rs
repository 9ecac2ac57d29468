//! Route definitions for the model tenancy resource.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use housing_core::error::HousingError;
use housing_core::models::tenancy::Tenancy;
use tracing::{info, instrument};

use crate::error::ApiError;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/model-tenancy", post(generate_document))
        .route("/model-tenancy/template", get(model_tenancy_template))
        .with_state(state)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

/// Blank tenancy structure for the form front end.
#[instrument(skip_all)]
async fn model_tenancy_template(
    State(state): State<AppState>,
) -> Result<Json<Tenancy>, ApiError> {
    let tenancy = state.template_loader.load_template()?;
    Ok(Json(tenancy))
}

/// Validate a submitted tenancy and return the generated agreement as an
/// attachment.
#[instrument(skip_all)]
async fn generate_document(
    State(state): State<AppState>,
    payload: Result<Json<Tenancy>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(tenancy) =
        payload.map_err(|rejection| HousingError::MalformedRequest(rejection.body_text()))?;
    state.validator.validate(&tenancy)?;
    let document = state.generator.generate(&tenancy)?;

    info!(filename = %document.filename, "Returning model tenancy document");

    let disposition = format!("attachment; filename=\"{}\"", document.filename);
    Ok((
        [
            (header::CONTENT_TYPE, document.content_type.to_owned()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        document.bytes,
    ))
}
