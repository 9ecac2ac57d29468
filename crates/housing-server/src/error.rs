//! HTTP error responses and server start-up errors.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use housing_core::error::HousingError;
use housing_forms::FormsError;
use serde_json::json;
use tracing::{error, warn};

/// Wraps a [`HousingError`] so it can be returned from handlers.
#[derive(Debug)]
pub struct ApiError(pub HousingError);

impl From<HousingError> for ApiError {
    fn from(err: HousingError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            HousingError::Validation { violations } => {
                let details: Vec<_> = violations
                    .iter()
                    .map(|v| json!({ "field": v.field, "message": v.message }))
                    .collect();
                problem(
                    StatusCode::BAD_REQUEST,
                    "Validation Errors",
                    &violations
                        .iter()
                        .map(|v| v.message.as_str())
                        .collect::<Vec<_>>()
                        .join(".\n"),
                    Some(details),
                )
            }
            HousingError::TemplateLoad(reason) => {
                error!(%reason, "Template load failed");
                problem(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Model Tenancy Service Error",
                    "Failed to load model tenancy template",
                    None,
                )
            }
            HousingError::DocumentGeneration(reason) => {
                error!(%reason, "Document generation failed");
                problem(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Model Tenancy Service Error",
                    "Failed to generate model tenancy document",
                    None,
                )
            }
            HousingError::MalformedRequest(reason) => {
                warn!(%reason, "Rejected malformed request body");
                problem(StatusCode::BAD_REQUEST, "Malformed Request", &reason, None)
            }
        }
    }
}

fn problem(
    status: StatusCode,
    title: &str,
    detail: &str,
    violations: Option<Vec<serde_json::Value>>,
) -> Response {
    let mut body = json!({
        "type": format!("https://httpstatuses.com/{}", status.as_u16()),
        "title": title,
        "detail": detail,
        "status": status.as_u16(),
    });
    if let Some(violations) = violations {
        body["violations"] = serde_json::Value::Array(violations);
    }
    (status, Json(body)).into_response()
}

/// Failures while starting the server.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    Forms(#[from] FormsError),

    #[error("invalid log filter: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
