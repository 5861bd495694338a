use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::{RollNumber, StudentProfile};
use super::repository::{EligibilityStore, StoreError};
use super::service::EligibilityService;

/// Router exposing eligibility evaluation and lookup.
pub fn eligibility_router<S>(service: Arc<EligibilityService<S>>) -> Router
where
    S: EligibilityStore + 'static,
{
    Router::new()
        .route("/api/v1/placement/eligibility", post(evaluate_handler::<S>))
        .route(
            "/api/v1/placement/eligibility/:roll_no",
            get(status_handler::<S>),
        )
        .with_state(service)
}

pub(crate) async fn evaluate_handler<S>(
    State(service): State<Arc<EligibilityService<S>>>,
    axum::Json(profile): axum::Json<StudentProfile>,
) -> Response
where
    S: EligibilityStore + 'static,
{
    let outcome = service.evaluate(&profile);
    (StatusCode::OK, axum::Json(outcome)).into_response()
}

pub(crate) async fn status_handler<S>(
    State(service): State<Arc<EligibilityService<S>>>,
    Path(roll_no): Path<String>,
) -> Response
where
    S: EligibilityStore + 'static,
{
    let roll_no = RollNumber(roll_no);
    match service.get(&roll_no) {
        Ok(record) => (StatusCode::OK, axum::Json(record.status_view())).into_response(),
        Err(StoreError::NotFound) => {
            let payload = json!({
                "roll_no": roll_no.0,
                "error": "no eligibility decision recorded",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
