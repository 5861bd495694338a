use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::{BookingId, BookingRequest};
use super::repository::{BookingRepository, BookingStoreError};
use super::service::HostelBookingService;

/// Router exposing fee quotes and bookings.
pub fn hostel_router<R>(service: Arc<HostelBookingService<R>>) -> Router
where
    R: BookingRepository + 'static,
{
    Router::new()
        .route("/api/v1/hostel/quote", post(quote_handler::<R>))
        .route("/api/v1/hostel/bookings", post(book_handler::<R>))
        .route(
            "/api/v1/hostel/bookings/:booking_id",
            get(booking_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn quote_handler<R>(
    State(service): State<Arc<HostelBookingService<R>>>,
    axum::Json(request): axum::Json<BookingRequest>,
) -> Response
where
    R: BookingRepository + 'static,
{
    let quote = service.quote(&request);
    (StatusCode::OK, axum::Json(quote)).into_response()
}

pub(crate) async fn book_handler<R>(
    State(service): State<Arc<HostelBookingService<R>>>,
    axum::Json(request): axum::Json<BookingRequest>,
) -> Response
where
    R: BookingRepository + 'static,
{
    let receipt = service.book(request);
    (StatusCode::CREATED, axum::Json(receipt)).into_response()
}

pub(crate) async fn booking_handler<R>(
    State(service): State<Arc<HostelBookingService<R>>>,
    Path(booking_id): Path<String>,
) -> Response
where
    R: BookingRepository + 'static,
{
    let booking_id = BookingId(booking_id);
    match service.get(&booking_id) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(BookingStoreError::NotFound) => {
            let payload = json!({
                "booking_id": booking_id.0,
                "error": "booking not found",
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
