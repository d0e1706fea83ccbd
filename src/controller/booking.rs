use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    model::{api::Envelope, booking::BookingRequest},
    service::booking::BookingService,
    state::AppState,
};

/// Tag for grouping booking endpoints in OpenAPI documentation
pub static BOOKING_TAG: &str = "booking";

/// Submit a meeting booking request.
///
/// Sends a notification to the configured admin address and a localized
/// confirmation to the requester. Public.
///
/// # Returns
/// - `200 OK` - Notifications handed to the mailer
/// - `422 Unprocessable Entity` - Missing name or invalid email
/// - `500 Internal Server Error` - Delivery failure
#[utoipa::path(
    post,
    path = "/api/bookings/{lang}",
    tag = BOOKING_TAG,
    params(
        ("lang" = String, Path, description = "Locale for subjects and bodies")
    ),
    request_body = BookingRequest,
    responses(
        (status = 200, description = "Booking request accepted", body = Envelope),
        (status = 422, description = "Missing name or invalid email", body = Envelope),
        (status = 500, description = "Internal server error", body = Envelope)
    ),
)]
pub async fn submit_booking(
    State(state): State<AppState>,
    Path(lang): Path<String>,
    Json(request): Json<BookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    BookingService::new(state.mailer.as_ref(), &state.admin_email)
        .notify(&lang, request.into_detail())?;

    Ok((
        StatusCode::OK,
        Json(Envelope::message("Booking request received.")),
    ))
}
