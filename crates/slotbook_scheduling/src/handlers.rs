// File: crates/slotbook_scheduling/src/handlers.rs
use crate::logic::{
    check_slot_logic, create_booking_logic, CheckSlotRequest, CheckSlotResponse,
    CreateBookingRequest, CreateBookingResponse, SchedulingError,
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use slotbook_common::{
    config_error, conflict, external_service_error, map_json_error, validation_error,
    SlotbookError,
};
use slotbook_config::AppConfig;
use std::sync::Arc;

use slotbook_common::services::SchedulingServices;

// Define shared state needed by scheduling handlers
#[derive(Clone)]
pub struct SchedulingState {
    pub config: Arc<AppConfig>,
    pub services: Arc<SchedulingServices>,
}

impl From<SchedulingError> for SlotbookError {
    fn from(err: SchedulingError) -> Self {
        match err {
            SchedulingError::ConfigError(message) => config_error(message),
            SchedulingError::NoStartTime
            | SchedulingError::DurationOutOfRange
            | SchedulingError::StartNotInFuture => validation_error(err),
            SchedulingError::AvailabilityCheckFailed(_) => {
                external_service_error("marketplace availability", err)
            }
            SchedulingError::SlotUnavailable => conflict(err),
            SchedulingError::BookingFailed(_) => {
                external_service_error("marketplace booking", err)
            }
        }
    }
}

/// Handler for the availability check of a chosen start time.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/scheduling/check", // Path relative to /api
    request_body = CheckSlotRequest,
    responses(
        (status = 200, description = "Derived window and availability answer", body = CheckSlotResponse),
        (status = 400, description = "Missing start time, or start time not strictly in the future"),
        (status = 502, description = "Availability check could not be completed"),
        (status = 503, description = "Scheduling disabled")
    ),
    tag = "Scheduling"
))]
pub async fn check_slot_handler(
    State(state): State<Arc<SchedulingState>>,
    Json(payload): Json<CheckSlotRequest>,
) -> Result<Json<CheckSlotResponse>, Response> {
    // Ensure the scheduling feature is enabled via runtime config
    if !state.config.use_scheduling {
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            "Scheduling is disabled.".to_string(),
        )
            .into_response());
    }

    let result = check_slot_logic(state.config.clone(), &state.services, payload).await;
    map_json_error(result, SlotbookError::from)
}

/// Handler for the booking submission flow.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/scheduling", // Path relative to /api
    request_body = CreateBookingRequest,
    responses(
        (status = 200, description = "Booking created", body = CreateBookingResponse),
        (status = 400, description = "Missing start time, or start time not strictly in the future"),
        (status = 409, description = "Slot not available"),
        (status = 502, description = "Booking creation or availability check failed"),
        (status = 503, description = "Scheduling disabled")
    ),
    tag = "Scheduling"
))]
pub async fn create_booking_handler(
    State(state): State<Arc<SchedulingState>>,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<Json<CreateBookingResponse>, Response> {
    if !state.config.use_scheduling {
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            "Scheduling is disabled.".to_string(),
        )
            .into_response());
    }

    let result = create_booking_logic(state.config.clone(), &state.services, payload).await;
    map_json_error(result, SlotbookError::from)
}
