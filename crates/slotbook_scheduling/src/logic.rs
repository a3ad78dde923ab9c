// --- File: crates/slotbook_scheduling/src/logic.rs ---

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use slotbook_common::services::{
    AssetUpload, BookingRequest, Notice, SchedulingServices, SlotQuery,
};
use slotbook_config::AppConfig;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

use crate::evaluator::BookingWindowEvaluator;
use crate::window::{BookingCandidate, BookingWindow};

// Notice texts shown through the shared notification channel. The temporal
// message and the availability-failure message are deliberately distinct.
pub(crate) const CHECK_FAILED_TITLE: &str = "Could not check whether the slot is available";
pub(crate) const CHECK_FAILED_MESSAGE: &str = "Please try again later";
pub(crate) const BOOKING_FAILED_TITLE: &str = "Could not create the booking";
pub(crate) const BOOKING_FAILED_MESSAGE: &str = "Please try again later";
pub(crate) const BOOKING_CREATED_TITLE: &str = "Success!";
pub(crate) const BOOKING_CREATED_MESSAGE: &str =
    "Booking created, you can review it under the Agenda menu";
const SUCCESS_NOTICE_DURATION_MS: u64 = 10_000;

#[derive(Error, Debug)]
pub enum SchedulingError {
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("No start time selected.")]
    NoStartTime,
    #[error("duration_minutes is out of range.")]
    DurationOutOfRange,
    #[error("Please choose a start time later than the current moment.")]
    StartNotInFuture,
    #[error("Could not check slot availability: {0}")]
    AvailabilityCheckFailed(String),
    #[error("Requested time slot is not available.")]
    SlotUnavailable,
    #[error("Booking creation failed: {0}")]
    BookingFailed(String),
}

// --- Data Structures ---

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CheckSlotRequest {
    /// Chosen start instant. Absent means the form is still idle.
    #[cfg_attr(feature = "openapi", schema(example = "2030-01-01T10:00:00Z"))]
    pub start_time: Option<DateTime<Utc>>,
    /// Service duration; falls back to the configured default when omitted.
    #[cfg_attr(feature = "openapi", schema(example = 60))]
    pub duration_minutes: Option<i64>,
    #[cfg_attr(feature = "openapi", schema(example = "provider-42"))]
    pub provider_id: String,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CheckSlotResponse {
    #[cfg_attr(feature = "openapi", schema(example = "2030-01-01T10:00:00Z"))]
    pub start_time: DateTime<Utc>,
    #[cfg_attr(feature = "openapi", schema(example = "2030-01-01T11:00:00Z"))]
    pub end_time: DateTime<Utc>,
    pub is_available: bool,
}

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateBookingRequest {
    #[cfg_attr(feature = "openapi", schema(example = "2030-01-01T10:00:00Z"))]
    pub start_time: Option<DateTime<Utc>>,
    /// Service duration; falls back to the configured default when omitted.
    #[cfg_attr(feature = "openapi", schema(example = 60))]
    pub duration_minutes: Option<i64>,
    #[cfg_attr(feature = "openapi", schema(example = "cash"))]
    pub payment: String,
    #[cfg_attr(feature = "openapi", schema(example = "client-7"))]
    pub client_id: String,
    #[cfg_attr(feature = "openapi", schema(example = "service-3"))]
    pub service_id: String,
    #[cfg_attr(feature = "openapi", schema(example = "provider-42"))]
    pub provider_id: String,
    /// Freshly picked photo to attach, if any.
    pub photo: Option<AssetUpload>,
    /// Photo URL already on file, used when no new photo was supplied.
    pub existing_photo_url: Option<String>,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateBookingResponse {
    pub success: bool,
    #[cfg_attr(feature = "openapi", schema(example = "bkg_01HT..."))]
    pub booking_id: Option<String>,
    #[cfg_attr(feature = "openapi", schema(example = "Booking created."))]
    pub message: String,
}

fn resolve_duration(
    app_config: &AppConfig,
    requested: Option<i64>,
) -> Result<i64, SchedulingError> {
    let duration = requested
        .or_else(|| {
            app_config
                .scheduling
                .as_ref()
                .and_then(|s| s.default_duration_minutes)
        })
        .ok_or_else(|| {
            SchedulingError::ConfigError(
                "No duration supplied and no default duration configured.".to_string(),
            )
        })?;
    if duration < 0 {
        return Err(SchedulingError::ConfigError(
            "duration_minutes must not be negative.".to_string(),
        ));
    }
    // A duration chrono cannot even hold would panic in the window math.
    if Duration::try_minutes(duration).is_none() {
        return Err(SchedulingError::DurationOutOfRange);
    }
    Ok(duration)
}

/// Runs the availability check for the current window and records the answer.
///
/// Fails closed: a transport failure or malformed answer publishes the generic
/// check-failure notice and leaves the slot *not confirmed available*. The
/// recording step itself drops answers for superseded windows.
async fn check_window_availability(
    services: &SchedulingServices,
    evaluator: &mut BookingWindowEvaluator,
    window: BookingWindow,
    candidate: &BookingCandidate,
) -> Result<bool, SchedulingError> {
    let query = SlotQuery {
        start_time: window.start_time,
        end_time: window.end_time,
        provider_id: candidate.provider_id.clone(),
    };

    match services.availability.check_slot(query).await {
        Ok(answer) => {
            evaluator.record_availability(window, answer.is_available);
            Ok(answer.is_available)
        }
        Err(err) => {
            warn!("Availability check failed: {}", err);
            evaluator.record_availability(window, false);
            let _ = services
                .notifier
                .publish(Notice::danger(CHECK_FAILED_TITLE, CHECK_FAILED_MESSAGE))
                .await;
            Err(SchedulingError::AvailabilityCheckFailed(err.to_string()))
        }
    }
}

/// Derives the window for a chosen start time and checks its availability.
///
/// A start time that is not strictly in the future is rejected before any
/// remote call is made, with a message distinct from the availability one.
pub async fn check_slot_logic(
    app_config: Arc<AppConfig>,
    services: &SchedulingServices,
    request_data: CheckSlotRequest,
) -> Result<CheckSlotResponse, SchedulingError> {
    let duration_minutes = resolve_duration(&app_config, request_data.duration_minutes)?;

    let mut evaluator = BookingWindowEvaluator::new(duration_minutes);
    let window = match evaluator.select_start(request_data.start_time) {
        Some(window) => window,
        // A start was chosen but the derived end overflows the calendar.
        None if request_data.start_time.is_some() => {
            return Err(SchedulingError::DurationOutOfRange)
        }
        None => return Err(SchedulingError::NoStartTime),
    };

    let now = Utc::now();
    if !crate::window::is_future_start(window.start_time, now) {
        // No availability check is fired for an invalid start.
        return Err(SchedulingError::StartNotInFuture);
    }

    let candidate = BookingCandidate {
        start_time: window.start_time,
        duration_minutes,
        provider_id: request_data.provider_id,
    };
    let is_available =
        check_window_availability(services, &mut evaluator, window, &candidate).await?;

    info!(
        "Slot check for provider {}: {} - {} available={}",
        candidate.provider_id, window.start_time, window.end_time, is_available
    );

    Ok(CheckSlotResponse {
        start_time: window.start_time,
        end_time: window.end_time,
        is_available,
    })
}

/// Resolves the photo to attach to the booking payload.
///
/// A freshly uploaded photo wins; when none was supplied, or the upload does
/// not come back with a usable URL, the previously stored value is used.
async fn resolve_photo_url(
    services: &SchedulingServices,
    photo: Option<AssetUpload>,
    existing_photo_url: Option<String>,
) -> Option<String> {
    let Some(upload) = photo else {
        return existing_photo_url;
    };
    match services.assets.store(upload).await {
        Ok(stored) => Some(stored.url),
        Err(err) => {
            warn!("Photo upload failed, keeping stored photo: {}", err);
            existing_photo_url
        }
    }
}

/// The full submission flow.
///
/// Re-validates the temporal invariant, re-checks availability for the final
/// window (the submission gate must never rely on a stale answer), resolves
/// the photo, assembles the payload and submits it. Failures publish a notice
/// and leave the caller free to retry; nothing is persisted locally.
pub async fn create_booking_logic(
    app_config: Arc<AppConfig>,
    services: &SchedulingServices,
    request_data: CreateBookingRequest,
) -> Result<CreateBookingResponse, SchedulingError> {
    let duration_minutes = resolve_duration(&app_config, request_data.duration_minutes)?;

    let mut evaluator = BookingWindowEvaluator::new(duration_minutes);
    let window = match evaluator.select_start(request_data.start_time) {
        Some(window) => window,
        None if request_data.start_time.is_some() => {
            return Err(SchedulingError::DurationOutOfRange)
        }
        None => return Err(SchedulingError::NoStartTime),
    };

    let now = Utc::now();
    if !crate::window::is_future_start(window.start_time, now) {
        return Err(SchedulingError::StartNotInFuture);
    }

    let candidate = BookingCandidate {
        start_time: window.start_time,
        duration_minutes,
        provider_id: request_data.provider_id,
    };
    check_window_availability(services, &mut evaluator, window, &candidate).await?;
    evaluator.begin_submission();
    if evaluator.availability_for_current() != Some(true) {
        evaluator.finish_submission();
        return Err(SchedulingError::SlotUnavailable);
    }

    // 1. Resolve the uploaded photo, falling back to the stored one.
    let photo_url = resolve_photo_url(
        services,
        request_data.photo,
        request_data.existing_photo_url,
    )
    .await;

    // 2. Assemble the booking payload.
    let booking = BookingRequest {
        start_time: window.start_time,
        end_time: window.end_time,
        payment_method: request_data.payment,
        client_id: request_data.client_id,
        service_id: request_data.service_id,
        photo_url,
    };

    // 3. Submit to the booking-creation endpoint.
    let confirmation = match services.booking.create_booking(booking).await {
        Ok(confirmation) => confirmation,
        Err(err) => {
            evaluator.finish_submission();
            warn!("Booking creation failed: {}", err);
            let _ = services
                .notifier
                .publish(Notice::danger(BOOKING_FAILED_TITLE, BOOKING_FAILED_MESSAGE))
                .await;
            return Err(SchedulingError::BookingFailed(err.to_string()));
        }
    };
    evaluator.finish_submission();

    // 4. Success notice; the dialog closes on the caller's side.
    let _ = services
        .notifier
        .publish(
            Notice::success(BOOKING_CREATED_TITLE, BOOKING_CREATED_MESSAGE)
                .with_duration(SUCCESS_NOTICE_DURATION_MS),
        )
        .await;

    info!(
        "Booking {} created: {} - {}",
        confirmation.booking_id, window.start_time, window.end_time
    );

    Ok(CreateBookingResponse {
        success: true,
        booking_id: Some(confirmation.booking_id),
        message: "Booking created.".to_string(),
    })
}
