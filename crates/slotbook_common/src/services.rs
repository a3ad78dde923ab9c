// --- File: crates/slotbook_common/src/services.rs ---
//! Service abstractions for external collaborators.
//!
//! This module provides trait definitions for the external systems the booking
//! workflow depends on. These traits allow for dependency injection and easier
//! testing by decoupling the workflow logic from specific implementations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// A wrapper error type that implements std::error::Error for Box<dyn std::error::Error + Send + Sync>
#[derive(Debug)]
pub struct BoxedError(pub Box<dyn StdError + Send + Sync>);

impl fmt::Display for BoxedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StdError for BoxedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

impl From<Box<dyn StdError + Send + Sync>> for BoxedError {
    fn from(err: Box<dyn StdError + Send + Sync>) -> Self {
        BoxedError(err)
    }
}

/// A trait for the remote availability check.
///
/// One request per derived window, keyed by the window and the provider.
/// An error (transport failure, malformed or empty response) means the check
/// did not happen; it never means "unavailable".
pub trait AvailabilityService: Send + Sync {
    /// Error type returned by availability check operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Ask whether the given window is free for the given provider.
    fn check_slot(&self, query: SlotQuery) -> BoxFuture<'_, SlotAvailability, Self::Error>;
}

/// A trait for the remote booking-creation endpoint.
pub trait BookingService: Send + Sync {
    /// Error type returned by booking operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Create a booking. An absent or empty response is a failure.
    fn create_booking(
        &self,
        request: BookingRequest,
    ) -> BoxFuture<'_, BookingConfirmation, Self::Error>;
}

/// A trait for the shared user-visible notification channel.
///
/// The workflow depends on this through injection, never through ambient
/// global state, so tests can record what would have been shown to the user.
pub trait NotificationSink: Send + Sync {
    /// Error type returned by notification operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Publish a notice to the channel.
    fn publish(&self, notice: Notice) -> BoxFuture<'_, (), Self::Error>;
}

/// A trait for asset (photo) storage.
///
/// Used during booking submission to resolve an uploaded photo into a stable
/// URL before the payload is assembled.
pub trait AssetStorage: Send + Sync {
    /// Error type returned by storage operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Store the uploaded asset and return where it now lives.
    fn store(&self, upload: AssetUpload) -> BoxFuture<'_, StoredAsset, Self::Error>;
}

/// A bundle of all collaborator handles the scheduling workflow needs.
///
/// Handlers and tests construct one of these; the logic layer only ever sees
/// the trait objects.
pub struct SchedulingServices {
    pub availability: Arc<dyn AvailabilityService<Error = BoxedError>>,
    pub booking: Arc<dyn BookingService<Error = BoxedError>>,
    pub notifier: Arc<dyn NotificationSink<Error = BoxedError>>,
    pub assets: Arc<dyn AssetStorage<Error = BoxedError>>,
}

/// Data structures for availability check operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotQuery {
    /// The start of the window being checked.
    pub start_time: DateTime<Utc>,
    /// The end of the window being checked.
    pub end_time: DateTime<Utc>,
    /// The provider whose agenda is being checked.
    pub provider_id: String,
}

/// The answer of an availability check, valid only for the window it was
/// computed for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotAvailability {
    pub is_available: bool,
}

/// Payload sent to the booking-creation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Payment method chosen in the form (e.g. "cash", "card").
    pub payment_method: String,
    /// The client requesting the booking.
    pub client_id: String,
    /// The service/product being booked.
    pub service_id: String,
    /// Resolved photo URL, if any was attached to the booking.
    pub photo_url: Option<String>,
}

/// Confirmation returned by the booking-creation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfirmation {
    /// The ID of the created booking.
    pub booking_id: String,
    /// The status of the booking (e.g. "confirmed").
    pub status: String,
}

/// Severity of a user-visible notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Warning,
    Danger,
}

/// A user-visible notice (toast) pushed through the notification channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    pub message: String,
    pub severity: Severity,
    /// How long the notice should stay visible, when the sink supports it.
    pub display_duration_ms: Option<u64>,
}

impl Notice {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Notice {
            title: title.into(),
            message: message.into(),
            severity: Severity::Success,
            display_duration_ms: None,
        }
    }

    pub fn danger(title: impl Into<String>, message: impl Into<String>) -> Self {
        Notice {
            title: title.into(),
            message: message.into(),
            severity: Severity::Danger,
            display_duration_ms: None,
        }
    }

    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.display_duration_ms = Some(duration_ms);
        self
    }
}

/// An asset handed to storage during submission.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetUpload {
    /// Original file name, used by the storage backend for the object key.
    pub file_name: String,
    /// MIME type of the upload.
    pub content_type: String,
    /// Raw content, base64-encoded for transport.
    pub content_base64: String,
}

/// Where a stored asset can be fetched from afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredAsset {
    pub url: String,
}
