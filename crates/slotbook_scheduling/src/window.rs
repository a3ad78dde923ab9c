// --- File: crates/slotbook_scheduling/src/window.rs ---
//! Booking-window derivation and temporal validation.
//!
//! A booking window is fully determined by the chosen start instant and the
//! service's fixed duration; the end instant is derived and never mutated on
//! its own. Everything in here is a pure function of its inputs.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A single booking attempt as selected in the form.
///
/// Lives only for the duration of one attempt; it is rebuilt whenever the
/// user changes the start time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingCandidate {
    pub start_time: DateTime<Utc>,
    pub duration_minutes: i64,
    pub provider_id: String,
}

/// The [start, end) interval a client wishes to reserve with a provider.
///
/// Invariant: `end_time - start_time` is exactly the service duration the
/// window was derived with. Construct it through [`derive_window`] so the two
/// can never diverge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BookingWindow {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl BookingWindow {
    /// Length of the window in whole minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end_time - self.start_time).num_minutes()
    }
}

/// Derives the booking window for a chosen start time.
///
/// Returns `None` when no start time has been selected yet (the evaluator
/// stays idle in that case) or when the duration pushes the end instant past
/// the representable range. The end instant is computed with calendar-correct
/// minute arithmetic, so it rolls over hour, day, month and year boundaries.
pub fn derive_window(
    start_time: Option<DateTime<Utc>>,
    duration_minutes: i64,
) -> Option<BookingWindow> {
    let start_time = start_time?;
    let end_time = start_time.checked_add_signed(Duration::try_minutes(duration_minutes)?)?;
    Some(BookingWindow {
        start_time,
        end_time,
    })
}

/// Temporal sanity check: the start must be strictly after `now`.
///
/// A start equal to `now` is rejected. Callers surface a dedicated
/// "choose a later time" message for this case, distinct from the
/// availability-failure message.
pub fn is_future_start(start_time: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    start_time > now
}
