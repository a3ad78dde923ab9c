// --- File: crates/slotbook_scheduling/src/evaluator.rs ---
//! The booking-window evaluator.
//!
//! Models the reactive pipeline of the booking form as an explicit state
//! machine: `start time -> window -> availability result -> can_submit`.
//! Every availability result is tagged with the window that produced it, so a
//! late response for a superseded window is detected by comparison and
//! discarded. There is no cancellation of in-flight checks; supersession is
//! enforced entirely at the recording step.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::window::{derive_window, is_future_start, BookingWindow};

/// Tracks one booking attempt from start-time selection to submission.
#[derive(Debug, Clone)]
pub struct BookingWindowEvaluator {
    duration_minutes: i64,
    current: Option<BookingWindow>,
    /// Latest availability answer, tagged with the window it was computed for.
    availability: Option<(BookingWindow, bool)>,
    submitting: bool,
}

impl BookingWindowEvaluator {
    /// Create an evaluator for a service with the given fixed duration.
    pub fn new(duration_minutes: i64) -> Self {
        BookingWindowEvaluator {
            duration_minutes,
            current: None,
            availability: None,
            submitting: false,
        }
    }

    /// React to a change of the selected start time.
    ///
    /// Derives the new window (or clears it when no start is selected) and
    /// returns it so the caller can fire an availability check for exactly
    /// this window. Any previously recorded availability result no longer
    /// applies and is dropped.
    pub fn select_start(&mut self, start_time: Option<DateTime<Utc>>) -> Option<BookingWindow> {
        let window = derive_window(start_time, self.duration_minutes);
        if self.current != window {
            self.availability = None;
        }
        self.current = window;
        window
    }

    /// The currently selected window, if any.
    pub fn current_window(&self) -> Option<BookingWindow> {
        self.current
    }

    /// Record the answer of an availability check.
    ///
    /// The answer only sticks when `window` is still the currently selected
    /// window; a stale answer is ignored and `false` is returned so callers
    /// can log the discard.
    pub fn record_availability(&mut self, window: BookingWindow, is_available: bool) -> bool {
        match self.current {
            Some(current) if current == window => {
                self.availability = Some((window, is_available));
                true
            }
            _ => {
                debug!(
                    "Discarding stale availability result for superseded window {:?}",
                    window
                );
                false
            }
        }
    }

    /// The availability answer for the current window, if one has arrived.
    pub fn availability_for_current(&self) -> Option<bool> {
        match (self.current, self.availability) {
            (Some(current), Some((window, is_available))) if current == window => {
                Some(is_available)
            }
            _ => None,
        }
    }

    /// Mark the start of a submission; gates re-entry until finished.
    pub fn begin_submission(&mut self) {
        self.submitting = true;
    }

    /// Mark the end of a submission attempt, successful or not.
    pub fn finish_submission(&mut self) {
        self.submitting = false;
    }

    /// Whether the submission control is enabled.
    ///
    /// All three legs must hold: the start is strictly in the future, the
    /// current window was confirmed available, and no submission is running.
    pub fn can_submit(&self, now: DateTime<Utc>) -> bool {
        let Some(window) = self.current else {
            return false;
        };
        if !is_future_start(window.start_time, now) {
            return false;
        }
        if self.submitting {
            return false;
        }
        self.availability_for_current().unwrap_or(false)
    }
}
