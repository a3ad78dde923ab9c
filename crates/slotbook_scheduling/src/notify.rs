// --- File: crates/slotbook_scheduling/src/notify.rs ---
//! Notification sink backed by the tracing pipeline.
//!
//! In the server context there is no toast overlay to render into, so notices
//! are emitted as structured log events at a level matching their severity.
//! Tests inject their own recording sink instead.

use slotbook_common::services::{BoxFuture, BoxedError, Notice, NotificationSink, Severity};
use tracing::{error, info, warn};

/// A notification sink that logs every notice.
#[derive(Debug, Default, Clone)]
pub struct TracingNotifier;

impl TracingNotifier {
    pub fn new() -> Self {
        TracingNotifier
    }
}

impl NotificationSink for TracingNotifier {
    type Error = BoxedError;

    fn publish(&self, notice: Notice) -> BoxFuture<'_, (), Self::Error> {
        Box::pin(async move {
            match notice.severity {
                Severity::Success => info!("[notice] {}: {}", notice.title, notice.message),
                Severity::Warning => warn!("[notice] {}: {}", notice.title, notice.message),
                Severity::Danger => error!("[notice] {}: {}", notice.title, notice.message),
            }
            Ok(())
        })
    }
}
