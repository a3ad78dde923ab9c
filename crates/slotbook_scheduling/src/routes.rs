// --- File: crates/slotbook_scheduling/src/routes.rs ---

use crate::handlers::{check_slot_handler, create_booking_handler, SchedulingState};
use crate::notify::TracingNotifier;
use crate::service::{MarketplaceApiClient, MarketplaceError};
use axum::{routing::post, Router};
use slotbook_common::services::SchedulingServices;
use slotbook_config::AppConfig;
use std::sync::Arc;

/// Creates a router containing all routes for the scheduling feature.
///
/// Wires the HTTP-backed marketplace client and the log-backed notification
/// sink into the handler state. Fails when the marketplace section is missing
/// from the config, since every collaborator lives behind that API.
pub fn routes(config: Arc<AppConfig>) -> Result<Router, MarketplaceError> {
    let marketplace_config = config
        .marketplace
        .as_ref()
        .expect("Marketplace config missing");
    let client = Arc::new(MarketplaceApiClient::from_config(marketplace_config)?);
    let services = Arc::new(SchedulingServices {
        availability: client.clone(),
        booking: client.clone(),
        notifier: Arc::new(TracingNotifier::new()),
        assets: client,
    });
    Ok(routes_with_services(config, services))
}

/// Creates the scheduling router with explicitly provided collaborators.
/// Used directly by tests to inject mocks.
pub fn routes_with_services(config: Arc<AppConfig>, services: Arc<SchedulingServices>) -> Router {
    let state = Arc::new(SchedulingState { config, services });

    Router::new()
        .route("/scheduling/check", post(check_slot_handler))
        .route("/scheduling", post(create_booking_handler))
        .with_state(state)
}
