// File: crates/slotbook_scheduling/src/doc.rs

#![allow(dead_code)]
#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::logic::{
    CheckSlotRequest, CheckSlotResponse, CreateBookingRequest, CreateBookingResponse,
};

#[utoipa::path(
    post,
    path = "/scheduling/check",
    request_body(content = CheckSlotRequest, example = json!({
        "start_time": "2030-01-01T10:00:00Z",
        "duration_minutes": 60,
        "provider_id": "provider-42"
    })),
    responses(
        (status = 200, description = "Derived window and availability answer", body = CheckSlotResponse,
         example = json!({
             "start_time": "2030-01-01T10:00:00Z",
             "end_time": "2030-01-01T11:00:00Z",
             "is_available": true
         })
        ),
        (status = 400, description = "Start time missing or not strictly in the future"),
        (status = 502, description = "Availability check could not be completed")
    )
)]
fn doc_check_slot_handler() {}

#[utoipa::path(
    post,
    path = "/scheduling",
    request_body(content = CreateBookingRequest, example = json!({
        "start_time": "2030-01-01T10:00:00Z",
        "duration_minutes": 60,
        "payment": "cash",
        "client_id": "client-7",
        "service_id": "service-3",
        "provider_id": "provider-42"
    })),
    responses(
        (status = 200, description = "Booking created", body = CreateBookingResponse,
         example = json!({
             "success": true,
             "booking_id": "bkg_01HT...",
             "message": "Booking created."
         })
        ),
        (status = 400, description = "Start time missing or not strictly in the future"),
        (status = 409, description = "Slot not available"),
        (status = 502, description = "Booking creation failed")
    )
)]
fn doc_create_booking_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(doc_check_slot_handler, doc_create_booking_handler),
    components(
        schemas(
            CheckSlotRequest,
            CheckSlotResponse,
            CreateBookingRequest,
            CreateBookingResponse
        )
    ),
    tags(
        (name = "scheduling", description = "Booking window and scheduling API")
    ),
    servers(
        (url = "/api", description = "Scheduling API server")
    )
)]
pub struct SchedulingApiDoc;
