// --- File: crates/slotbook_common/src/lib.rs ---

// Declare modules within this crate
pub mod error; // Error handling
pub mod http; // HTTP utilities
pub mod logging; // Logging utilities
pub mod services; // Service abstractions

// Re-export error types and utilities for easier access
pub use error::{
    config_error, conflict, external_service_error, internal_error, validation_error, Context,
    HttpStatusCode, SlotbookError,
};

// Re-export HTTP utilities for easier access
pub use http::{
    client::{create_client, HTTP_CLIENT},
    map_json_error, IntoHttpResponse,
};

// Re-export logging utilities for easier access
pub use logging::{init, init_with_level};

// This crate provides common functionality that can be used across the application.
// It includes shared error handling, HTTP utilities, logging setup and the
// service abstraction seams the scheduling workflow is built against.
