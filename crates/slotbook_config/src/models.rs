// --- File: crates/slotbook_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

// --- Marketplace API Config ---
// Holds the location of the remote marketplace API that availability checks,
// booking creation and asset uploads are sent to.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct MarketplaceConfig {
    /// Base URL of the marketplace API, without a trailing slash.
    pub base_url: String,
    /// Per-request timeout in seconds. Falls back to the shared client default.
    pub request_timeout_secs: Option<u64>,
}

// --- Scheduling Settings ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct SchedulingSettings {
    /// Service duration applied when a request does not carry one.
    pub default_duration_minutes: Option<i64>,
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // Server config is mandatory
    pub server: ServerConfig,

    // --- Runtime Flags (optional in config file, default to false) ---
    #[serde(default)]
    pub use_scheduling: bool,

    // --- Optional sections ---
    pub marketplace: Option<MarketplaceConfig>,
    pub scheduling: Option<SchedulingSettings>,
}
