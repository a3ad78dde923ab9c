// --- File: crates/slotbook_scheduling/src/service.rs ---
//! Marketplace API client.
//!
//! This module provides HTTP-backed implementations of the collaborator
//! traits: the availability check, booking creation and asset upload all go
//! to the remote marketplace API through the shared reqwest client.

use reqwest::Client;
use slotbook_common::services::{
    AssetStorage, AssetUpload, AvailabilityService, BookingConfirmation, BookingRequest,
    BookingService, BoxFuture, BoxedError, SlotAvailability, SlotQuery, StoredAsset,
};
use slotbook_common::{create_client, HTTP_CLIENT};
use slotbook_config::MarketplaceConfig;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when talking to the marketplace API.
#[derive(Error, Debug)]
pub enum MarketplaceError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Marketplace returned status {0}")]
    UnexpectedStatus(u16),
    #[error("Marketplace returned an empty or malformed response: {0}")]
    MalformedResponse(String),
}

fn boxed(err: MarketplaceError) -> BoxedError {
    BoxedError(Box::new(err))
}

/// HTTP client for the marketplace API.
///
/// Implements all three remote collaborator traits against the endpoints the
/// booking form talks to: `POST /scheduling/check`, `POST /scheduling` and
/// `POST /files`.
pub struct MarketplaceApiClient {
    base_url: String,
    client: Client,
}

impl MarketplaceApiClient {
    /// Build a client from the marketplace config section.
    ///
    /// A configured request timeout gets its own client; otherwise the shared
    /// application-wide client is cloned (reqwest clients are cheap handles).
    pub fn from_config(config: &MarketplaceConfig) -> Result<Self, MarketplaceError> {
        let client = match config.request_timeout_secs {
            Some(secs) => create_client(secs, true)?,
            None => HTTP_CLIENT.clone(),
        };
        Ok(MarketplaceApiClient {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, MarketplaceError>
    where
        B: serde::Serialize,
        T: serde::de::DeserializeOwned,
    {
        let url = self.url(path);
        debug!("POST {}", url);
        let response = self.client.post(&url).json(body).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(MarketplaceError::UnexpectedStatus(status.as_u16()));
        }
        // An empty body deserializes to nothing useful; treat it as malformed
        // so callers fail closed instead of assuming a positive answer.
        response
            .json::<T>()
            .await
            .map_err(|e| MarketplaceError::MalformedResponse(e.to_string()))
    }
}

impl AvailabilityService for MarketplaceApiClient {
    type Error = BoxedError;

    fn check_slot(&self, query: SlotQuery) -> BoxFuture<'_, SlotAvailability, Self::Error> {
        Box::pin(async move {
            self.post_json("scheduling/check", &query)
                .await
                .map_err(boxed)
        })
    }
}

impl BookingService for MarketplaceApiClient {
    type Error = BoxedError;

    fn create_booking(
        &self,
        request: BookingRequest,
    ) -> BoxFuture<'_, BookingConfirmation, Self::Error> {
        Box::pin(async move { self.post_json("scheduling", &request).await.map_err(boxed) })
    }
}

impl AssetStorage for MarketplaceApiClient {
    type Error = BoxedError;

    fn store(&self, upload: AssetUpload) -> BoxFuture<'_, StoredAsset, Self::Error> {
        Box::pin(async move { self.post_json("files", &upload).await.map_err(boxed) })
    }
}
