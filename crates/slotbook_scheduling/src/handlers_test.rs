#[cfg(test)]
mod tests {
    use crate::routes::routes_with_services;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use chrono::{Duration, Utc};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use slotbook_common::services::{
        AssetStorage, AssetUpload, AvailabilityService, BookingConfirmation, BookingRequest,
        BookingService, BoxFuture, BoxedError, Notice, NotificationSink, SchedulingServices,
        SlotAvailability, SlotQuery, StoredAsset,
    };
    use slotbook_config::{AppConfig, SchedulingSettings, ServerConfig};
    use std::sync::Arc;
    use tower::ServiceExt;

    /// All-in-one collaborator fake with a fixed availability answer.
    struct StubServices {
        available: bool,
    }

    impl AvailabilityService for StubServices {
        type Error = BoxedError;
        fn check_slot(&self, _query: SlotQuery) -> BoxFuture<'_, SlotAvailability, Self::Error> {
            let is_available = self.available;
            Box::pin(async move { Ok(SlotAvailability { is_available }) })
        }
    }

    impl BookingService for StubServices {
        type Error = BoxedError;
        fn create_booking(
            &self,
            _request: BookingRequest,
        ) -> BoxFuture<'_, BookingConfirmation, Self::Error> {
            Box::pin(async {
                Ok(BookingConfirmation {
                    booking_id: "bkg_9".to_string(),
                    status: "confirmed".to_string(),
                })
            })
        }
    }

    impl NotificationSink for StubServices {
        type Error = BoxedError;
        fn publish(&self, _notice: Notice) -> BoxFuture<'_, (), Self::Error> {
            Box::pin(async { Ok(()) })
        }
    }

    impl AssetStorage for StubServices {
        type Error = BoxedError;
        fn store(&self, _upload: AssetUpload) -> BoxFuture<'_, StoredAsset, Self::Error> {
            Box::pin(async {
                Ok(StoredAsset {
                    url: "https://cdn.example.test/p.jpg".to_string(),
                })
            })
        }
    }

    fn test_router(use_scheduling: bool, available: bool) -> axum::Router {
        let config = Arc::new(AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            use_scheduling,
            marketplace: None,
            scheduling: Some(SchedulingSettings {
                default_duration_minutes: Some(60),
            }),
        });
        let stub = Arc::new(StubServices { available });
        let services = Arc::new(SchedulingServices {
            availability: stub.clone(),
            booking: stub.clone(),
            notifier: stub.clone(),
            assets: stub,
        });
        routes_with_services(config, services)
    }

    fn post_json(path: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_check_slot_returns_derived_window() {
        let router = test_router(true, true);
        let start = Utc::now() + Duration::hours(2);

        let response = router
            .oneshot(post_json(
                "/scheduling/check",
                json!({
                    "start_time": start.to_rfc3339(),
                    "duration_minutes": 60,
                    "provider_id": "provider-42"
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["is_available"], json!(true));
    }

    #[tokio::test]
    async fn test_check_slot_past_start_is_bad_request() {
        let router = test_router(true, true);
        let start = Utc::now() - Duration::hours(1);

        let response = router
            .oneshot(post_json(
                "/scheduling/check",
                json!({
                    "start_time": start.to_rfc3339(),
                    "provider_id": "provider-42"
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        let message = body["error"]["message"].as_str().unwrap();
        assert!(message.contains("later than the current moment"));
    }

    #[tokio::test]
    async fn test_check_slot_huge_duration_is_bad_request() {
        let router = test_router(true, true);
        let start = Utc::now() + Duration::hours(2);

        let response = router
            .oneshot(post_json(
                "/scheduling/check",
                json!({
                    "start_time": start.to_rfc3339(),
                    "duration_minutes": 1_000_000_000_000_i64,
                    "provider_id": "provider-42"
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        let message = body["error"]["message"].as_str().unwrap();
        assert!(message.contains("out of range"));
    }

    #[tokio::test]
    async fn test_create_booking_unavailable_slot_is_conflict() {
        let router = test_router(true, false);
        let start = Utc::now() + Duration::hours(2);

        let response = router
            .oneshot(post_json(
                "/scheduling",
                json!({
                    "start_time": start.to_rfc3339(),
                    "payment": "cash",
                    "client_id": "client-7",
                    "service_id": "service-3",
                    "provider_id": "provider-42"
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_create_booking_succeeds() {
        let router = test_router(true, true);
        let start = Utc::now() + Duration::hours(2);

        let response = router
            .oneshot(post_json(
                "/scheduling",
                json!({
                    "start_time": start.to_rfc3339(),
                    "payment": "card",
                    "client_id": "client-7",
                    "service_id": "service-3",
                    "provider_id": "provider-42"
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["booking_id"], json!("bkg_9"));
    }

    #[tokio::test]
    async fn test_disabled_scheduling_is_service_unavailable() {
        let router = test_router(false, true);
        let start = Utc::now() + Duration::hours(2);

        let response = router
            .oneshot(post_json(
                "/scheduling/check",
                json!({
                    "start_time": start.to_rfc3339(),
                    "provider_id": "provider-42"
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
