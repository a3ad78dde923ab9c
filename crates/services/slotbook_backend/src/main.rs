// File: crates/services/slotbook_backend/src/main.rs
use axum::{routing::get, Router};
use slotbook_common::{internal_error, logging, Context, SlotbookError};
use slotbook_config::load_config;
use slotbook_scheduling::routes as scheduling_routes;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), SlotbookError> {
    logging::init();

    let config = Arc::new(load_config().map_err(internal_error)?);

    let api_router = Router::new().route("/", get(|| async { "Welcome to the Slotbook API!" }));

    let api_router = Router::new().nest("/api", {
        let mut router = api_router;
        if config.use_scheduling {
            let scheduling_router = scheduling_routes::routes(config.clone())
                .map_err(|e| internal_error(format!("Failed to build scheduling routes: {e}")))?;
            router = router.merge(scheduling_router);
        } else {
            info!("Scheduling disabled via runtime config; only the root route is mounted.");
        }
        router
    });

    #[allow(unused_mut)]
    let mut app = api_router.layer(TraceLayer::new_for_http());

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        use slotbook_scheduling::doc::SchedulingApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        // Define the merged OpenAPI documentation struct
        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "Slotbook API",
                version = "0.1.0",
                description = "Slotbook scheduling service API docs",
                license(name = "MIT", url = "https://opensource.org/licenses/MIT")
            ),
            components(),
            tags( (name = "Slotbook", description = "Core service endpoints")),
            servers( (url = "/api", description = "Main API prefix")),
        )]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(SchedulingApiDoc::openapi());
        info!("Adding Swagger UI at /api/docs");

        let swagger_ui =
            SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc.clone());
        app = app.merge(swagger_ui);
    }

    // Bind and serve
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .context("Failed to bind server address")?;
    info!("Starting server at http://{}", addr);
    info!("API endpoints available at http://{}/api", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .context("Server error")?;
    Ok(())
}
