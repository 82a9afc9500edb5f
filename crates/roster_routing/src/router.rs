use std::net::SocketAddr;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router};

use roster_infrastructure::services::ServiceRegistry;
use roster_infrastructure::settings::Settings;
use roster_interface::content::model::NotFoundPage;
use tower_http::trace::TraceLayer;

use crate::endpoints::content_endpoints::ContentRouter;
use crate::endpoints::home_endpoints::HomeRouter;
use crate::endpoints::players_endpoints::PlayersRouter;

pub struct ApplicationController;

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(NotFoundPage::default()))
}

impl ApplicationController {
    pub fn router(service_registry: ServiceRegistry) -> Router {
        Router::new()
            .merge(HomeRouter::new(service_registry.clone()))
            .merge(PlayersRouter::new(service_registry.clone()))
            .merge(ContentRouter::new(service_registry))
            .fallback(not_found)
            // logging so we can see whats going on
            .layer(TraceLayer::new_for_http())
    }

    pub async fn run(
        settings: Settings,
        service_registry: ServiceRegistry,
    ) -> std::io::Result<()> {
        let router = Self::router(service_registry);

        let listener = tokio::net::TcpListener::bind(&format!(
            "{}:{}",
            settings.server.host, settings.server.port
        ))
        .await?;

        tracing::info!("listening on {}", settings.server);

        axum::serve(
            listener,
            router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
    }
}
