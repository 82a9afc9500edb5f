use axum::extract::{Json, State};
use axum::routing::get;
use axum::Router;

use roster_infrastructure::services::ServiceRegistry;

use roster_interface::content::model::{HistoryPage, StorePage};
use roster_interface::content::service::ContentServiceHandle;
use roster_interface::errors::Result;

pub struct ContentRouter;

impl ContentRouter {
    pub fn new(service_registry: ServiceRegistry) -> Router {
        Router::new()
            .route("/history", get(Self::get_history))
            .route("/store", get(Self::get_store))
            .with_state(service_registry)
    }

    async fn get_history(
        State(content_service): State<ContentServiceHandle>,
    ) -> Result<Json<HistoryPage>> {
        content_service.get_history().await.map(Json)
    }

    async fn get_store(
        State(content_service): State<ContentServiceHandle>,
    ) -> Result<Json<StorePage>> {
        content_service.get_store().await.map(Json)
    }
}
