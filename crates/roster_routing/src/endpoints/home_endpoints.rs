use axum::extract::{Json, Query, State};
use axum::routing::get;
use axum::Router;

use roster_infrastructure::services::content_service::STORE_PREVIEW_SIZE;
use roster_infrastructure::services::ServiceRegistry;

use roster_interface::content::model::{HomePage, Link};
use roster_interface::content::service::ContentServiceHandle;
use roster_interface::errors::Result;
use roster_interface::players::filter::FilterCriteria;
use roster_interface::players::roster::RosterView;
use roster_interface::players::service::PlayersServiceHandle;

pub struct HomeRouter;

impl HomeRouter {
    pub fn new(service_registry: ServiceRegistry) -> Router {
        Router::new()
            .route("/", get(Self::get_home))
            .with_state(service_registry)
    }

    async fn get_home(
        State(players_service): State<PlayersServiceHandle>,
        State(content_service): State<ContentServiceHandle>,
        Query(criteria): Query<FilterCriteria>,
    ) -> Result<Json<HomePage>> {
        let (banner, store, featured) = futures::try_join!(
            content_service.get_home_banner(),
            content_service.get_store(),
            RosterView::load(&players_service, criteria),
        )?;

        Ok(Json(HomePage {
            banner,
            featured,
            full_roster: Link::new("Ver Listado Completo", "/media"),
            store_title: "Nuestra Tienda".to_string(),
            store_preview: store.products.into_iter().take(STORE_PREVIEW_SIZE).collect(),
            store: Link::new("Ver Más Productos", "/store"),
        }))
    }
}
