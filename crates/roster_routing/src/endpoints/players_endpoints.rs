use axum::extract::{Json, Path, Query, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::Router;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use roster_infrastructure::services::ServiceRegistry;

use roster_interface::errors::Result;
use roster_interface::players::filter::FilterCriteria;
use roster_interface::players::navigation::{neighbor, PlayerDetail, Step};
use roster_interface::players::roster::RosterView;
use roster_interface::players::service::PlayersServiceHandle;

pub const ROSTER_ROOT: &str = "/";

pub struct PlayersRouter;

// Everything but the unreserved characters of RFC 3986.
const ID_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

// Path of a player detail screen, the id is percent-encoded.
pub fn player_href(id: &str) -> String {
    format!("/player/{}", utf8_percent_encode(id, ID_SEGMENT))
}

impl PlayersRouter {
    pub fn new(service_registry: ServiceRegistry) -> Router {
        Router::new()
            .route("/media", get(Self::get_roster))
            .route("/player/:id", get(Self::get_player))
            .route("/player/:id/previous", get(Self::go_to_previous))
            .route("/player/:id/next", get(Self::go_to_next))
            .with_state(service_registry)
    }

    async fn get_roster(
        State(players_service): State<PlayersServiceHandle>,
        Query(criteria): Query<FilterCriteria>,
    ) -> Result<Json<RosterView>> {
        RosterView::load(&players_service, criteria).await.map(Json)
    }

    async fn get_player(
        State(players_service): State<PlayersServiceHandle>,
        Path(id): Path<String>,
    ) -> Result<Response> {
        let players = players_service.get_players().await?;

        match PlayerDetail::from_roster(&players, &id) {
            Some(detail) => Ok(Json(detail).into_response()),
            None => {
                tracing::info!("player '{}' not found, redirecting to the roster root", id);
                Ok(Redirect::to(ROSTER_ROOT).into_response())
            }
        }
    }

    async fn go_to_previous(
        State(players_service): State<PlayersServiceHandle>,
        Path(id): Path<String>,
    ) -> Result<Redirect> {
        Self::step(&players_service, &id, Step::Previous).await
    }

    async fn go_to_next(
        State(players_service): State<PlayersServiceHandle>,
        Path(id): Path<String>,
    ) -> Result<Redirect> {
        Self::step(&players_service, &id, Step::Next).await
    }

    async fn step(
        players_service: &PlayersServiceHandle,
        id: &str,
        step: Step,
    ) -> Result<Redirect> {
        let players = players_service.get_players().await?;

        let redirect = match neighbor(&players, id, step) {
            Some(player) => Redirect::to(&player_href(&player.id)),
            None => {
                tracing::info!("player '{}' not found, redirecting to the roster root", id);
                Redirect::to(ROSTER_ROOT)
            }
        };

        Ok(redirect)
    }
}
