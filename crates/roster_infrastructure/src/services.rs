use std::sync::Arc;

use axum::extract::FromRef;

use crate::database_connection::DatabaseManager;
use roster_interface::content::service::ContentServiceHandle;
use roster_interface::errors::{AppError, Result};
use roster_interface::players::service::PlayersServiceHandle;

pub mod content_service;
pub mod firestore_players_service;
pub mod memory_players_service;
pub mod players_service;

use content_service::StaticContentService;
use firestore_players_service::FirestorePlayersService;
use memory_players_service::InMemoryPlayersService;
use players_service::MongoPlayersService;

use crate::settings::{Settings, StoreBackend};

#[derive(FromRef, Clone)]
pub struct ServiceRegistry {
    pub players_service: PlayersServiceHandle,
    pub content_service: ContentServiceHandle,
}

impl ServiceRegistry {
    pub fn new(
        players_service: PlayersServiceHandle,
        content_service: ContentServiceHandle,
    ) -> Self {
        Self {
            players_service,
            content_service,
        }
    }

    pub async fn from_settings(settings: &Settings) -> Result<Self> {
        let players_service = connect_players_service(settings).await?;
        let content_service = Arc::new(StaticContentService::new(&settings.content));

        Ok(Self::new(players_service, content_service))
    }
}

fn missing_section(section: &str, backend: StoreBackend) -> AppError {
    AppError::ConfigError {
        msg: format!("the [{section}] section is required by the {backend:?} store backend"),
    }
}

/// Builds the players store selected by `store.backend`.
pub async fn connect_players_service(settings: &Settings) -> Result<PlayersServiceHandle> {
    let backend = settings.store.backend;
    let collection = settings.store.collection.as_str();

    let players_service: PlayersServiceHandle = match backend {
        StoreBackend::Mongo => {
            let database = settings
                .database
                .as_ref()
                .ok_or_else(|| missing_section("database", backend))?;
            let db = DatabaseManager::new_pool(database).await?;

            Arc::new(MongoPlayersService::new(db, collection))
        }
        StoreBackend::Firestore => {
            let firestore = settings
                .firestore
                .as_ref()
                .ok_or_else(|| missing_section("firestore", backend))?;

            Arc::new(FirestorePlayersService::new(firestore, collection))
        }
        StoreBackend::Memory => {
            let seed = settings
                .seed
                .as_ref()
                .ok_or_else(|| missing_section("seed", backend))?;

            Arc::new(InMemoryPlayersService::from_file(&seed.path).await?)
        }
    };

    tracing::info!("players store: {:?} (collection '{}')", backend, collection);

    Ok(players_service)
}
