use async_trait::async_trait;

use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, Bson, Document};
use roster_interface::errors::AppError;

use roster_interface::errors::Result;
use roster_interface::players::{
    model::{Player, PlayerDocument},
    service::PlayersService,
};

use crate::database_connection::DatabaseConnection;

#[derive(Clone)]
pub struct MongoPlayersService {
    db: DatabaseConnection,
    collection: String,
}

impl MongoPlayersService {
    pub fn new(db: DatabaseConnection, collection: &str) -> Self {
        Self {
            db,
            collection: collection.to_string(),
        }
    }
}

// Validates a raw players document. The `_id` becomes the player id.
pub fn player_from_document(mut document: Document) -> Result<Player> {
    let id = match document.remove("_id") {
        Some(Bson::ObjectId(oid)) => oid.to_hex(),
        Some(Bson::String(id)) => id,
        Some(Bson::Int32(id)) => id.to_string(),
        Some(Bson::Int64(id)) => id.to_string(),
        Some(other) => {
            return Err(AppError::malformed(
                &other.to_string(),
                "unsupported `_id` type",
            ))
        }
        None => return Err(AppError::malformed("", "missing `_id`")),
    };

    let player_document: PlayerDocument = mongodb::bson::from_document(document)
        .map_err(|e| AppError::malformed(&id, e.to_string()))?;

    player_document.into_player(&id)
}

#[async_trait]
impl PlayersService for MongoPlayersService {
    async fn get_players(&self) -> Result<Vec<Player>> {
        let collection = self.db.collection::<Document>(&self.collection);

        let documents: Vec<Document> = collection
            .find(doc! {}, None)
            .await
            .map_err(|e| AppError::MongoError { msg: e.to_string() })?
            .try_collect()
            .await
            .map_err(|e| AppError::MongoError { msg: e.to_string() })?;

        let players = documents
            .into_iter()
            .map(player_from_document)
            .collect::<Result<Vec<Player>>>()
            .inspect_err(|e| tracing::warn!("{}", e))?;

        tracing::debug!("fetched {} players from mongo", players.len());

        Ok(players)
    }

    async fn get_player_by_id(&self, id: &str) -> Result<Option<Player>> {
        // Documents created by the drivers use an ObjectId, imported ones a plain string.
        let filter = match ObjectId::parse_str(id) {
            Ok(oid) => doc! {"_id": {"$in": [oid, id]}},
            Err(_) => doc! {"_id": id},
        };

        let collection = self.db.collection::<Document>(&self.collection);
        let document = collection
            .find_one(filter, None)
            .await
            .map_err(|e| AppError::MongoError { msg: e.to_string() })?;

        document.map(player_from_document).transpose()
    }
}
