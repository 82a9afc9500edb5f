use std::time::Duration;

use mongodb::bson::doc;
use mongodb::options::ClientOptions;

use roster_interface::errors::{AppError, Result};

use crate::settings::Database;

pub type DatabaseConnection = mongodb::Database;

const APP_NAME: &str = "roster";

fn mongo_error(e: mongodb::error::Error) -> AppError {
    AppError::MongoError { msg: e.to_string() }
}

pub struct DatabaseManager;

impl DatabaseManager {
    /// Connects to the players database and pings it, so an unreachable
    /// store is reported at startup rather than on the first screen.
    pub async fn new_pool(settings: &Database) -> Result<DatabaseConnection> {
        let mut options = ClientOptions::parse(&settings.uri)
            .await
            .map_err(mongo_error)?;

        let timeout = Duration::from_millis(settings.server_selection_timeout_ms);
        options.app_name = Some(APP_NAME.to_string());
        options.server_selection_timeout = Some(timeout);
        options.connect_timeout = Some(timeout);

        let db = mongodb::Client::with_options(options)
            .map_err(mongo_error)?
            .database(&settings.name);

        db.run_command(doc! {"ping": 1}, None)
            .await
            .map_err(mongo_error)?;

        tracing::info!("connected to the '{}' database", settings.name);

        Ok(db)
    }
}
