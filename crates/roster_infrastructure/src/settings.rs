use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::fmt;

#[derive(Debug, Clone, Deserialize)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Logger {
    pub level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Mongo,
    Firestore,
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Store {
    pub backend: StoreBackend,
    pub collection: String, // Name of the players collection (i.g., "players").
}

#[derive(Debug, Clone, Deserialize)]
pub struct Database {
    pub uri: String,
    pub name: String,
    // How long a request waits for a reachable server before failing.
    #[serde(default = "default_server_selection_timeout_ms")]
    pub server_selection_timeout_ms: u64,
}

fn default_server_selection_timeout_ms() -> u64 {
    5000
}

#[derive(Debug, Clone, Deserialize)]
pub struct Firestore {
    pub project_id: String,
    pub api_key: Option<String>,
    pub page_size: u32,
    // Only overridden to point at the emulator.
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Seed {
    pub path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Content {
    pub team_name: String,
    pub founded_year: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub environment: String,
    pub server: Server,
    pub logger: Logger,
    pub store: Store,
    pub database: Option<Database>,
    pub firestore: Option<Firestore>,
    pub seed: Option<Seed>,
    pub content: Content,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let config = if cfg!(debug_assertions) {
            "debug"
        } else {
            "release"
        };

        Self::from_file(&format!("config/{config}"))
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name(path))
            // i.g., ROSTER__SERVER__PORT=8080
            .add_source(
                Environment::with_prefix("ROSTER")
                    .prefix_separator("__")
                    .separator("__"),
            );

        builder
            .build()?
            // Deserialize (and thus freeze) the entire configuration.
            .try_deserialize()
    }
}

impl fmt::Display for Server {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "http://{}:{}", &self.host, &self.port)
    }
}
