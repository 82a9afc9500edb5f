use async_trait::async_trait;

use reqwest::{StatusCode, Url};
use serde::Deserialize;
use serde_json::{Map, Value};

use roster_interface::errors::{AppError, Result};
use roster_interface::players::{
    model::{Player, PlayerDocument},
    service::PlayersService,
};

use crate::settings::Firestore;

const FIRESTORE_URL: &str = "https://firestore.googleapis.com/v1";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirestoreDocument {
    // i.g., projects/{project}/databases/(default)/documents/players/{id}
    pub name: String,
    #[serde(default)]
    pub fields: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDocumentsResponse {
    #[serde(default)]
    pub documents: Vec<FirestoreDocument>,
    pub next_page_token: Option<String>,
}

/// Players read through the Firestore REST API.
#[derive(Clone)]
pub struct FirestorePlayersService {
    client: reqwest::Client,
    base_url: String,
    project_id: String,
    api_key: Option<String>,
    page_size: u32,
    collection: String,
}

impl FirestorePlayersService {
    pub fn new(settings: &Firestore, collection: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: settings
                .base_url
                .clone()
                .unwrap_or_else(|| FIRESTORE_URL.to_string()),
            project_id: settings.project_id.clone(),
            api_key: settings.api_key.clone(),
            page_size: settings.page_size,
            collection: collection.to_string(),
        }
    }

    fn documents_url(&self, id: Option<&str>) -> Result<Url> {
        let mut url = Url::parse(&self.base_url).map_err(|e| AppError::ConfigError {
            msg: format!("invalid firestore url '{}': {}", self.base_url, e),
        })?;

        {
            let mut segments = url.path_segments_mut().map_err(|_| AppError::ConfigError {
                msg: format!("firestore url '{}' cannot be a base", self.base_url),
            })?;
            segments.pop_if_empty().extend([
                "projects",
                self.project_id.as_str(),
                "databases",
                "(default)",
                "documents",
                self.collection.as_str(),
            ]);
            // Each segment is percent-encoded, a '/' in the id cannot reach a sub collection.
            if let Some(id) = id {
                segments.push(id);
            }
        }

        if let Some(key) = &self.api_key {
            url.query_pairs_mut().append_pair("key", key);
        }

        Ok(url)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response> {
        let response = request
            .send()
            .await
            .map_err(|e| AppError::ReqwestError { msg: e.to_string() })?;

        Ok(response)
    }

    async fn fetch_page(&self, page_token: Option<&str>) -> Result<ListDocumentsResponse> {
        let mut request = self
            .client
            .get(self.documents_url(None)?)
            .query(&[("pageSize", self.page_size.to_string())]);
        if let Some(token) = page_token {
            request = request.query(&[("pageToken", token)]);
        }

        let response = self.send(request).await?;
        let response = error_for_status(response).await?;

        response
            .json::<ListDocumentsResponse>()
            .await
            .map_err(|e| AppError::ReqwestError { msg: e.to_string() })
    }
}

async fn error_for_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let msg = response
        .text()
        .await
        .unwrap_or_else(|e| format!("unreadable body: {}", e));

    Err(AppError::StoreError {
        status: status.as_u16(),
        msg,
    })
}

/// Converts a Firestore typed value (i.g., `{"integerValue": "7"}`) to plain json.
pub fn typed_value_to_json(value: &Value) -> std::result::Result<Value, String> {
    let object = value
        .as_object()
        .filter(|object| object.len() == 1)
        .ok_or_else(|| format!("not a typed value: {}", value))?;

    let (kind, inner) = object.iter().next().ok_or("empty typed value")?;

    match kind.as_str() {
        "nullValue" => Ok(Value::Null),
        "booleanValue" | "doubleValue" => Ok(inner.clone()),
        "stringValue" | "timestampValue" | "referenceValue" => Ok(inner.clone()),
        "integerValue" => match inner {
            // int64 values are sent as strings.
            Value::String(raw) => raw
                .parse::<i64>()
                .map(Value::from)
                .map_err(|e| format!("invalid integerValue '{}': {}", raw, e)),
            Value::Number(_) => Ok(inner.clone()),
            _ => Err(format!("invalid integerValue: {}", inner)),
        },
        "mapValue" => {
            let fields = inner
                .get("fields")
                .and_then(Value::as_object)
                .cloned()
                .unwrap_or_default();
            fields_to_json(&fields).map(Value::Object)
        }
        "arrayValue" => inner
            .get("values")
            .and_then(Value::as_array)
            .map(|values| {
                values
                    .iter()
                    .map(typed_value_to_json)
                    .collect::<std::result::Result<Vec<Value>, String>>()
            })
            .unwrap_or_else(|| Ok(Vec::new()))
            .map(Value::Array),
        other => Err(format!("unsupported value type '{}'", other)),
    }
}

fn fields_to_json(fields: &Map<String, Value>) -> std::result::Result<Map<String, Value>, String> {
    fields
        .iter()
        .map(|(key, value)| {
            typed_value_to_json(value)
                .map(|plain| (key.clone(), plain))
                .map_err(|e| format!("field `{}`: {}", key, e))
        })
        .collect()
}

impl FirestoreDocument {
    pub fn id(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or_default()
    }

    pub fn into_player(self) -> Result<Player> {
        let id = self.id().to_string();

        let fields = fields_to_json(&self.fields).map_err(|e| AppError::malformed(&id, e))?;
        let document: PlayerDocument = serde_json::from_value(Value::Object(fields))
            .map_err(|e| AppError::malformed(&id, e.to_string()))?;

        document.into_player(&id)
    }
}

#[async_trait]
impl PlayersService for FirestorePlayersService {
    async fn get_players(&self) -> Result<Vec<Player>> {
        let mut players = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let page = self.fetch_page(page_token.as_deref()).await?;

            for document in page.documents {
                players.push(document.into_player().inspect_err(|e| tracing::warn!("{}", e))?);
            }

            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        tracing::debug!("fetched {} players from firestore", players.len());

        Ok(players)
    }

    async fn get_player_by_id(&self, id: &str) -> Result<Option<Player>> {
        // These would address the collection itself once pushed as a path segment.
        if matches!(id, "" | "." | "..") {
            return Ok(None);
        }

        let request = self.client.get(self.documents_url(Some(id))?);
        let response = self.send(request).await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let document = error_for_status(response)
            .await?
            .json::<FirestoreDocument>()
            .await
            .map_err(|e| AppError::ReqwestError { msg: e.to_string() })?;

        document.into_player().map(Some)
    }
}
