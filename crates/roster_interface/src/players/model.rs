use serde::{Deserialize, Serialize};

use crate::errors::{AppError, Result};

// Position labels in the order the filter chips are shown.
pub const POSITIONS: [&str; 5] = ["Base", "Escolta", "Alero", "Ala-Pívot", "Pívot"];

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String, // Identifier assigned by the document store.
    pub name: String,
    pub position: String,
    pub age: String,
    pub height: String, // In cm.
    pub number: u32,
    pub team: String,
    pub image_url: String,
    pub video_url: Option<String>,
}

/// A scalar as the store may hold it. Older documents keep `age` and
/// `height` as strings while newer ones use numbers.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum Scalar {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    fn into_text(self) -> String {
        match self {
            Scalar::Integer(value) => value.to_string(),
            Scalar::Float(value) if value.fract() == 0.0 && value.abs() < i64::MAX as f64 => {
                format!("{}", value as i64)
            }
            Scalar::Float(value) => value.to_string(),
            Scalar::Text(value) => value,
        }
    }

    fn into_number(self) -> Option<u32> {
        match self {
            Scalar::Integer(value) => u32::try_from(value).ok(),
            Scalar::Float(value) if value.fract() == 0.0 && value >= 0.0 => {
                u32::try_from(value as i64).ok()
            }
            Scalar::Float(_) => None,
            Scalar::Text(value) => value.trim().parse().ok(),
        }
    }
}

/// Raw shape of a player document, before validation.
///
/// Every field is optional here so that a missing field is reported by name
/// through [`AppError::MalformedRecord`] instead of a generic decode error.
#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDocument {
    pub name: Option<String>,
    pub position: Option<String>,
    pub age: Option<Scalar>,
    pub height: Option<Scalar>,
    pub number: Option<Scalar>,
    pub team: Option<String>,
    pub image_url: Option<String>,
    pub video_url: Option<String>,
}

fn required<T>(id: &str, field: &str, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| AppError::malformed(id, format!("missing field `{}`", field)))
}

impl PlayerDocument {
    pub fn into_player(self, id: &str) -> Result<Player> {
        if id.trim().is_empty() {
            return Err(AppError::malformed(id, "empty document identifier"));
        }

        let name = required(id, "name", self.name)?;
        if name.trim().is_empty() {
            return Err(AppError::malformed(id, "empty field `name`"));
        }

        let position = required(id, "position", self.position)?;
        let age = required(id, "age", self.age)?.into_text();
        let height = required(id, "height", self.height)?.into_text();

        let number = required(id, "number", self.number)?;
        let number = number
            .clone()
            .into_number()
            .ok_or_else(|| AppError::malformed(id, format!("invalid `number`: {:?}", number)))?;

        Ok(Player {
            id: id.to_string(),
            name,
            position,
            age,
            height,
            number,
            team: required(id, "team", self.team)?,
            image_url: required(id, "imageUrl", self.image_url)?,
            video_url: self.video_url.filter(|url| !url.trim().is_empty()),
        })
    }
}

/// A player document carrying its own identifier, as found in seed files.
#[derive(Debug, Deserialize)]
pub struct PlayerRecord {
    pub id: String,
    #[serde(flatten)]
    pub document: PlayerDocument,
}

impl PlayerRecord {
    pub fn into_player(self) -> Result<Player> {
        self.document.into_player(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document(value: serde_json::Value) -> PlayerDocument {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn valid_document_becomes_player() {
        let doc = document(json!({
            "name": "Ana",
            "position": "Base",
            "age": "24",
            "height": 178,
            "number": 7,
            "team": "DevFlow",
            "imageUrl": "https://cdn/ana.png",
            "videoUrl": "https://cdn/ana.mp4",
        }));

        let player = doc.into_player("p1").unwrap();

        assert_eq!(player.id, "p1");
        assert_eq!(player.age, "24");
        assert_eq!(player.height, "178");
        assert_eq!(player.number, 7);
        assert_eq!(player.video_url.as_deref(), Some("https://cdn/ana.mp4"));
    }

    #[test]
    fn empty_video_url_is_absent() {
        let doc = document(json!({
            "name": "Luis",
            "position": "Alero",
            "age": 30,
            "height": "201",
            "number": "12",
            "team": "DevFlow",
            "imageUrl": "https://cdn/luis.png",
            "videoUrl": "",
        }));

        let player = doc.into_player("p2").unwrap();

        assert_eq!(player.number, 12);
        assert_eq!(player.video_url, None);
    }

    #[test]
    fn missing_field_is_malformed() {
        let doc = document(json!({
            "name": "Ana",
            "position": "Base",
            "age": "24",
            "height": "178",
            "number": 7,
            "imageUrl": "https://cdn/ana.png",
        }));

        match doc.into_player("p1") {
            Err(AppError::MalformedRecord { id, msg }) => {
                assert_eq!(id, "p1");
                assert!(msg.contains("team"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn first_missing_field_is_reported_in_document_order() {
        let doc = document(json!({ "name": "Ana" }));

        match doc.into_player("p1") {
            Err(AppError::MalformedRecord { msg, .. }) => assert!(msg.contains("position")),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn huge_whole_float_keeps_its_value() {
        assert_eq!(Scalar::Float(1e30).into_text(), "1000000000000000000000000000000");
        assert_eq!(Scalar::Float(201.0).into_text(), "201");
        assert_eq!(Scalar::Float(-1e30).into_number(), None);
    }

    #[test]
    fn negative_number_is_malformed() {
        let doc = document(json!({
            "name": "Ana",
            "position": "Base",
            "age": "24",
            "height": "178",
            "number": -3,
            "team": "DevFlow",
            "imageUrl": "https://cdn/ana.png",
        }));

        assert!(matches!(
            doc.into_player("p1"),
            Err(AppError::MalformedRecord { .. })
        ));
    }

    #[test]
    fn empty_identifier_is_malformed() {
        let doc = document(json!({ "name": "Ana" }));
        assert!(matches!(
            doc.into_player(" "),
            Err(AppError::MalformedRecord { .. })
        ));
    }

    #[test]
    fn record_carries_its_identifier() {
        let record: PlayerRecord = serde_json::from_value(json!({
            "id": "42",
            "name": "Marta",
            "position": "Pívot",
            "age": "28",
            "height": "195",
            "number": 42,
            "team": "DevFlow",
            "imageUrl": "https://cdn/marta.png",
        }))
        .unwrap();

        let player = record.into_player().unwrap();
        assert_eq!(player.id, "42");
        assert_eq!(player.position, "Pívot");
    }

    #[test]
    fn player_serializes_camel_case() {
        let player = Player {
            id: "1".to_string(),
            name: "Ana".to_string(),
            position: "Base".to_string(),
            age: "24".to_string(),
            height: "178".to_string(),
            number: 7,
            team: "DevFlow".to_string(),
            image_url: "img".to_string(),
            video_url: None,
        };

        let value = serde_json::to_value(&player).unwrap();
        assert_eq!(value["imageUrl"], "img");
        assert!(value["videoUrl"].is_null());
    }
}
