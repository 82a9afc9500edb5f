use serde::{Deserialize, Serialize};

use crate::players::roster::RosterView;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub image: String,
    pub label: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct HistoryPage {
    pub title: String, // i.g., "Since 1979".
    pub description: String,
    pub image: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct StorePage {
    pub title: String,
    pub products: Vec<Product>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct HomeBanner {
    pub title: String,
    pub subtitle: String,
    pub since: String,
    pub blurb: String,
    pub image: String,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Link {
    pub label: String,
    pub href: String,
}

impl Link {
    pub fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
        }
    }
}

// Landing screen: banner, featured players and a preview of the store.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HomePage {
    pub banner: HomeBanner,
    pub featured: RosterView,
    pub full_roster: Link,
    pub store_title: String,
    pub store_preview: Vec<Product>,
    pub store: Link,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct NotFoundPage {
    pub title: String,
    pub message: String,
    pub home: Link,
}

impl Default for NotFoundPage {
    fn default() -> Self {
        Self {
            title: "¡Ups!".to_string(),
            message: "Esta pantalla no existe.".to_string(),
            home: Link::new("Ir al inicio", "/"),
        }
    }
}
