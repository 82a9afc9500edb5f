use std::sync::Arc;

use async_trait::async_trait;

use crate::content::model::{HistoryPage, HomeBanner, StorePage};
use crate::errors::Result;

#[async_trait]
pub trait ContentService {
    async fn get_home_banner(&self) -> Result<HomeBanner>;
    async fn get_history(&self) -> Result<HistoryPage>;
    async fn get_store(&self) -> Result<StorePage>;
}

pub type ContentServiceHandle = Arc<dyn ContentService + Send + Sync>;
