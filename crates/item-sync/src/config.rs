//! API Configuration

use crate::model::ItemId;

/// Address of the item service used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:1337";

/// Where the item service lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Collection endpoint: list and create
    pub fn items_url(&self) -> String {
        format!("{}/items", self.base_url)
    }

    /// Single item endpoint: delete
    pub fn item_url(&self, id: ItemId) -> String {
        format!("{}/items/{}", self.base_url, id)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
