//! schema.org `ItemList` structured data
//!
//! Builds the JSON-LD object search engines read to discover the listed posts
//! and wraps it in a `<script type="application/ld+json">` tag.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::FeedItem;

const SCHEMA_CONTEXT: &str = "https://schema.org";

/// schema.org `ItemList`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemListSchema {
    #[serde(rename = "@context")]
    pub context: String,

    #[serde(rename = "@type")]
    pub kind: String,

    #[serde(rename = "itemListElement")]
    pub item_list_element: Vec<ListItemSchema>,
}

/// schema.org `ListItem`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListItemSchema {
    #[serde(rename = "@type")]
    pub kind: String,

    /// 1-based
    pub position: usize,

    pub url: String,

    pub name: String,
}

impl ItemListSchema {
    /// Build the list from the first `limit` items
    pub fn from_items(items: &[FeedItem], limit: usize) -> Self {
        let item_list_element = items
            .iter()
            .take(limit)
            .enumerate()
            .map(|(i, item)| ListItemSchema {
                kind: "ListItem".to_string(),
                position: i + 1,
                url: item.link.clone(),
                name: item.title.clone(),
            })
            .collect();

        Self {
            context: SCHEMA_CONTEXT.to_string(),
            kind: "ItemList".to_string(),
            item_list_element,
        }
    }

    pub fn len(&self) -> usize {
        self.item_list_element.len()
    }

    pub fn is_empty(&self) -> bool {
        self.item_list_element.is_empty()
    }

    /// Serialize into a JSON-LD script tag
    pub fn to_script_tag(&self) -> Result<String> {
        let json = serde_json::to_string(self)?;
        Ok(format!(r#"<script type="application/ld+json">{json}</script>"#))
    }
}
