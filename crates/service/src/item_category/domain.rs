use models::item_category::{self, ItemCategoryValues};
use serde::{Deserialize, Serialize};

use crate::lookup::Lookup;

/// Validated input for creating or updating a category.
///
/// The parent is named either by id or by key, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCategoryRequest {
    pub name: String,
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub parent_item_category_id: Option<i32>,
    #[serde(default)]
    pub parent_item_category_key: Option<String>,
}

impl ItemCategoryRequest {
    pub fn parent(&self) -> Option<Lookup> {
        match (&self.parent_item_category_id, &self.parent_item_category_key) {
            (Some(id), _) => Some(Lookup::ById(*id)),
            (None, Some(key)) => Some(Lookup::ByKey(key.clone())),
            (None, None) => None,
        }
    }

    pub fn values(&self, parent_item_category_id: Option<i32>) -> ItemCategoryValues {
        ItemCategoryValues {
            key: self.key.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            parent_item_category_id,
        }
    }
}

/// A category with its parent and direct children attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemCategoryNode {
    #[serde(flatten)]
    pub category: item_category::Model,
    #[serde(rename = "ParentItemCategory")]
    pub parent: Option<item_category::Model>,
    #[serde(rename = "ChildItemCategories")]
    pub children: Vec<item_category::Model>,
}

impl ItemCategoryNode {
    pub fn id(&self) -> i32 { self.category.id }
}
