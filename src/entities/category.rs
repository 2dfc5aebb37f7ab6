// 🏷️ Category Catalog - Fixed id → Category table
//
// The category set is static: four categories (ids 1-4), rebuilt fresh per
// run and passed explicitly into the loader. Offers referencing an unknown
// id resolve to no category and never survive the eligibility filter.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A promotional category. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
}

impl Category {
    pub fn new(id: u32, name: &str) -> Self {
        Category {
            id,
            name: name.to_string(),
        }
    }
}

/// Lookup table over the static category set.
pub struct CategoryCatalog {
    by_id: HashMap<u32, Category>,
}

impl CategoryCatalog {
    /// Build a catalog from an explicit category list.
    pub fn new(categories: Vec<Category>) -> Self {
        CategoryCatalog {
            by_id: categories.into_iter().map(|c| (c.id, c)).collect(),
        }
    }

    /// The fixed four-category set used by the pipeline.
    pub fn with_defaults() -> Self {
        CategoryCatalog::new(vec![
            Category::new(1, "Restaurant"),
            Category::new(2, "Retail"),
            Category::new(3, "Hotel"),
            Category::new(4, "Activity"),
        ])
    }

    /// Resolve a category by id. Unknown ids yield None.
    pub fn find_by_id(&self, id: u32) -> Option<&Category> {
        self.by_id.get(&id)
    }

    pub fn count(&self) -> usize {
        self.by_id.len()
    }
}

impl Default for CategoryCatalog {
    fn default() -> Self {
        Self::with_defaults()
    }
}
