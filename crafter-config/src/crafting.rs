use crafter_registry::CatalogSettings;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Footprint of the crafting grid and the names of its stacked layers.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct CraftingConfig {
    pub width: usize,
    pub height: usize,
    /// Layer names, bottom to top.
    pub layers: Vec<String>,
}

impl Default for CraftingConfig {
    fn default() -> Self {
        Self {
            width: 3,
            height: 3,
            layers: vec!["bottom".into(), "middle".into(), "top".into()],
        }
    }
}

impl CraftingConfig {
    pub fn validate(&self) {
        assert!(
            self.width > 0 && self.height > 0,
            "Crafting grid must be at least 1x1"
        );
        assert!(
            !self.layers.is_empty(),
            "Crafting grid needs at least one layer"
        );
        assert!(
            self.layers.iter().all_unique(),
            "Crafting layer names must be unique"
        );
    }

    pub fn catalog_settings(&self) -> CatalogSettings {
        CatalogSettings {
            width: self.width,
            height: self.height,
            layers: self.layers.clone(),
        }
    }
}
