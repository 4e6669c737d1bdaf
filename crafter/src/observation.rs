use std::collections::BTreeMap;

use crafter_grid::{Grid, Symbol};
use crafter_registry::{Catalog, CatalogSettings, CraftResult};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// One arrangement read from the host, cells already resolved to item identifiers.
#[derive(Deserialize, Debug)]
pub struct Observation {
    pub layers: BTreeMap<String, Vec<Symbol>>,
    /// Item held by the player, for refinements.
    #[serde(default)]
    pub instigator: Option<Symbol>,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct Reply<'a> {
    pub recipe: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u8>,
}

impl<'a> From<Option<&'a CraftResult>> for Reply<'a> {
    fn from(result: Option<&'a CraftResult>) -> Self {
        Self {
            recipe: result.map(|result| result.recipe.as_str()),
            id: result.map(|result| result.id.as_str()),
            count: result.map(|result| result.count),
        }
    }
}

impl Observation {
    pub fn parse(line: &str) -> Result<Self, InputError> {
        Ok(serde_json::from_str(line)?)
    }

    pub fn into_grid(self, settings: &CatalogSettings) -> Result<Grid, InputError> {
        if let Some(layer) = self
            .layers
            .keys()
            .find(|layer| !settings.layers.contains(layer))
        {
            return Err(InputError::UnknownLayer(layer.clone()));
        }
        let grid = Grid::new(settings.width, settings.height, self.layers)?;
        Ok(grid.without_empty_layers())
    }
}

/// A refinement takes precedence when the player holds an item; otherwise the
/// recipes are matched.
pub fn resolve<'a>(
    catalog: &'a Catalog,
    settings: &CatalogSettings,
    line: &str,
) -> Result<Reply<'a>, InputError> {
    let observation = Observation::parse(line)?;
    let instigator = observation.instigator.clone().filter(|held| !held.is_empty());
    let grid = observation.into_grid(settings)?;

    if let Some(instigator) = instigator {
        if let Some(refinement) = catalog.refinements().find_for(&grid, &instigator) {
            debug!("Refinement: {} on {}", instigator, refinement.target);
            return Ok(Reply::from(Some(&refinement.result)));
        }
    }
    Ok(Reply::from(catalog.craft(&grid)))
}
