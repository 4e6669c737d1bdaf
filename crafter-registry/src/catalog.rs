use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crafter_grid::{CatalogPattern, Grid, RecipeIndex};
use itertools::Itertools;
use log::{debug, info, warn};

use crate::{CatalogError, CraftResult, RecipeDefinition, Refinement, RefinementIndex};

/// Grid dimensions and layer names every catalog pattern has to use.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogSettings {
    pub width: usize,
    pub height: usize,
    pub layers: Vec<String>,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            width: 3,
            height: 3,
            layers: vec!["bottom".into(), "middle".into(), "top".into()],
        }
    }
}

/// Every recipe and refinement the host can match against, in registration order.
#[derive(Debug)]
pub struct Catalog {
    recipes: RecipeIndex<CraftResult>,
    refinements: RefinementIndex,
}

fn checked_count(count: u8, what: &str) -> u8 {
    if count == 0 {
        warn!("{what}: the result count must be at least 1, using 1");
        1
    } else {
        count
    }
}

impl Catalog {
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = RecipeDefinition>,
        settings: &CatalogSettings,
    ) -> Result<Self, CatalogError> {
        let mut patterns = Vec::new();
        let mut refinements = RefinementIndex::default();
        let mut names = HashSet::new();
        for definition in definitions {
            if !names.insert(definition.name.clone()) {
                return Err(CatalogError::DuplicateRecipe(definition.name));
            }
            patterns.extend(Self::register(definition, settings, &mut refinements)?);
        }
        Ok(Self {
            recipes: RecipeIndex::build(patterns),
            refinements,
        })
    }

    /// Loads every `*.json` file under `path`, sorted by file name.
    pub fn load_dir(
        path: impl AsRef<Path>,
        settings: &CatalogSettings,
    ) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let io_error = |source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        };
        let mut files = Vec::new();
        for entry in fs::read_dir(path).map_err(io_error)? {
            let file = entry.map_err(io_error)?.path();
            if file.extension().is_some_and(|extension| extension == "json") {
                files.push(file);
            }
        }
        files.sort();
        debug!("Reading {} recipe file(s) from {:?}", files.len(), path);

        let mut definitions = Vec::new();
        for file in &files {
            definitions.extend(Self::read_file(file)?);
        }
        Self::from_definitions(definitions, settings)
    }

    /// A recipe file holds either one definition or an array of them.
    pub fn read_file(path: &Path) -> Result<Vec<RecipeDefinition>, CatalogError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let parse_error = |source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        };
        let value: serde_json::Value = serde_json::from_str(&content).map_err(parse_error)?;
        if value.is_array() {
            serde_json::from_value(value).map_err(parse_error)
        } else {
            serde_json::from_value(value)
                .map(|definition| vec![definition])
                .map_err(parse_error)
        }
    }

    /// Validates one definition and records its refinements. Returns the recipe
    /// pattern, if the definition has one.
    fn register(
        definition: RecipeDefinition,
        settings: &CatalogSettings,
        refinements: &mut RefinementIndex,
    ) -> Result<Option<CatalogPattern<CraftResult>>, CatalogError> {
        if definition.layers.is_empty() && definition.refinements.is_empty() {
            return Err(CatalogError::NothingToRegister(definition.name));
        }
        if let Some(layer) = definition
            .layers
            .keys()
            .find(|layer| !settings.layers.contains(layer))
        {
            return Err(CatalogError::UnknownLayer {
                recipe: definition.name.clone(),
                layer: layer.clone(),
            });
        }

        let result = CraftResult {
            recipe: definition.name.clone(),
            id: definition.result_id().to_lowercase(),
            count: checked_count(definition.count, &definition.name),
        };

        for refinement in &definition.refinements {
            let empty_field = [
                ("instigator", &refinement.instigator),
                ("target", &refinement.target),
            ]
            .into_iter()
            .find_map(|(field, symbol)| symbol.is_empty().then_some(field));
            if let Some(field) = empty_field {
                return Err(CatalogError::EmptyRefinementField {
                    recipe: definition.name.clone(),
                    field,
                });
            }
        }
        for refinement in definition.refinements {
            info!(
                "Found refinement: {} ({} on {})",
                definition.name, refinement.instigator, refinement.target
            );
            refinements.push(Refinement {
                result: CraftResult {
                    count: checked_count(refinement.count, &definition.name),
                    ..result.clone()
                },
                instigator: refinement.instigator,
                target: refinement.target,
            });
        }

        if definition.layers.is_empty() {
            return Ok(None);
        }
        let grid = Grid::new(settings.width, settings.height, definition.layers).map_err(
            |source| CatalogError::Shape {
                recipe: definition.name.clone(),
                source,
            },
        )?;
        if grid.filled_count() == 0 {
            return Err(CatalogError::EmptyPattern(definition.name));
        }
        let grid = grid.without_empty_layers();
        info!(
            "Found recipe: {} (layers: {})",
            definition.name,
            grid.layer_names().join(", ")
        );
        Ok(Some(CatalogPattern {
            grid,
            exact_match: definition.exact_match,
            result,
        }))
    }

    pub fn recipes(&self) -> &RecipeIndex<CraftResult> {
        &self.recipes
    }

    pub fn refinements(&self) -> &RefinementIndex {
        &self.refinements
    }

    /// Result of the first recipe `observed` matches.
    pub fn craft(&self, observed: &Grid) -> Option<&CraftResult> {
        self.recipes.find(observed).map(|pattern| &pattern.result)
    }
}
