use std::collections::BTreeMap;

use crafter_grid::Symbol;
use serde::{Deserialize, Serialize};

const fn default_count() -> u8 {
    1
}

/// One entry of a recipe file, as written by catalog authors.
///
/// ```json
/// {
///     "name": "torch",
///     "layers": { "middle": [" ", "coal", " ", " ", "stick", " ", " ", " ", " "] },
///     "count": 4
/// }
/// ```
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct RecipeDefinition {
    pub name: String,
    /// Layer name to row-major cells. May be left out for refinement-only entries.
    #[serde(default, alias = "recipe")]
    pub layers: BTreeMap<String, Vec<Symbol>>,
    #[serde(default, alias = "full_match")]
    pub exact_match: bool,
    /// Item produced. Without one the recipe produces the item it is named after.
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default = "default_count", alias = "result_count")]
    pub count: u8,
    #[serde(default)]
    pub refinements: Vec<RefinementDefinition>,
}

impl RecipeDefinition {
    pub fn result_id(&self) -> &str {
        self.result.as_deref().unwrap_or(&self.name)
    }
}

/// Applying `instigator` to a lone `target` in the grid yields the recipe's result.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct RefinementDefinition {
    pub instigator: Symbol,
    pub target: Symbol,
    #[serde(default = "default_count", alias = "result_count")]
    pub count: u8,
}

/// What a successful match hands back to the host.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct CraftResult {
    pub recipe: String,
    pub id: String,
    pub count: u8,
}

#[cfg(test)]
mod test {
    use super::RecipeDefinition;
    use crafter_grid::Symbol;

    #[test]
    fn defaults() {
        let definition: RecipeDefinition = serde_json::from_str(
            r#"{ "name": "Lantern", "layers": { "middle": ["Torch", "", " ", " ", " ", " ", " ", " ", " "] } }"#,
        )
        .unwrap();
        assert!(!definition.exact_match);
        assert_eq!(definition.count, 1);
        assert_eq!(definition.result_id(), "Lantern");
        assert!(definition.refinements.is_empty());
        assert_eq!(definition.layers["middle"][0], Symbol::new("torch"));
        assert!(definition.layers["middle"][1].is_empty());
    }

    #[test]
    fn original_field_names() {
        let definition: RecipeDefinition = serde_json::from_str(
            r#"{
                "name": "planks",
                "full_match": true,
                "result": "oak_planks",
                "result_count": 4,
                "refinements": [{ "instigator": "Axe", "target": "log", "result_count": 2 }]
            }"#,
        )
        .unwrap();
        assert!(definition.exact_match);
        assert_eq!(definition.result_id(), "oak_planks");
        assert_eq!(definition.count, 4);
        assert!(definition.layers.is_empty());
        assert_eq!(definition.refinements[0].instigator, Symbol::new("axe"));
        assert_eq!(definition.refinements[0].count, 2);
    }

    #[test]
    fn count_must_fit_a_byte() {
        let parsed = serde_json::from_str::<RecipeDefinition>(r#"{ "name": "x", "count": 300 }"#);
        assert!(parsed.is_err());
    }
}
