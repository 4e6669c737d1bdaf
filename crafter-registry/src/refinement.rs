use std::collections::HashMap;

use crafter_grid::{Grid, Symbol};

use crate::CraftResult;

#[derive(Clone, Debug, PartialEq)]
pub struct Refinement {
    pub instigator: Symbol,
    pub target: Symbol,
    pub result: CraftResult,
}

/// Refinements keyed by the item they are applied to.
#[derive(Debug, Default)]
pub struct RefinementIndex {
    by_target: HashMap<Symbol, Vec<Refinement>>,
    len: usize,
}

impl RefinementIndex {
    pub fn push(&mut self, refinement: Refinement) {
        self.by_target
            .entry(refinement.target.clone())
            .or_default()
            .push(refinement);
        self.len += 1;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// First registered refinement of `target` that is triggered by `instigator`.
    pub fn find(&self, target: &Symbol, instigator: &Symbol) -> Option<&Refinement> {
        self.by_target
            .get(target)?
            .iter()
            .find(|refinement| &refinement.instigator == instigator)
    }

    /// Only applies when the grid holds a single item.
    pub fn find_for(&self, observed: &Grid, instigator: &Symbol) -> Option<&Refinement> {
        self.find(observed.sole_symbol()?, instigator)
    }
}
