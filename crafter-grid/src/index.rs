use std::collections::HashMap;

use log::debug;
use rayon::prelude::*;

use crate::{equivalent, shape_signature, Grid, ShapeSignature};

/// A catalog entry as seen by the matcher. `result` is opaque here.
#[derive(Clone, Debug)]
pub struct CatalogPattern<R> {
    pub grid: Grid,
    /// Skip trimming and require the raw shape.
    pub exact_match: bool,
    pub result: R,
}

impl<R> CatalogPattern<R> {
    pub fn matches(&self, observed: &Grid) -> bool {
        equivalent(observed, &self.grid, self.exact_match)
    }
}

/// Catalog patterns bucketed by [`ShapeSignature`].
///
/// Built once, then only read. Candidates keep registration order and the first
/// registered pattern wins.
#[derive(Debug)]
pub struct RecipeIndex<R> {
    patterns: Vec<CatalogPattern<R>>,
    buckets: HashMap<ShapeSignature, Vec<usize>>,
}

impl<R> Default for RecipeIndex<R> {
    fn default() -> Self {
        Self {
            patterns: Vec::new(),
            buckets: HashMap::new(),
        }
    }
}

impl<R> RecipeIndex<R> {
    pub fn build(patterns: impl IntoIterator<Item = CatalogPattern<R>>) -> Self {
        let mut index = Self::default();
        for pattern in patterns {
            index.push(pattern);
        }
        index
    }

    fn push(&mut self, pattern: CatalogPattern<R>) {
        let signature = shape_signature(&pattern.grid);
        self.buckets
            .entry(signature)
            .or_default()
            .push(self.patterns.len());
        self.patterns.push(pattern);
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Number of distinct signature buckets.
    pub fn signature_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn patterns(&self) -> impl Iterator<Item = &CatalogPattern<R>> {
        self.patterns.iter()
    }

    pub fn candidates(
        &self,
        signature: &ShapeSignature,
    ) -> impl Iterator<Item = &CatalogPattern<R>> {
        self.buckets
            .get(signature)
            .into_iter()
            .flatten()
            .map(|&i| &self.patterns[i])
    }
}

impl<R: Sync> RecipeIndex<R> {
    /// First registered pattern that `observed` is equivalent to.
    pub fn find(&self, observed: &Grid) -> Option<&CatalogPattern<R>> {
        let signature = shape_signature(observed);
        let Some(bucket) = self.buckets.get(&signature) else {
            debug!("No candidates for signature {signature}");
            return None;
        };
        debug!(
            "Checking {} candidate(s) for signature {signature}",
            bucket.len()
        );
        bucket
            .par_iter()
            .map(|&i| &self.patterns[i])
            .find_first(|pattern| pattern.matches(observed))
    }
}
