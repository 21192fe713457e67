use std::collections::{BTreeSet, HashSet};

use crate::genesets::CategoryGeneSets;

/// Background genes: the union of every category's genes.
#[derive(Debug, Clone)]
pub struct GeneUniverse {
    genes: Vec<String>,
    members: HashSet<String>,
}

impl GeneUniverse {
    pub fn from_gene_sets(gene_sets: &CategoryGeneSets) -> Self {
        let mut sorted: BTreeSet<&str> = BTreeSet::new();
        for (_, genes) in gene_sets.iter() {
            sorted.extend(genes.iter().map(|g| g.as_str()));
        }
        let genes: Vec<String> = sorted.into_iter().map(str::to_string).collect();
        let members = genes.iter().cloned().collect();
        Self { genes, members }
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    pub fn contains(&self, gene: &str) -> bool {
        self.members.contains(gene)
    }
}

/// Drops repeats (first occurrence wins) and any gene outside `universe`.
pub fn normalize_targets(targets: &[String], universe: &GeneUniverse) -> Vec<String> {
    dedup_preserving_order(targets)
        .into_iter()
        .filter(|g| universe.contains(g))
        .collect()
}

pub fn dedup_preserving_order(ids: &[String]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(ids.len());
    let mut out = Vec::with_capacity(ids.len());
    for id in ids {
        if seen.insert(id.as_str()) {
            out.push(id.clone());
        }
    }
    out
}

/// Categories to test, in test order.
///
/// Without a selection every category is tested in ascending id order. A
/// selection keeps its own order, drops repeats and silently drops ids that
/// have no gene set.
pub fn resolve_selection(gene_sets: &CategoryGeneSets, selection: Option<&[String]>) -> Vec<String> {
    match selection {
        None => gene_sets.categories().map(str::to_string).collect(),
        Some(ids) => dedup_preserving_order(ids)
            .into_iter()
            .filter(|id| gene_sets.contains(id))
            .collect(),
    }
}
