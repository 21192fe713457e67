use std::collections::{BTreeMap, BTreeSet, HashSet};

use crate::genesets::{Annotation, CategoryGeneSets};

impl CategoryGeneSets {
    /// Builds from a category → genes mapping.
    ///
    /// Repeated genes within a category keep their first position. Repeated
    /// categories are merged in input order.
    pub fn from_mapping<I, C, G, S>(mapping: I) -> Self
    where
        I: IntoIterator<Item = (C, G)>,
        C: Into<String>,
        G: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut sets: BTreeMap<String, Vec<String>> = BTreeMap::new();
        let mut seen: BTreeMap<String, HashSet<String>> = BTreeMap::new();
        for (category, genes) in mapping {
            let category = category.into();
            let list = sets.entry(category.clone()).or_default();
            let seen = seen.entry(category).or_default();
            for gene in genes {
                let gene = gene.into();
                if seen.insert(gene.clone()) {
                    list.push(gene);
                }
            }
        }
        Self { sets }
    }

    /// Builds from `(gene, category)` rows, one category per distinct
    /// category value, genes deduplicated and sorted.
    pub fn from_relation<'a, I>(rows: I) -> Self
    where
        I: IntoIterator<Item = &'a Annotation>,
    {
        let mut grouped: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for row in rows {
            grouped
                .entry(row.category.clone())
                .or_default()
                .insert(row.gene.clone());
        }
        let sets = grouped
            .into_iter()
            .map(|(category, genes)| (category, genes.into_iter().collect()))
            .collect();
        Self { sets }
    }
}
