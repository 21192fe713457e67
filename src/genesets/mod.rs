use std::collections::BTreeMap;

pub mod build;
pub mod universe;

pub use universe::GeneUniverse;

/// Category id to the unique genes annotated with it.
///
/// Each gene list is in the category's canonical order: first occurrence for
/// mapping input, ascending for tabular input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryGeneSets {
    sets: BTreeMap<String, Vec<String>>,
}

impl CategoryGeneSets {
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub fn get(&self, category: &str) -> Option<&[String]> {
        self.sets.get(category).map(|v| v.as_slice())
    }

    pub fn contains(&self, category: &str) -> bool {
        self.sets.contains_key(category)
    }

    /// Category ids in ascending order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.sets.keys().map(|k| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.sets.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

/// One `(gene, category)` row of a tabular annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub gene: String,
    pub category: String,
}

#[cfg(test)]
#[path = "../../tests/src_inline/genesets/tests.rs"]
mod tests;
