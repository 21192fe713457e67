use crate::genesets::universe::{dedup_preserving_order, normalize_targets, resolve_selection};
use crate::genesets::{CategoryGeneSets, GeneUniverse};
use crate::pipeline::EnrichError;

#[derive(Debug, Clone)]
pub struct Stage1Output {
    pub universe: GeneUniverse,
    /// Unique targets present in the universe, in first-seen order.
    pub targets: Vec<String>,
    pub n_targets_unique: usize,
    /// Categories to test, in test order.
    pub categories: Vec<String>,
}

pub fn run_stage1(
    targets: &[String],
    gene_sets: &CategoryGeneSets,
    selection: Option<&[String]>,
) -> Result<Stage1Output, EnrichError> {
    if gene_sets.is_empty() {
        return Err(EnrichError::EmptyUniverse);
    }
    let universe = GeneUniverse::from_gene_sets(gene_sets);
    if universe.is_empty() {
        return Err(EnrichError::EmptyUniverse);
    }

    let n_targets_unique = dedup_preserving_order(targets).len();
    let normalized = normalize_targets(targets, &universe);
    if normalized.is_empty() {
        return Err(EnrichError::EmptyTarget {
            requested: targets.len(),
        });
    }
    let dropped = n_targets_unique - normalized.len();
    if dropped > 0 {
        tracing::warn!(
            dropped,
            kept = normalized.len(),
            "target genes absent from the gene universe were excluded"
        );
    }

    let categories = resolve_selection(gene_sets, selection);
    if let Some(requested) = selection {
        let unknown = dedup_preserving_order(requested).len() - categories.len();
        if unknown > 0 {
            tracing::debug!(unknown, "selected categories without a gene set were dropped");
        }
    }

    tracing::info!(
        universe = universe.len(),
        targets = normalized.len(),
        categories = categories.len(),
        "universe built"
    );

    Ok(Stage1Output {
        universe,
        targets: normalized,
        n_targets_unique,
        categories,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_universe.rs"]
mod tests;
