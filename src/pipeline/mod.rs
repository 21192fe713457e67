//! Enrichment run, one stage per step:
//!
//! 1. universe, target normalization and category selection
//! 2. per-category hypergeometric tail test
//! 3. FDR q-values
//! 4. filtering and sorting
//! 5. report files (CLI only)

use thiserror::Error;

pub mod stage1_universe;
pub mod stage3_correct;
pub mod stage4_assemble;
pub mod stage5_report;

use crate::genesets::CategoryGeneSets;
use crate::model::records::{EnrichmentRecord, EnrichmentResult, RunStats};
use crate::model::thresholds::EnrichmentThresholds;
use crate::stats::HypergeomError;
use stage1_universe::run_stage1;
use stage2_test::run_stage2;
use stage3_correct::run_stage3;
use stage4_assemble::run_stage4;

#[derive(Debug, Error)]
pub enum EnrichError {
    #[error("input contract violation in category '{category}': {source}")]
    ContractViolation {
        category: String,
        source: HypergeomError,
    },
    #[error("gene universe is empty: no category lists any gene")]
    EmptyUniverse,
    #[error("none of the {requested} target genes is in the gene universe")]
    EmptyTarget { requested: usize },
    #[error("invalid threshold: {0}")]
    InvalidThreshold(String),
}

#[derive(Debug, Clone)]
pub struct EnrichmentOutput {
    pub result: EnrichmentResult,
    /// Every tested category, in test order.
    pub records: Vec<EnrichmentRecord>,
    pub stats: RunStats,
}

/// Runs the full enrichment for one target list.
///
/// `progress` receives the loop counter every
/// [`stage2_test::PROGRESS_EVERY`] categories and has no effect on the
/// output.
pub fn run_enrichment(
    targets: &[String],
    gene_sets: &CategoryGeneSets,
    selection: Option<&[String]>,
    thresholds: &EnrichmentThresholds,
    progress: Option<&mut dyn FnMut(usize)>,
) -> Result<EnrichmentOutput, EnrichError> {
    thresholds
        .validate()
        .map_err(EnrichError::InvalidThreshold)?;

    let stage1 = run_stage1(targets, gene_sets, selection)?;
    let tested = run_stage2(&stage1, gene_sets, progress)?;
    let records = run_stage3(tested);
    let result = run_stage4(&records, thresholds);

    let stats = RunStats {
        n_universe: stage1.universe.len(),
        n_targets_input: targets.len(),
        n_targets_unique: stage1.n_targets_unique,
        n_targets_used: stage1.targets.len(),
        n_categories_available: gene_sets.len(),
        n_categories_tested: records.len(),
        n_significant: result.len(),
    };
    if result.is_empty() {
        tracing::warn!("no category passed both thresholds");
    }
    tracing::info!(
        tested = stats.n_categories_tested,
        significant = stats.n_significant,
        fdr_thresh = thresholds.fdr_thresh,
        p_thresh = thresholds.p_thresh,
        "enrichment finished"
    );

    Ok(EnrichmentOutput {
        result,
        records,
        stats,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/tests.rs"]
mod tests;
