use crate::model::records::{EnrichmentRecord, EnrichmentResult, EnrichmentRow};
use crate::model::thresholds::EnrichmentThresholds;

pub const GENE_DELIMITER: &str = ";";

pub fn run_stage4(
    records: &[EnrichmentRecord],
    thresholds: &EnrichmentThresholds,
) -> EnrichmentResult {
    let mut rows: Vec<EnrichmentRow> = records
        .iter()
        .filter(|r| thresholds.passes(r.p_value, r.q_value))
        .map(|r| EnrichmentRow {
            category: r.category.clone(),
            fdr_q_value: r.q_value,
            p_value: r.p_value,
            genes: r.overlap_genes.join(GENE_DELIMITER),
        })
        .collect();

    rows.sort_by(|a, b| a.p_value.total_cmp(&b.p_value));

    EnrichmentResult { rows }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_assemble.rs"]
mod tests;
