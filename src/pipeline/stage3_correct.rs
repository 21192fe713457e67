use crate::model::records::EnrichmentRecord;
use crate::pipeline::stage2_test::TestedCategory;
use crate::stats::fdr::fdr_q_values;

/// Attaches q-values computed over every tested category.
pub fn run_stage3(tested: Vec<TestedCategory>) -> Vec<EnrichmentRecord> {
    let p_values: Vec<f64> = tested.iter().map(|t| t.p_value).collect();
    let q_values = fdr_q_values(&p_values);

    tested
        .into_iter()
        .zip(q_values)
        .map(|(t, q_value)| EnrichmentRecord {
            category: t.category,
            p_value: t.p_value,
            q_value,
            overlap_genes: t.overlap_genes,
            category_size: t.category_size,
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_correct.rs"]
mod tests;
