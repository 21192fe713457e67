use serde::Serialize;

/// Outcome of testing one category.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichmentRecord {
    pub category: String,
    pub p_value: f64,
    pub q_value: f64,
    /// Category genes present in the targets, in category order.
    pub overlap_genes: Vec<String>,
    pub category_size: usize,
}

impl EnrichmentRecord {
    pub fn overlap(&self) -> usize {
        self.overlap_genes.len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichmentRow {
    pub category: String,
    pub fdr_q_value: f64,
    pub p_value: f64,
    /// Overlap genes joined with `;`.
    pub genes: String,
}

/// Significant categories sorted by ascending p-value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnrichmentResult {
    pub rows: Vec<EnrichmentRow>,
}

impl EnrichmentResult {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub n_universe: usize,
    pub n_targets_input: usize,
    pub n_targets_unique: usize,
    pub n_targets_used: usize,
    pub n_categories_available: usize,
    pub n_categories_tested: usize,
    pub n_significant: usize,
}
