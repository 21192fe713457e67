use crate::report::{SummaryData, TopCategory, format_prob};

pub fn render_report_text(data: &SummaryData) -> String {
    let mut out = String::new();

    out.push_str("GO Term Enrichment Report\n");
    out.push_str("=========================\n\n");

    out.push_str("1. Inputs\n");
    out.push_str(&format!("Gene sets: {}\n", data.input.gene_sets));
    out.push_str(&format!("Targets: {}\n", data.input.targets));
    if let Some(categories) = &data.input.categories {
        out.push_str(&format!("Category selection: {}\n", categories));
    }
    out.push('\n');

    let s = &data.stats;
    out.push_str("2. Universe\n");
    out.push_str(&format!("Universe genes (N): {}\n", s.n_universe));
    out.push_str(&format!(
        "Target genes: {} listed, {} unique, {} in universe (n)\n",
        s.n_targets_input, s.n_targets_unique, s.n_targets_used
    ));
    out.push_str(&format!(
        "Categories: {} available, {} tested\n\n",
        s.n_categories_available, s.n_categories_tested
    ));

    out.push_str("3. Enriched categories\n");
    out.push_str(&format!(
        "Thresholds: q < {}, p < {}\n",
        data.thresholds.fdr_thresh, data.thresholds.p_thresh
    ));
    out.push_str(&format!("Significant: {}\n", s.n_significant));
    if data.top.is_empty() {
        out.push_str("No category passed both thresholds.\n");
    } else {
        out.push_str(&format!(
            "{}\n",
            ["category", "q_value", "p_value", "overlap", "genes"].join("\t")
        ));
        for row in &data.top {
            out.push_str(&format_row(row));
            out.push('\n');
        }
        if s.n_significant > data.top.len() {
            out.push_str(&format!(
                "... {} more in enrichment.tsv\n",
                s.n_significant - data.top.len()
            ));
        }
    }

    out
}

fn format_row(row: &TopCategory) -> String {
    format!(
        "{}\t{}\t{}\t{}/{}\t{}",
        row.category,
        format_prob(row.fdr_q_value),
        format_prob(row.p_value),
        row.overlap,
        row.category_size,
        row.genes
    )
}
