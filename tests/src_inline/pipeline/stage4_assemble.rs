use super::*;

fn record(category: &str, p_value: f64, q_value: f64, genes: &[&str]) -> EnrichmentRecord {
    EnrichmentRecord {
        category: category.to_string(),
        p_value,
        q_value,
        overlap_genes: genes.iter().map(|g| g.to_string()).collect(),
        category_size: 10,
    }
}

#[test]
fn test_filter_and_sort() {
    let records = vec![
        record("GO:1", 5e-4, 0.2, &["A", "B"]),
        record("GO:2", 1e-6, 0.01, &["C"]),
        record("GO:3", 1e-3, 0.01, &["D"]),
        record("GO:4", 1e-5, 0.25, &["E"]),
        record("GO:5", 1e-4, 0.3, &["F"]),
    ];
    let result = run_stage4(&records, &EnrichmentThresholds::default());
    let categories: Vec<&str> = result.rows.iter().map(|r| r.category.as_str()).collect();
    assert_eq!(categories, vec!["GO:2", "GO:1"]);
    assert_eq!(result.rows[1].genes, "A;B");
    assert_eq!(result.rows[1].fdr_q_value, 0.2);
    assert_eq!(result.rows[1].p_value, 5e-4);
}

#[test]
fn test_empty_overlap_joins_to_empty_string() {
    let records = vec![record("GO:1", 1e-9, 1e-9, &[])];
    let result = run_stage4(&records, &EnrichmentThresholds::default());
    assert_eq!(result.rows[0].genes, "");
}

#[test]
fn test_nothing_passes() {
    let records = vec![record("GO:1", 1.0, 1.0, &["A"])];
    assert!(run_stage4(&records, &EnrichmentThresholds::default()).is_empty());
    assert!(run_stage4(&[], &EnrichmentThresholds::default()).is_empty());
}
