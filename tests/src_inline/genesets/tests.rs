use super::universe::{normalize_targets, resolve_selection};
use super::*;

fn ids(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn annotation(gene: &str, category: &str) -> Annotation {
    Annotation {
        gene: gene.to_string(),
        category: category.to_string(),
    }
}

#[test]
fn test_mapping_dedups_preserving_order() {
    let sets = CategoryGeneSets::from_mapping(vec![("GO:1", vec!["C", "A", "C", "B"])]);
    assert_eq!(sets.get("GO:1").unwrap(), ids(&["C", "A", "B"]).as_slice());
}

#[test]
fn test_mapping_merges_repeated_categories() {
    let sets = CategoryGeneSets::from_mapping(vec![
        ("GO:1", vec!["A"]),
        ("GO:2", vec!["B"]),
        ("GO:1", vec!["C", "A"]),
    ]);
    assert_eq!(sets.len(), 2);
    assert_eq!(sets.get("GO:1").unwrap(), ids(&["A", "C"]).as_slice());
}

#[test]
fn test_relation_groups_by_category() {
    let rows = vec![
        annotation("A", "GO:1"),
        annotation("B", "GO:1"),
        annotation("A", "GO:2"),
        annotation("B", "GO:1"),
    ];
    let sets = CategoryGeneSets::from_relation(&rows);
    let expected = CategoryGeneSets::from_mapping(vec![("GO:1", vec!["A", "B"]), ("GO:2", vec!["A"])]);
    assert_eq!(sets, expected);
}

#[test]
fn test_relation_sorts_genes() {
    let rows = vec![annotation("Z", "GO:1"), annotation("M", "GO:1"), annotation("A", "GO:1")];
    let sets = CategoryGeneSets::from_relation(&rows);
    assert_eq!(sets.get("GO:1").unwrap(), ids(&["A", "M", "Z"]).as_slice());
}

#[test]
fn test_universe_is_sorted_union() {
    let sets = CategoryGeneSets::from_mapping(vec![
        ("GO:1", vec!["C", "A", "B"]),
        ("GO:2", vec!["E", "A"]),
        ("GO:3", Vec::<&str>::new()),
    ]);
    let universe = GeneUniverse::from_gene_sets(&sets);
    assert_eq!(universe.len(), 4);
    for gene in ["A", "B", "C", "E"] {
        assert!(universe.contains(gene));
    }
    assert!(universe.contains("E"));
    assert!(!universe.contains("D"));
}

#[test]
fn test_empty_universe() {
    let universe = GeneUniverse::from_gene_sets(&CategoryGeneSets::default());
    assert!(universe.is_empty());
    assert_eq!(universe.len(), 0);
}

#[test]
fn test_normalize_targets_dedups_in_order() {
    let sets = CategoryGeneSets::from_mapping(vec![("GO:1", vec!["A", "B", "C"])]);
    let universe = GeneUniverse::from_gene_sets(&sets);
    let targets = normalize_targets(&ids(&["A", "A", "B"]), &universe);
    assert_eq!(targets, ids(&["A", "B"]));
}

#[test]
fn test_normalize_targets_drops_unknown_without_correction() {
    let sets = CategoryGeneSets::from_mapping(vec![("GO:1", vec!["ACTB", "GAPDH"])]);
    let universe = GeneUniverse::from_gene_sets(&sets);
    let targets = normalize_targets(&ids(&["gapdh", "XYZ", "ACTB", "GAPDH"]), &universe);
    assert_eq!(targets, ids(&["ACTB", "GAPDH"]));
}

#[test]
fn test_resolve_selection_defaults_to_sorted_keys() {
    let sets = CategoryGeneSets::from_mapping(vec![
        ("GO:3", vec!["A"]),
        ("GO:1", vec!["B"]),
        ("GO:2", vec!["C"]),
    ]);
    assert_eq!(resolve_selection(&sets, None), ids(&["GO:1", "GO:2", "GO:3"]));
}

#[test]
fn test_resolve_selection_keeps_order_and_drops_unknown() {
    let sets = CategoryGeneSets::from_mapping(vec![("GO:1", vec!["A"]), ("GO:2", vec!["B"])]);
    let selection = ids(&["GO:2", "GO:9", "GO:1", "GO:2"]);
    assert_eq!(
        resolve_selection(&sets, Some(&selection)),
        ids(&["GO:2", "GO:1"])
    );
    let none_known = ids(&["GO:7"]);
    assert!(resolve_selection(&sets, Some(&none_known)).is_empty());
}
