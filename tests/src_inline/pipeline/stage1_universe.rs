use super::*;

fn ids(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn sets() -> CategoryGeneSets {
    CategoryGeneSets::from_mapping(vec![
        ("GO:2", vec!["D", "E"]),
        ("GO:1", vec!["A", "B", "C"]),
    ])
}

#[test]
fn test_stage1_builds_universe_and_targets() {
    let out = run_stage1(&ids(&["D", "Q", "A", "D"]), &sets(), None).unwrap();
    assert_eq!(out.universe.len(), 5);
    assert_eq!(out.targets, ids(&["D", "A"]));
    assert_eq!(out.n_targets_unique, 3);
    assert_eq!(out.categories, ids(&["GO:1", "GO:2"]));
}

#[test]
fn test_stage1_selection_order() {
    let selection = ids(&["GO:2", "GO:1", "GO:3"]);
    let out = run_stage1(&ids(&["A"]), &sets(), Some(&selection)).unwrap();
    assert_eq!(out.categories, ids(&["GO:2", "GO:1"]));
}

#[test]
fn test_stage1_errors() {
    assert!(matches!(
        run_stage1(&ids(&["A"]), &CategoryGeneSets::default(), None),
        Err(EnrichError::EmptyUniverse)
    ));
    assert!(matches!(
        run_stage1(&ids(&["Z"]), &sets(), None),
        Err(EnrichError::EmptyTarget { requested: 1 })
    ));
}

#[test]
fn test_stage1_categories_without_genes_are_empty_universe() {
    let sets = CategoryGeneSets::from_mapping(vec![("GO:1", Vec::<&str>::new())]);
    assert!(!sets.is_empty());
    assert!(matches!(
        run_stage1(&ids(&["A"]), &sets, None),
        Err(EnrichError::EmptyUniverse)
    ));
}
