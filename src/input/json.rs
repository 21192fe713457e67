use std::collections::BTreeMap;
use std::path::Path;

use crate::genesets::CategoryGeneSets;
use crate::input::InputError;
use crate::input::reader::open_maybe_gz;

/// Reads a JSON object mapping category ids to gene arrays.
pub fn load_json_mapping(path: &Path) -> Result<CategoryGeneSets, InputError> {
    let reader = open_maybe_gz(path)?;
    let mapping: BTreeMap<String, Vec<String>> = serde_json::from_reader(reader)?;
    if mapping.is_empty() {
        return Err(InputError::Parse("gene set mapping is empty".to_string()));
    }
    Ok(CategoryGeneSets::from_mapping(mapping))
}
