use std::path::Path;

use crate::genesets::CategoryGeneSets;
use crate::input::InputError;
use crate::input::reader::for_each_line;

/// Reads a GMT file: `category<TAB>description<TAB>gene<TAB>gene...`.
pub fn load_gmt(path: &Path) -> Result<CategoryGeneSets, InputError> {
    let mut entries: Vec<(String, Vec<String>)> = Vec::new();

    for_each_line(path, |line_no, line| {
        let cols: Vec<&str> = line.split('\t').collect();
        if cols.len() < 2 {
            return Err(InputError::Parse(format!(
                "gmt line {} has <2 columns",
                line_no
            )));
        }
        let category = cols[0].trim();
        if category.is_empty() {
            return Err(InputError::Parse(format!(
                "gmt line {} has an empty category id",
                line_no
            )));
        }
        let genes = cols[2..]
            .iter()
            .map(|g| g.trim())
            .filter(|g| !g.is_empty())
            .map(str::to_string)
            .collect();
        entries.push((category.to_string(), genes));
        Ok(())
    })?;

    if entries.is_empty() {
        return Err(InputError::Parse("gmt file is empty".to_string()));
    }

    Ok(CategoryGeneSets::from_mapping(entries))
}
