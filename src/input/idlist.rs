use std::path::Path;

use crate::input::InputError;
use crate::input::reader::for_each_line;

/// One identifier per line (first tab field); `#` lines are comments.
///
/// File order and repeats are kept.
pub fn parse_id_list(path: &Path) -> Result<Vec<String>, InputError> {
    if !path.is_file() {
        return Err(InputError::MissingInput(format!(
            "identifier list not found: {}",
            path.display()
        )));
    }
    let mut ids = Vec::new();
    for_each_line(path, |_, line| {
        let line = line.trim_start();
        if line.starts_with('#') {
            return Ok(());
        }
        let id = line.split('\t').next().unwrap_or("").trim();
        if !id.is_empty() {
            ids.push(id.to_string());
        }
        Ok(())
    })?;
    Ok(ids)
}

pub fn load_targets(path: &Path) -> Result<Vec<String>, InputError> {
    let targets = parse_id_list(path)?;
    if targets.is_empty() {
        return Err(InputError::Parse(format!(
            "target list is empty: {}",
            path.display()
        )));
    }
    tracing::info!(path = %path.display(), n = targets.len(), "target genes loaded");
    Ok(targets)
}
