use std::path::Path;

use thiserror::Error;

pub mod gmt;
pub mod idlist;
pub mod json;
pub mod reader;
pub mod table;

use crate::genesets::CategoryGeneSets;

pub use idlist::{load_targets, parse_id_list};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("parse error: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneSetFormat {
    Auto,
    Gmt,
    Json,
    Table,
}

/// Column selection for tabular annotations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableColumns {
    /// Gene column name; the first column when unset.
    pub gene: Option<String>,
    pub category: String,
}

impl Default for TableColumns {
    fn default() -> Self {
        Self {
            gene: None,
            category: "GO".to_string(),
        }
    }
}

pub fn detect_format(path: &Path) -> GeneSetFormat {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    let name = name.strip_suffix(".gz").unwrap_or(&name);
    if name.ends_with(".gmt") {
        GeneSetFormat::Gmt
    } else if name.ends_with(".json") {
        GeneSetFormat::Json
    } else {
        GeneSetFormat::Table
    }
}

pub fn load_gene_sets(
    path: &Path,
    format: GeneSetFormat,
    columns: &TableColumns,
) -> Result<CategoryGeneSets, InputError> {
    if !path.is_file() {
        return Err(InputError::MissingInput(format!(
            "gene set file not found: {}",
            path.display()
        )));
    }
    let format = match format {
        GeneSetFormat::Auto => detect_format(path),
        other => other,
    };
    tracing::info!(path = %path.display(), ?format, "loading gene sets");

    let gene_sets = match format {
        GeneSetFormat::Gmt => gmt::load_gmt(path)?,
        GeneSetFormat::Json => json::load_json_mapping(path)?,
        GeneSetFormat::Table | GeneSetFormat::Auto => {
            let rows = table::load_annotation_table(path, columns)?;
            tracing::debug!(rows = rows.len(), "annotation table parsed");
            CategoryGeneSets::from_relation(&rows)
        }
    };

    tracing::info!(categories = gene_sets.len(), "gene sets loaded");
    Ok(gene_sets)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
