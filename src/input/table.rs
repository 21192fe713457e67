use std::path::Path;

use crate::genesets::Annotation;
use crate::input::reader::for_each_line;
use crate::input::{InputError, TableColumns};

/// Reads `(gene, category)` rows from a tab-separated table with a header.
pub fn load_annotation_table(
    path: &Path,
    columns: &TableColumns,
) -> Result<Vec<Annotation>, InputError> {
    let mut header: Option<(usize, usize)> = None;
    let mut rows = Vec::new();
    let mut skipped = 0usize;

    for_each_line(path, |line_no, line| {
        let fields: Vec<&str> = line.split('\t').map(|s| s.trim()).collect();
        let Some((gene_col, category_col)) = header else {
            let mut names = fields.clone();
            names[0] = names[0].trim_start_matches('#').trim();
            header = Some(resolve_columns(&names, columns)?);
            return Ok(());
        };
        if line.starts_with('#') {
            return Ok(());
        }
        let gene = fields.get(gene_col).copied().unwrap_or("");
        let category = fields.get(category_col).copied().unwrap_or("");
        if gene.is_empty() || category.is_empty() {
            tracing::warn!(line = line_no, "annotation row missing gene or category; skipping");
            skipped += 1;
            return Ok(());
        }
        rows.push(Annotation {
            gene: gene.to_string(),
            category: category.to_string(),
        });
        Ok(())
    })?;

    if header.is_none() {
        return Err(InputError::Parse("annotation table is empty".to_string()));
    }
    if skipped > 0 {
        tracing::warn!(skipped, "annotation rows skipped");
    }
    Ok(rows)
}

fn resolve_columns(header: &[&str], columns: &TableColumns) -> Result<(usize, usize), InputError> {
    let find = |name: &str| {
        header
            .iter()
            .position(|h| *h == name)
            .ok_or_else(|| InputError::MissingInput(format!("annotation column '{}'", name)))
    };
    let gene_col = match &columns.gene {
        Some(name) => find(name)?,
        None => 0,
    };
    let category_col = find(&columns.category)?;
    if gene_col == category_col {
        return Err(InputError::InvalidInput(format!(
            "gene and category columns are the same ('{}')",
            columns.category
        )));
    }
    Ok((gene_col, category_col))
}
