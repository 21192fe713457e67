use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::model::records::{EnrichmentRecord, EnrichmentResult};
use crate::model::thresholds::EnrichmentThresholds;
use crate::pipeline::EnrichmentOutput;
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;
use crate::report::{
    InputMeta, SummaryData, TOP_N, ThresholdMeta, ToolMeta, TopCategory, format_prob,
};

#[derive(Debug, Clone)]
pub struct Stage5Input<'a> {
    pub output: &'a EnrichmentOutput,
    pub thresholds: &'a EnrichmentThresholds,
    pub gene_sets_path: String,
    pub targets_path: String,
    pub categories_path: Option<String>,
    pub tool_name: String,
    pub tool_version: String,
}

pub fn write_reports(input: &Stage5Input<'_>, out_dir: &Path) -> io::Result<()> {
    fs::create_dir_all(out_dir)?;

    let table = out_dir.join("enrichment.tsv");
    write_enrichment_tsv(&input.output.result, &table)?;

    let summary = build_summary(input);
    let summary_path = out_dir.join("summary.json");
    let json = render_summary_json(&summary).map_err(io::Error::other)?;
    write_text(&summary_path, &json)?;

    let report_path = out_dir.join("report.txt");
    write_text(&report_path, &render_report_text(&summary))?;

    tracing::info!(
        table = %table.display(),
        summary = %summary_path.display(),
        report = %report_path.display(),
        "reports written"
    );

    Ok(())
}

fn write_enrichment_tsv(result: &EnrichmentResult, path: &Path) -> io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "{}", ["category", "fdr_q_value", "p_value", "genes"].join("\t"))?;
    for row in &result.rows {
        writeln!(
            w,
            "{}\t{}\t{}\t{}",
            row.category,
            format_prob(row.fdr_q_value),
            format_prob(row.p_value),
            row.genes
        )?;
    }
    w.flush()
}

fn build_summary(input: &Stage5Input<'_>) -> SummaryData {
    let by_category: HashMap<&str, &EnrichmentRecord> = input
        .output
        .records
        .iter()
        .map(|r| (r.category.as_str(), r))
        .collect();

    let top = input
        .output
        .result
        .rows
        .iter()
        .take(TOP_N)
        .map(|row| {
            let record = by_category.get(row.category.as_str());
            TopCategory {
                category: row.category.clone(),
                fdr_q_value: row.fdr_q_value,
                p_value: row.p_value,
                overlap: record.map(|r| r.overlap()).unwrap_or(0),
                category_size: record.map(|r| r.category_size).unwrap_or(0),
                genes: row.genes.clone(),
            }
        })
        .collect();

    SummaryData {
        tool: ToolMeta {
            name: input.tool_name.clone(),
            version: input.tool_version.clone(),
        },
        input: InputMeta {
            gene_sets: input.gene_sets_path.clone(),
            targets: input.targets_path.clone(),
            categories: input.categories_path.clone(),
        },
        thresholds: ThresholdMeta {
            fdr_thresh: input.thresholds.fdr_thresh,
            p_thresh: input.thresholds.p_thresh,
        },
        stats: input.output.stats.clone(),
        top,
    }
}

fn write_text(path: &Path, contents: &str) -> io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_report.rs"]
mod tests;
