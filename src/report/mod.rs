use serde::Serialize;

use crate::model::records::RunStats;

pub mod json;
pub mod text;

pub const TOP_N: usize = 20;

#[derive(Debug, Clone, Serialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct InputMeta {
    pub gene_sets: String,
    pub targets: String,
    pub categories: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ThresholdMeta {
    pub fdr_thresh: f64,
    pub p_thresh: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopCategory {
    pub category: String,
    pub fdr_q_value: f64,
    pub p_value: f64,
    pub overlap: usize,
    pub category_size: usize,
    pub genes: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool: ToolMeta,
    pub input: InputMeta,
    pub thresholds: ThresholdMeta,
    pub stats: RunStats,
    pub top: Vec<TopCategory>,
}

pub fn format_prob(v: f64) -> String {
    format!("{:.6e}", v)
}
