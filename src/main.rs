mod genesets;
mod input;
mod logging;
mod model;
mod pipeline;
mod report;
mod stats;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::input::{GeneSetFormat, TableColumns, load_gene_sets, load_targets, parse_id_list};
use crate::model::thresholds::EnrichmentThresholds;
use crate::pipeline::run_enrichment;
use crate::pipeline::stage5_report::{Stage5Input, write_reports};

#[derive(Debug, Parser)]
#[command(name = "kira-goea", version)]
#[command(about = "GO term enrichment of a gene list with an exact hypergeometric test")]
struct Cli {
    /// Debug-level logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Test every category (or a selection) for enrichment in a target list
    Run(RunArgs),
}

#[derive(Debug, Clone, Args)]
struct RunArgs {
    /// Gene set annotations: GMT, JSON mapping or TSV table (optionally .gz)
    #[arg(long)]
    gene_sets: PathBuf,

    /// Target genes, one per line
    #[arg(long)]
    targets: PathBuf,

    /// Output directory
    #[arg(long)]
    out: PathBuf,

    /// Only test these categories, one per line
    #[arg(long)]
    categories: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = FormatArg::Auto)]
    format: FormatArg,

    /// Category column of a TSV table
    #[arg(long, default_value = "GO")]
    category_column: String,

    /// Gene column of a TSV table (default: first column)
    #[arg(long)]
    gene_column: Option<String>,

    /// Keep categories with FDR q-value below this
    #[arg(long, default_value_t = 0.25)]
    fdr_thresh: f64,

    /// Keep categories with p-value below this
    #[arg(long, default_value_t = 1e-3)]
    p_thresh: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Auto,
    Gmt,
    Json,
    Table,
}

impl From<FormatArg> for GeneSetFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Auto => GeneSetFormat::Auto,
            FormatArg::Gmt => GeneSetFormat::Gmt,
            FormatArg::Json => GeneSetFormat::Json,
            FormatArg::Table => GeneSetFormat::Table,
        }
    }
}

#[derive(Debug, Clone)]
struct RunConfig {
    gene_sets: PathBuf,
    targets: PathBuf,
    categories: Option<PathBuf>,
    out_dir: PathBuf,
    format: GeneSetFormat,
    columns: TableColumns,
    thresholds: EnrichmentThresholds,
}

impl RunConfig {
    fn from_args(args: RunArgs) -> Result<Self, String> {
        let thresholds = EnrichmentThresholds {
            fdr_thresh: args.fdr_thresh,
            p_thresh: args.p_thresh,
        };
        thresholds.validate()?;
        Ok(Self {
            gene_sets: args.gene_sets,
            targets: args.targets,
            categories: args.categories,
            out_dir: args.out,
            format: args.format.into(),
            columns: TableColumns {
                gene: args.gene_column,
                category: args.category_column,
            },
            thresholds,
        })
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let Command::Run(args) = cli.command;
    let config = RunConfig::from_args(args)?;

    let gene_sets =
        load_gene_sets(&config.gene_sets, config.format, &config.columns).map_err(|e| e.to_string())?;
    let targets = load_targets(&config.targets).map_err(|e| e.to_string())?;
    let selection = match &config.categories {
        Some(path) => Some(parse_id_list(path).map_err(|e| e.to_string())?),
        None => None,
    };

    let mut progress = |counter: usize| tracing::info!(counter, "testing categories");
    let output = run_enrichment(
        &targets,
        &gene_sets,
        selection.as_deref(),
        &config.thresholds,
        Some(&mut progress as &mut dyn FnMut(usize)),
    )
    .map_err(|e| e.to_string())?;

    let input = Stage5Input {
        output: &output,
        thresholds: &config.thresholds,
        gene_sets_path: config.gene_sets.display().to_string(),
        targets_path: config.targets.display().to_string(),
        categories_path: config.categories.as_ref().map(|p| p.display().to_string()),
        tool_name: "kira-goea".to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
    };
    write_reports(&input, &config.out_dir).map_err(|e| e.to_string())?;

    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
