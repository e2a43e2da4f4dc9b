//! Command-line interface for amr-hierarchy.
//!
//! The tool is a one-shot batch transformation: load the two TSV inputs,
//! join on the strain id, sanitize the cluster ids, build the tree, write
//! one JSON document.
//!
//! ## Usage
//!
//! ```text
//! # Default MTB configuration
//! amr-hierarchy AMR.tsv HC.tsv
//!
//! # Custom output path
//! amr-hierarchy AMR.tsv HC.tsv -o tree.json
//!
//! # Print to stdout for piping
//! amr-hierarchy AMR.tsv HC.tsv -o -
//!
//! # Override columns and drug panel
//! amr-hierarchy AMR.tsv HC.tsv --config pipeline.json
//! ```

use std::path::PathBuf;

use clap::Parser;

pub mod build;

#[derive(Parser)]
#[command(name = "amr-hierarchy")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Aggregate per-strain AMR calls into a nested cluster hierarchy")]
#[command(
    long_about = "amr-hierarchy joins a per-strain AMR call table with a hierarchical clustering assignment table and emits a three-level tree (coarse cluster -> fine cluster -> drug) as pretty-printed JSON, suitable for sunburst or treemap visualization.\n\nStrains present in only one input are excluded; rows with unparseable cluster ids are dropped. Clusters are never pruned for having no resistant calls."
)]
pub struct Cli {
    /// AMR call table (TSV with a header row; one column per drug)
    #[arg(required = true)]
    pub amr: PathBuf,

    /// Cluster assignment table (TSV with strain, coarse and fine id columns)
    #[arg(required = true)]
    pub clusters: PathBuf,

    /// Output JSON path. Use '-' for stdout
    #[arg(short, long, default_value = "hc500_hc100_drug_pie.json")]
    pub output: PathBuf,

    /// Pipeline configuration file (JSON) overriding the built-in MTB defaults
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
