use std::path::Path;

use anyhow::Context;
use tracing::info;

use crate::cli::Cli;
use crate::config::PipelineConfig;
use crate::parsing::tsv::parse_tsv_file;
use crate::pipeline::{hierarchy, join, sanitize};

/// Execute the pipeline end to end: load, join, sanitize, build, serialize.
///
/// # Errors
///
/// Returns an error if an input cannot be read or parsed, if the
/// configuration does not match the table headers, or if the output cannot
/// be written. A configuration error aborts before any output is produced.
pub fn run(args: &Cli) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => PipelineConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => PipelineConfig::default(),
    };

    let amr = parse_tsv_file(&args.amr)
        .with_context(|| format!("failed to read AMR table {}", args.amr.display()))?;
    let clusters = parse_tsv_file(&args.clusters)
        .with_context(|| format!("failed to read clustering table {}", args.clusters.display()))?;

    let joined = join::join_tables(&amr, &clusters, &config)?;
    info!(rows = joined.n_rows(), "total merged rows");

    let sanitized = sanitize::sanitize_cluster_ids(&joined, &config)?;
    if sanitized.dropped > 0 {
        info!(
            dropped = sanitized.dropped,
            "rows excluded for unparseable cluster ids"
        );
    }

    let tree = hierarchy::build_hierarchy(&joined, &sanitized.rows, &config)?;
    info!(
        coarse_clusters = tree.coarse_count(),
        fine_clusters = tree.fine_count(),
        strains = tree.total_strains(),
        "built hierarchy"
    );

    let json = serde_json::to_string_pretty(&tree)?;
    write_output(&args.output, &json)?;

    Ok(())
}

fn write_output(path: &Path, json: &str) -> anyhow::Result<()> {
    if path == Path::new("-") {
        println!("{json}");
    } else {
        std::fs::write(path, json)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), "written");
    }
    Ok(())
}
