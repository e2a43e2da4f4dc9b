use std::collections::HashMap;

use tracing::debug;

use crate::config::PipelineConfig;
use crate::core::table::Table;
use crate::pipeline::PipelineError;

/// Inner equi-join of the AMR table and the clustering table on the strain-id
/// column.
///
/// The output contains every AMR column plus the coarse and fine cluster-id
/// columns, restricted to strains present in both tables. Rows present in
/// only one table are silently dropped. Duplicate strain ids are not
/// deduplicated: each AMR row pairs with every clustering row sharing its
/// key, so duplicates multiply rows on either side.
///
/// # Errors
///
/// Returns `PipelineError::MissingDrugColumns` if any configured drug has no
/// AMR column, `PipelineError::MissingColumn` if a strain or cluster-id
/// column is absent, or `PipelineError::ClusterColumnCollision` if the AMR
/// table itself carries a column named like a cluster-id column — the
/// appended cluster ids would be shadowed by the AMR-side column on lookup.
/// All are checked before any join work begins.
pub fn join_tables(
    amr: &Table,
    clusters: &Table,
    config: &PipelineConfig,
) -> Result<Table, PipelineError> {
    check_columns(amr, clusters, config)?;

    let amr_key = column(amr, "AMR", &config.strain_column)?;
    let cluster_key = column(clusters, "clustering", &config.strain_column)?;
    let coarse = column(clusters, "clustering", &config.coarse_column)?;
    let fine = column(clusters, "clustering", &config.fine_column)?;

    // Project only (strain id, coarse id, fine id) from the clustering side
    let mut by_strain: HashMap<&str, Vec<(&str, &str)>> = HashMap::new();
    for (i, row) in clusters.rows().iter().enumerate() {
        by_strain.entry(row[cluster_key].as_str()).or_default().push((
            clusters.cell(i, coarse).unwrap_or(""),
            clusters.cell(i, fine).unwrap_or(""),
        ));
    }

    let mut columns = amr.columns().to_vec();
    columns.push(config.coarse_column.clone());
    columns.push(config.fine_column.clone());
    let mut joined = Table::new(columns);

    for row in amr.rows() {
        if let Some(matches) = by_strain.get(row[amr_key].as_str()) {
            for &(coarse_id, fine_id) in matches {
                let mut out = row.clone();
                out.push(coarse_id.to_string());
                out.push(fine_id.to_string());
                joined.push_row(out);
            }
        }
    }

    debug!(
        amr_rows = amr.n_rows(),
        cluster_rows = clusters.n_rows(),
        joined_rows = joined.n_rows(),
        "joined AMR and clustering tables"
    );

    Ok(joined)
}

/// Fail fast when the configuration does not match the table headers.
fn check_columns(
    amr: &Table,
    clusters: &Table,
    config: &PipelineConfig,
) -> Result<(), PipelineError> {
    let missing: Vec<String> = config
        .drugs
        .iter()
        .filter(|drug| !amr.has_column(drug))
        .cloned()
        .collect();
    if !missing.is_empty() {
        return Err(PipelineError::MissingDrugColumns(missing));
    }

    // The cluster-id columns are appended to the AMR columns; a same-named
    // AMR column would shadow them on name lookup downstream
    for cluster_col in [&config.coarse_column, &config.fine_column] {
        if amr.has_column(cluster_col) {
            return Err(PipelineError::ClusterColumnCollision(cluster_col.clone()));
        }
    }

    column(amr, "AMR", &config.strain_column)?;
    column(clusters, "clustering", &config.strain_column)?;
    column(clusters, "clustering", &config.coarse_column)?;
    column(clusters, "clustering", &config.fine_column)?;
    Ok(())
}

fn column(table: &Table, name: &'static str, col: &str) -> Result<usize, PipelineError> {
    table
        .column_index(col)
        .ok_or_else(|| PipelineError::MissingColumn {
            table: name,
            column: col.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::tsv::parse_tsv_text;

    fn config() -> PipelineConfig {
        PipelineConfig {
            drugs: vec!["Isoniazid".to_string(), "Rifampicin".to_string()],
            ..PipelineConfig::default()
        }
    }

    fn amr_table() -> Table {
        parse_tsv_text(
            "Uberstrain\tIsoniazid\tRifampicin\nS1\tR\t-\nS2\t-\t-\nS3\tR\tR\n",
        )
        .unwrap()
    }

    #[test]
    fn test_inner_join_drops_unmatched_rows() {
        let clusters =
            parse_tsv_text("Uberstrain\tHC500\tHC100\nS1\t1\t10\nS4\t2\t20\n").unwrap();
        let joined = join_tables(&amr_table(), &clusters, &config()).unwrap();

        // S2/S3 missing from clustering, S4 missing from AMR
        assert_eq!(joined.n_rows(), 1);
        assert_eq!(joined.cell_by_name(0, "Uberstrain"), Some("S1"));
        assert_eq!(joined.cell_by_name(0, "HC500"), Some("1"));
        assert_eq!(joined.cell_by_name(0, "HC100"), Some("10"));
    }

    #[test]
    fn test_join_keeps_all_amr_columns() {
        let clusters = parse_tsv_text("Uberstrain\tHC500\tHC100\nS1\t1\t10\n").unwrap();
        let joined = join_tables(&amr_table(), &clusters, &config()).unwrap();
        assert_eq!(
            joined.columns(),
            ["Uberstrain", "Isoniazid", "Rifampicin", "HC500", "HC100"]
        );
    }

    #[test]
    fn test_join_projects_only_cluster_columns() {
        // Extra clustering columns must not leak into the output
        let clusters =
            parse_tsv_text("Uberstrain\tHC500\tHC100\tLineage\nS1\t1\t10\tL2\n").unwrap();
        let joined = join_tables(&amr_table(), &clusters, &config()).unwrap();
        assert!(!joined.has_column("Lineage"));
    }

    #[test]
    fn test_duplicate_keys_multiply_rows() {
        let clusters =
            parse_tsv_text("Uberstrain\tHC500\tHC100\nS1\t1\t10\nS1\t2\t20\n").unwrap();
        let joined = join_tables(&amr_table(), &clusters, &config()).unwrap();
        assert_eq!(joined.n_rows(), 2);
        assert_eq!(joined.cell_by_name(0, "HC500"), Some("1"));
        assert_eq!(joined.cell_by_name(1, "HC500"), Some("2"));
    }

    #[test]
    fn test_missing_drug_column_fails_fast() {
        let clusters = parse_tsv_text("Uberstrain\tHC500\tHC100\nS1\t1\t10\n").unwrap();
        let mut cfg = config();
        cfg.drugs.push("Bedaquiline".to_string());

        let err = join_tables(&amr_table(), &clusters, &cfg).unwrap_err();
        match err {
            PipelineError::MissingDrugColumns(missing) => {
                assert_eq!(missing, vec!["Bedaquiline"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_amr_cluster_named_column_fails_fast() {
        // An AMR export that already carries an HC500 column would shadow
        // the joined cluster ids on name lookup, so a strain with valid ids
        // ("S1", hc500=1, hc100=10 here) would silently vanish downstream.
        // The join must refuse the collision up front instead.
        let amr = parse_tsv_text(
            "Uberstrain\tIsoniazid\tRifampicin\tHC500\nS1\tR\t-\tgarbage\n",
        )
        .unwrap();
        let clusters = parse_tsv_text("Uberstrain\tHC500\tHC100\nS1\t1\t10\n").unwrap();

        let err = join_tables(&amr, &clusters, &config()).unwrap_err();
        match err {
            PipelineError::ClusterColumnCollision(column) => assert_eq!(column, "HC500"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_cluster_column_fails_fast() {
        let clusters = parse_tsv_text("Uberstrain\tHC500\nS1\t1\n").unwrap();
        let err = join_tables(&amr_table(), &clusters, &config()).unwrap_err();
        assert!(matches!(err, PipelineError::MissingColumn { .. }));
    }
}
