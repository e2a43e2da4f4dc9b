use tracing::debug;

use crate::config::PipelineConfig;
use crate::core::table::Table;
use crate::pipeline::PipelineError;

/// One joined row that survived cluster-id sanitization.
///
/// `row` indexes into the joined table, so drug cells stay addressable by
/// column name without copying the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrainRow {
    pub hc500: i64,
    pub hc100: i64,
    pub row: usize,
}

/// Result of sanitizing the joined table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedRows {
    pub rows: Vec<StrainRow>,
    /// Rows dropped because either cluster id was unparseable.
    pub dropped: usize,
}

/// Parse one cluster-id cell to an integer.
///
/// Surrounding whitespace is accepted. A numeric string in fractional form
/// (`"5.0"`, `"5.7"`) also parses, truncating toward zero. Non-numeric or
/// empty input is `None`.
#[must_use]
pub fn parse_cluster_id(cell: &str) -> Option<i64> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(value) = trimmed.parse::<i64>() {
        return Some(value);
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite()).map(|v| {
        #[allow(clippy::cast_possible_truncation)] // cluster ids are small integers
        {
            v.trunc() as i64
        }
    })
}

/// Coerce the two cluster-id columns of the joined table to integers,
/// dropping rows where either id is unparseable.
///
/// Dropped rows are counted in aggregate only, not reported individually.
/// Re-running on already-clean data drops nothing.
///
/// # Errors
///
/// Returns `PipelineError::MissingColumn` if the joined table lacks a
/// cluster-id column (it cannot, when produced by the joiner).
pub fn sanitize_cluster_ids(
    joined: &Table,
    config: &PipelineConfig,
) -> Result<SanitizedRows, PipelineError> {
    let coarse = joined
        .column_index(&config.coarse_column)
        .ok_or_else(|| PipelineError::MissingColumn {
            table: "joined",
            column: config.coarse_column.clone(),
        })?;
    let fine = joined
        .column_index(&config.fine_column)
        .ok_or_else(|| PipelineError::MissingColumn {
            table: "joined",
            column: config.fine_column.clone(),
        })?;

    let mut rows = Vec::with_capacity(joined.n_rows());
    for i in 0..joined.n_rows() {
        let hc500 = joined.cell(i, coarse).and_then(parse_cluster_id);
        let hc100 = joined.cell(i, fine).and_then(parse_cluster_id);
        if let (Some(hc500), Some(hc100)) = (hc500, hc100) {
            rows.push(StrainRow { hc500, hc100, row: i });
        }
    }

    let dropped = joined.n_rows() - rows.len();
    if dropped > 0 {
        debug!(dropped, "dropped rows with unparseable cluster ids");
    }

    Ok(SanitizedRows { rows, dropped })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::tsv::parse_tsv_text;

    #[test]
    fn test_parse_cluster_id() {
        assert_eq!(parse_cluster_id("5"), Some(5));
        assert_eq!(parse_cluster_id(" 5 "), Some(5));
        assert_eq!(parse_cluster_id("-3"), Some(-3));
        assert_eq!(parse_cluster_id("5.0"), Some(5));
        assert_eq!(parse_cluster_id("5.7"), Some(5));
        assert_eq!(parse_cluster_id(""), None);
        assert_eq!(parse_cluster_id("   "), None);
        assert_eq!(parse_cluster_id("n/a"), None);
        assert_eq!(parse_cluster_id("HC500_5"), None);
        assert_eq!(parse_cluster_id("nan"), None);
        assert_eq!(parse_cluster_id("inf"), None);
    }

    #[test]
    fn test_rows_with_bad_ids_are_dropped() {
        let joined = parse_tsv_text(
            "Uberstrain\tHC500\tHC100\nS1\t1\t10\nS2\t\t10\nS3\t1\tx\nS4\t2\t20\n",
        )
        .unwrap();
        let sanitized = sanitize_cluster_ids(&joined, &PipelineConfig::default()).unwrap();

        assert_eq!(sanitized.dropped, 2);
        assert_eq!(
            sanitized.rows,
            vec![
                StrainRow { hc500: 1, hc100: 10, row: 0 },
                StrainRow { hc500: 2, hc100: 20, row: 3 },
            ]
        );
    }

    #[test]
    fn test_clean_input_drops_nothing() {
        let joined = parse_tsv_text("Uberstrain\tHC500\tHC100\nS1\t1\t10\nS2\t2\t20\n").unwrap();
        let sanitized = sanitize_cluster_ids(&joined, &PipelineConfig::default()).unwrap();
        assert_eq!(sanitized.dropped, 0);
        assert_eq!(sanitized.rows.len(), 2);
    }
}
