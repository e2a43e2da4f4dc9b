use std::collections::BTreeMap;

use tracing::debug;

use crate::config::PipelineConfig;
use crate::core::table::Table;
use crate::core::tree::{CoarseClusterNode, DrugNode, FineClusterNode, HierarchyTree};
use crate::pipeline::resistance::is_resistant;
use crate::pipeline::sanitize::StrainRow;
use crate::pipeline::PipelineError;

/// Assemble the three-level tree from the sanitized rows.
///
/// Rows are grouped by coarse cluster id, then by fine cluster id within each
/// coarse group, both in ascending order. Per fine group, drugs are counted
/// in configured list order and included only when the resistant count is
/// strictly positive. Groups themselves are never pruned: a fine cluster with
/// no resistant calls still appears, with an empty child list, and its
/// `value` stays the group's row count.
///
/// An empty input yields a root with zero children, which is a valid result.
///
/// # Errors
///
/// Returns `PipelineError::MissingDrugColumns` if a configured drug has no
/// column in the joined table. The joiner checks this up front, so the error
/// only fires when the builder is called with mismatched inputs.
pub fn build_hierarchy(
    joined: &Table,
    rows: &[StrainRow],
    config: &PipelineConfig,
) -> Result<HierarchyTree, PipelineError> {
    let drug_columns = resolve_drug_columns(joined, config)?;

    // BTreeMap keys give the ascending iteration order for both levels
    let mut groups: BTreeMap<i64, BTreeMap<i64, Vec<usize>>> = BTreeMap::new();
    for strain in rows {
        groups
            .entry(strain.hc500)
            .or_default()
            .entry(strain.hc100)
            .or_default()
            .push(strain.row);
    }

    let mut coarse_nodes = Vec::with_capacity(groups.len());
    for (hc500, fine_groups) in groups {
        let mut fine_nodes = Vec::with_capacity(fine_groups.len());
        let mut coarse_total = 0;

        for (hc100, members) in fine_groups {
            let drug_nodes = count_resistant(joined, &members, &drug_columns);
            coarse_total += members.len();
            fine_nodes.push(FineClusterNode::new(hc100, members.len(), drug_nodes));
        }

        coarse_nodes.push(CoarseClusterNode::new(hc500, coarse_total, fine_nodes));
    }

    let tree = HierarchyTree::new(config.root_name.clone(), coarse_nodes);
    debug!(
        coarse = tree.coarse_count(),
        fine = tree.fine_count(),
        strains = tree.total_strains(),
        "built hierarchy"
    );
    Ok(tree)
}

/// Per-drug resistant counts for one fine group, in drug-list order,
/// omitting drugs with a zero count.
fn count_resistant(joined: &Table, members: &[usize], drugs: &[(String, usize)]) -> Vec<DrugNode> {
    drugs
        .iter()
        .filter_map(|(name, col)| {
            let count = members
                .iter()
                .filter(|&&row| is_resistant(joined.cell(row, *col)))
                .count();
            (count > 0).then(|| DrugNode {
                name: name.clone(),
                value: count,
            })
        })
        .collect()
}

fn resolve_drug_columns(
    joined: &Table,
    config: &PipelineConfig,
) -> Result<Vec<(String, usize)>, PipelineError> {
    let mut columns = Vec::with_capacity(config.drugs.len());
    let mut missing = Vec::new();
    for drug in &config.drugs {
        match joined.column_index(drug) {
            Some(col) => columns.push((drug.clone(), col)),
            None => missing.push(drug.clone()),
        }
    }
    if missing.is_empty() {
        Ok(columns)
    } else {
        Err(PipelineError::MissingDrugColumns(missing))
    }
}
