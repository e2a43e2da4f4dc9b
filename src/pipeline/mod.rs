//! The join-and-aggregate pipeline.
//!
//! Stages run strictly in sequence, each a pure function of its inputs:
//!
//! 1. [`join::join_tables`]: inner equi-join of the AMR table and the
//!    clustering table on the strain-id column, projecting the two cluster-id
//!    columns from the clustering side.
//! 2. [`sanitize::sanitize_cluster_ids`]: parse cluster ids to integers,
//!    dropping rows where either id is unparseable.
//! 3. [`hierarchy::build_hierarchy`]: group by coarse id, then fine id, count
//!    resistant calls per drug, and assemble the three-level tree.
//!
//! No stage performs I/O; the CLI layer owns loading and emission.

use thiserror::Error;

pub mod hierarchy;
pub mod join;
pub mod resistance;
pub mod sanitize;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Missing AMR columns: {}", .0.join(", "))]
    MissingDrugColumns(Vec<String>),

    #[error("Column '{column}' not found in {table} table")]
    MissingColumn {
        table: &'static str,
        column: String,
    },

    #[error("AMR table already contains cluster-id column '{0}'; cluster ids must come from the clustering table")]
    ClusterColumnCollision(String),
}
