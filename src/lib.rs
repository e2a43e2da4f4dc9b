//! # amr-hierarchy
//!
//! A library for aggregating per-strain antimicrobial-resistance (AMR) calls
//! into a nested cluster hierarchy for visualization.
//!
//! Genomic surveillance datasets often come as two flat tables: one with a
//! resistance call per strain per drug, and one assigning each strain to
//! hierarchical clusters at two resolutions (a coarse `HC500` id and a fine
//! `HC100` id nested inside it). Rendering those as a sunburst or treemap
//! needs a three-level count tree instead.
//!
//! `amr-hierarchy` joins the two tables on the strain identifier, coerces the
//! cluster ids to integers (dropping rows where either is unparseable), and
//! aggregates resistant-call counts per drug within each fine cluster.
//! Clusters are kept even when no strain in them carries a resistant call,
//! so the visualization shows the full population.
//!
//! ## Example
//!
//! ```rust
//! use amr_hierarchy::config::PipelineConfig;
//! use amr_hierarchy::parsing::tsv::parse_tsv_text;
//! use amr_hierarchy::pipeline::{hierarchy, join, sanitize};
//!
//! let config = PipelineConfig {
//!     drugs: vec!["Isoniazid".to_string()],
//!     ..PipelineConfig::default()
//! };
//!
//! let amr = parse_tsv_text("Uberstrain\tIsoniazid\nS1\tR\nS2\t-\n").unwrap();
//! let clusters = parse_tsv_text("Uberstrain\tHC500\tHC100\nS1\t1\t10\nS2\t1\t10\n").unwrap();
//!
//! let joined = join::join_tables(&amr, &clusters, &config).unwrap();
//! let sanitized = sanitize::sanitize_cluster_ids(&joined, &config).unwrap();
//! let tree = hierarchy::build_hierarchy(&joined, &sanitized.rows, &config).unwrap();
//!
//! assert_eq!(tree.children[0].value, 2);
//! ```
//!
//! ## Modules
//!
//! - [`config`]: column names, root label, and the ordered drug panel
//! - [`core`]: the table abstraction and the output tree types
//! - [`parsing`]: TSV loading
//! - [`pipeline`]: join, sanitize, and hierarchy-building stages
//! - [`cli`]: command-line interface implementation

pub mod cli;
pub mod config;
pub mod core;
pub mod parsing;
pub mod pipeline;

// Re-export commonly used types for convenience
pub use crate::config::PipelineConfig;
pub use crate::core::table::Table;
pub use crate::core::tree::{CoarseClusterNode, DrugNode, FineClusterNode, HierarchyTree};
pub use crate::pipeline::resistance::is_resistant;
pub use crate::pipeline::sanitize::StrainRow;
pub use crate::pipeline::PipelineError;
