//! Parsers for the tab-separated input tables.
//!
//! Both inputs (the AMR call table and the cluster-assignment table) are TSV
//! files with a header row. The loader is thin I/O glue: it produces a
//! [`crate::core::table::Table`] and leaves all interpretation of cell values
//! to the pipeline.

use thiserror::Error;

pub mod tsv;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid table format: {0}")]
    InvalidFormat(String),
}
