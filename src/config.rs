//! Pipeline configuration: column names, the root node label, and the
//! ordered drug panel.
//!
//! The defaults reproduce the MTB (Mycobacterium tuberculosis) setup: strain
//! identifiers in an `Uberstrain` column, hierarchical cluster assignments in
//! `HC500`/`HC100`, and the standard 17-drug resistance panel. A JSON file
//! passed via `--config` overrides any subset of these fields.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Drug list must not be empty")]
    EmptyDrugList,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Name of the shared strain-identifier column (join key).
    pub strain_column: String,
    /// Name of the coarse cluster-id column in the clustering table.
    pub coarse_column: String,
    /// Name of the fine cluster-id column in the clustering table.
    pub fine_column: String,
    /// Label of the root node in the output tree.
    pub root_name: String,
    /// Drug columns to aggregate, in output order.
    pub drugs: Vec<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            strain_column: "Uberstrain".to_string(),
            coarse_column: "HC500".to_string(),
            fine_column: "HC100".to_string(),
            root_name: "MTB".to_string(),
            drugs: [
                "Isoniazid",
                "Rifampicin",
                "Ethambutol",
                "Pyrazinamide",
                "Levofloxacin",
                "Moxifloxacin",
                "Bedaquiline",
                "Linezolid",
                "Clofazimine",
                "Cycloserine",
                "Delamanid",
                "Amikacin",
                "Streptomycin",
                "Ethionamide",
                "p-Aminosalicylic acid",
                "Capreomycin",
                "Kanamycin",
            ]
            .into_iter()
            .map(ToString::to_string)
            .collect(),
        }
    }
}

impl PipelineConfig {
    /// Load a configuration from a JSON file. Fields omitted from the file
    /// keep their default values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read,
    /// `ConfigError::Json` if it is not valid JSON for this schema, or
    /// `ConfigError::EmptyDrugList` if the drug list is empty.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        if config.drugs.is_empty() {
            return Err(ConfigError::EmptyDrugList);
        }
        Ok(config)
    }
}
