use std::path::{Path, PathBuf};

use anyhow::Context;
use machine_learning::Dataset;
use serde::Deserialize;

use crate::loader;

/// Where the training observations come from.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DatasetConfig {
    /// A CSV file, relative paths are resolved against the config's directory.
    Local { path: PathBuf, x_size: usize },
    /// Row-major rows of `x_size` features followed by their label.
    Inline { data: Vec<f64>, x_size: usize },
}

impl DatasetConfig {
    /// Loads the dataset this config points to.
    ///
    /// # Arguments
    /// * `base_dir` - The directory relative paths are resolved against.
    pub fn load(&self, base_dir: &Path) -> anyhow::Result<Dataset> {
        match self {
            DatasetConfig::Local { path, x_size } => {
                let path = base_dir.join(path);
                loader::load_csv(&path, *x_size)
            }
            DatasetConfig::Inline { data, x_size } => {
                Dataset::from_flat(data, *x_size).context("invalid inline dataset")
            }
        }
    }
}

/// A training run read from a JSON file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrainingConfig {
    pub dataset: DatasetConfig,
    pub iterations: usize,
    pub learning_rate: f64,
    /// Inputs to predict once training is done.
    #[serde(default)]
    pub predict: Vec<Vec<f64>>,
}

impl TrainingConfig {
    /// Reads a `TrainingConfig` from a JSON file.
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read '{}'", path.display()))?;

        Self::from_json(&content).with_context(|| format!("invalid config '{}'", path.display()))
    }

    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}
