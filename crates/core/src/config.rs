use serde::Deserialize;
use std::path::PathBuf;

/// Root application configuration. Loaded from environment variables
/// with the prefix `OFFERLIFT__`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub models: ModelsConfig,
    #[serde(default)]
    pub training: TrainingConfig,
    #[serde(default)]
    pub evaluation: EvaluationConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_dataset_path")]
    pub dataset_path: String,
}

/// Where serialized click-model artifacts live. Models are re-read from
/// disk on every call; nothing is cached across invocations.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelsConfig {
    #[serde(default = "default_model_dir")]
    pub dir: String,
    #[serde(default = "default_ctr_file")]
    pub ctr_file: String,
    #[serde(default = "default_treatment_file")]
    pub treatment_file: String,
    #[serde(default = "default_control_file")]
    pub control_file: String,
}

impl ModelsConfig {
    pub fn ctr_path(&self) -> PathBuf {
        PathBuf::from(&self.dir).join(&self.ctr_file)
    }

    pub fn treatment_path(&self) -> PathBuf {
        PathBuf::from(&self.dir).join(&self.treatment_file)
    }

    pub fn control_path(&self) -> PathBuf {
        PathBuf::from(&self.dir).join(&self.control_file)
    }
}

/// Gradient-boosting hyperparameters, shared by all three click models.
#[derive(Debug, Clone, Deserialize)]
pub struct TrainingConfig {
    #[serde(default = "default_max_depth")]
    pub max_depth: u32,
    #[serde(default = "default_iterations")]
    pub iterations: usize,
    #[serde(default = "default_shrinkage")]
    pub shrinkage: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EvaluationConfig {
    #[serde(default = "default_qini_bins")]
    pub qini_bins: usize,
}

// Default functions
fn default_dataset_path() -> String {
    "data/nbo_dataset.csv".to_string()
}
fn default_model_dir() -> String {
    "models".to_string()
}
fn default_ctr_file() -> String {
    "ctr_model.json".to_string()
}
fn default_treatment_file() -> String {
    "treatment_model.json".to_string()
}
fn default_control_file() -> String {
    "control_model.json".to_string()
}
fn default_max_depth() -> u32 {
    6
}
fn default_iterations() -> usize {
    100
}
fn default_shrinkage() -> f32 {
    0.1
}
fn default_qini_bins() -> usize {
    10
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dataset_path: default_dataset_path(),
        }
    }
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            dir: default_model_dir(),
            ctr_file: default_ctr_file(),
            treatment_file: default_treatment_file(),
            control_file: default_control_file(),
        }
    }
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            iterations: default_iterations(),
            shrinkage: default_shrinkage(),
        }
    }
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            qini_bins: default_qini_bins(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data: DataConfig::default(),
            models: ModelsConfig::default(),
            training: TrainingConfig::default(),
            evaluation: EvaluationConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder().add_source(
            config::Environment::with_prefix("OFFERLIFT")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_artifact_layout() {
        let config = AppConfig::default();
        assert_eq!(config.models.ctr_path(), PathBuf::from("models/ctr_model.json"));
        assert_eq!(
            config.models.treatment_path(),
            PathBuf::from("models/treatment_model.json")
        );
        assert_eq!(
            config.models.control_path(),
            PathBuf::from("models/control_model.json")
        );
        assert_eq!(config.evaluation.qini_bins, 10);
    }
}
