//! Click-model adapters: CTR, treatment, and control.
//!
//! All three share hyperparameters and the feature layout and differ only
//! in which treatment arm they train on and where their artifact lives.
//! Models are re-read from disk on every call; nothing is cached between
//! invocations.

use crate::classifier::{ClickModel, GbdtClickModel};
use offerlift_core::config::{AppConfig, ModelsConfig};
use offerlift_core::types::Interaction;
use offerlift_core::{LiftError, LiftResult};
use offerlift_dataset::feature_matrix;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    /// Click-through model, trained on rows where the offer was shown.
    Ctr,
    /// Uplift numerator: click probability under treatment.
    Treatment,
    /// Uplift denominator: click probability under control.
    Control,
}

impl ModelKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::Ctr => "ctr",
            ModelKind::Treatment => "treatment",
            ModelKind::Control => "control",
        }
    }

    pub fn artifact_path(&self, models: &ModelsConfig) -> PathBuf {
        match self {
            ModelKind::Ctr => models.ctr_path(),
            ModelKind::Treatment => models.treatment_path(),
            ModelKind::Control => models.control_path(),
        }
    }

    /// Which treatment arm this model trains on.
    fn training_arm(&self) -> u8 {
        match self {
            ModelKind::Ctr | ModelKind::Treatment => 1,
            ModelKind::Control => 0,
        }
    }
}

impl std::fmt::Display for ModelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Train one click model on its treatment arm and save the artifact.
pub fn train_model(
    kind: ModelKind,
    rows: &[Interaction],
    config: &AppConfig,
) -> LiftResult<GbdtClickModel> {
    let arm = kind.training_arm();
    let selected: Vec<Interaction> = rows
        .iter()
        .filter(|row| row.treatment == arm)
        .cloned()
        .collect();
    if selected.is_empty() {
        return Err(LiftError::Training(format!(
            "no rows with treatment={arm} to train the {kind} model on"
        )));
    }

    let features = feature_matrix(&selected);
    let labels: Vec<u8> = selected.iter().map(|row| row.outcome_click).collect();

    let mut model = GbdtClickModel::new(&config.training);
    model.fit(&features, &labels)?;

    let path = kind.artifact_path(&config.models);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    model.save(&path)?;

    info!(
        model = kind.as_str(),
        rows = selected.len(),
        clicks = labels.iter().filter(|&&l| l == 1).count(),
        path = %path.display(),
        "Trained and saved click model"
    );
    Ok(model)
}

/// Read one click model's artifact from disk.
pub fn load_model(kind: ModelKind, config: &AppConfig) -> LiftResult<GbdtClickModel> {
    let path = kind.artifact_path(&config.models);
    let model = GbdtClickModel::load(&path)?;
    debug!(model = kind.as_str(), path = %path.display(), "Loaded click model");
    Ok(model)
}

/// Predicted click probability for every row of the log.
pub fn predict_click_proba(
    model: &GbdtClickModel,
    rows: &[Interaction],
) -> LiftResult<Vec<f32>> {
    model.predict_proba(&feature_matrix(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use offerlift_dataset::{generate_interactions, SyntheticConfig};

    fn temp_config(dir: &std::path::Path) -> AppConfig {
        let mut config = AppConfig::default();
        config.models.dir = dir.to_string_lossy().to_string();
        config.training.iterations = 10;
        config
    }

    #[test]
    fn test_train_writes_artifact_and_predicts() {
        let dir = tempfile::tempdir().unwrap();
        let config = temp_config(dir.path());
        let rows = generate_interactions(&SyntheticConfig {
            users: 100,
            ..Default::default()
        });

        let model = train_model(ModelKind::Ctr, &rows, &config).unwrap();
        assert!(config.models.ctr_path().exists());

        let probabilities = predict_click_proba(&model, &rows).unwrap();
        assert_eq!(probabilities.len(), rows.len());
        assert!(probabilities.iter().all(|p| (0.0..=1.0).contains(p)));

        // Round-trip through the artifact.
        let loaded = load_model(ModelKind::Ctr, &config).unwrap();
        let reloaded = predict_click_proba(&loaded, &rows).unwrap();
        for (a, b) in probabilities.iter().zip(&reloaded) {
            assert!((a - b).abs() < 1e-6);
        }
    }

    #[test]
    fn test_training_arm_filter() {
        assert_eq!(ModelKind::Ctr.training_arm(), 1);
        assert_eq!(ModelKind::Treatment.training_arm(), 1);
        assert_eq!(ModelKind::Control.training_arm(), 0);
    }

    #[test]
    fn test_empty_arm_errors() {
        let dir = tempfile::tempdir().unwrap();
        let config = temp_config(dir.path());
        // All rows in the control arm; the treatment model has nothing to fit.
        let rows: Vec<Interaction> = (0..10)
            .map(|i| Interaction {
                user_id: format!("u{i}"),
                offer_id: "o1".to_string(),
                treatment: 0,
                ..Default::default()
            })
            .collect();

        assert!(matches!(
            train_model(ModelKind::Treatment, &rows, &config),
            Err(LiftError::Training(_))
        ));
    }

    #[test]
    fn test_load_without_artifact_errors() {
        let dir = tempfile::tempdir().unwrap();
        let config = temp_config(dir.path());
        assert!(matches!(
            load_model(ModelKind::Control, &config),
            Err(LiftError::ModelLoad(_))
        ));
    }
}
