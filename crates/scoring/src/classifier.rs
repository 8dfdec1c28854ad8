//! Binary click-probability classifier seam.
//!
//! The toolkit only needs "fit(X, y) → model" and "predict_proba(model, X)
//! → probabilities"; everything else about the underlying gradient-boosting
//! library (tree construction, serialization format) is opaque. The default
//! implementation wraps the `gbdt` crate.

use gbdt::config::Config;
use gbdt::decision_tree::{Data, DataVec};
use gbdt::gradient_boost::GBDT;
use ndarray::Array2;
use offerlift_core::config::TrainingConfig;
use offerlift_core::types::FEATURE_COLUMNS;
use offerlift_core::{LiftError, LiftResult};
use std::path::Path;

/// Binary classifier over interaction feature matrices.
pub trait ClickModel {
    /// Fit on a feature matrix and 0/1 click labels.
    fn fit(&mut self, features: &Array2<f32>, labels: &[u8]) -> LiftResult<()>;

    /// Predicted probability of a click, one value per row.
    fn predict_proba(&self, features: &Array2<f32>) -> LiftResult<Vec<f32>>;

    /// Persist the model artifact.
    fn save(&self, path: &Path) -> LiftResult<()>;
}

/// Gradient-boosted decision trees with logistic loss.
pub struct GbdtClickModel {
    model: GBDT,
}

impl GbdtClickModel {
    pub fn new(training: &TrainingConfig) -> Self {
        let mut config = Config::new();
        config.set_feature_size(FEATURE_COLUMNS.len());
        config.set_max_depth(training.max_depth);
        config.set_iterations(training.iterations);
        config.set_shrinkage(training.shrinkage);
        config.set_loss("LogLikelyhood");
        config.set_debug(false);

        Self {
            model: GBDT::new(&config),
        }
    }

    /// Read a serialized model artifact from disk.
    pub fn load(path: &Path) -> LiftResult<Self> {
        let model = GBDT::load_model(&path.to_string_lossy())
            .map_err(|e| LiftError::ModelLoad(format!("{}: {e}", path.display())))?;
        Ok(Self { model })
    }
}

impl ClickModel for GbdtClickModel {
    fn fit(&mut self, features: &Array2<f32>, labels: &[u8]) -> LiftResult<()> {
        if labels.is_empty() {
            return Err(LiftError::Training("no rows to fit on".to_string()));
        }
        if features.nrows() != labels.len() {
            return Err(LiftError::Training(format!(
                "feature matrix has {} rows but {} labels",
                features.nrows(),
                labels.len()
            )));
        }

        // LogLikelyhood expects ±1 labels.
        let mut data: DataVec = (0..features.nrows())
            .map(|i| {
                let label = if labels[i] == 1 { 1.0 } else { -1.0 };
                Data::new_training_data(features.row(i).to_vec(), 1.0, label, None)
            })
            .collect();

        self.model.fit(&mut data);
        Ok(())
    }

    fn predict_proba(&self, features: &Array2<f32>) -> LiftResult<Vec<f32>> {
        let data: DataVec = (0..features.nrows())
            .map(|i| Data::new_test_data(features.row(i).to_vec(), None))
            .collect();

        // With logistic loss, predict() yields the positive-class probability.
        Ok(self.model.predict(&data))
    }

    fn save(&self, path: &Path) -> LiftResult<()> {
        self.model
            .save_model(&path.to_string_lossy())
            .map_err(|e| LiftError::ModelSave(format!("{}: {e}", path.display())))
    }
}
