//! Two-model uplift scoring.
//!
//! The uplift of showing an offer is approximated as the difference between
//! the treatment model's and the control model's click probabilities. No
//! calibration or variance adjustment is applied.

use crate::classifier::ClickModel;
use crate::model::{load_model, ModelKind};
use offerlift_core::config::AppConfig;
use offerlift_core::types::{Interaction, UpliftScores};
use offerlift_core::{LiftError, LiftResult};
use offerlift_dataset::feature_matrix;
use tracing::debug;

/// Score every row with both arm models and attach the uplift column.
pub fn add_uplift_scores(rows: &[Interaction], config: &AppConfig) -> LiftResult<UpliftScores> {
    let treatment_model = load_model(ModelKind::Treatment, config)?;
    let control_model = load_model(ModelKind::Control, config)?;

    let features = feature_matrix(rows);
    let p_treatment = treatment_model.predict_proba(&features)?;
    let p_control = control_model.predict_proba(&features)?;
    let uplift: Vec<f32> = p_treatment
        .iter()
        .zip(&p_control)
        .map(|(treated, control)| treated - control)
        .collect();

    debug!(rows = rows.len(), "Computed uplift scores");
    Ok(UpliftScores {
        p_treatment,
        p_control,
        uplift,
    })
}

/// Best-scoring offer for one user: `(offer_id, score)`, or `None` when the
/// log has no rows for the user. Ties go to the first row in log order.
pub fn recommend_best_offer(
    rows: &[Interaction],
    scores: &[f32],
    user_id: &str,
) -> LiftResult<Option<(String, f32)>> {
    if rows.len() != scores.len() {
        return Err(LiftError::MissingScores {
            expected: rows.len(),
            actual: scores.len(),
        });
    }

    let mut best: Option<(usize, f32)> = None;
    for (index, row) in rows.iter().enumerate() {
        if row.user_id != user_id {
            continue;
        }
        let better = match best {
            Some((_, score)) => scores[index] > score,
            None => true,
        };
        if better {
            best = Some((index, scores[index]));
        }
    }

    Ok(best.map(|(index, score)| (rows[index].offer_id.clone(), score)))
}
