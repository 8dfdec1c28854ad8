//! Best-offer selection and CTR@1.
//!
//! The recurring offline-evaluation move: pick each user's top-scoring
//! candidate row, then measure the click rate over the selected rows.

use crate::check_scores;
use offerlift_core::types::Interaction;
use offerlift_core::{LiftError, LiftResult};
use std::collections::HashMap;

/// Index of the best-scoring row per user. Ties break to the first
/// occurrence in log order, so the selection is deterministic for a fixed
/// row order.
pub fn best_row_per_user(rows: &[Interaction], scores: &[f32]) -> LiftResult<Vec<usize>> {
    check_scores(rows.len(), scores.len())?;

    let mut best: HashMap<&str, (usize, f32)> = HashMap::new();
    for (index, row) in rows.iter().enumerate() {
        match best.get_mut(row.user_id.as_str()) {
            Some(entry) => {
                if scores[index] > entry.1 {
                    *entry = (index, scores[index]);
                }
            }
            None => {
                best.insert(row.user_id.as_str(), (index, scores[index]));
            }
        }
    }

    let mut selected: Vec<usize> = best.into_values().map(|(index, _)| index).collect();
    selected.sort_unstable();
    Ok(selected)
}

/// Click-through rate when presenting exactly the top-ranked offer per
/// user: the mean `outcome_click` over each user's best-scoring row.
pub fn ctr_at_1(rows: &[Interaction], scores: &[f32]) -> LiftResult<f64> {
    let selected = best_row_per_user(rows, scores)?;
    if selected.is_empty() {
        return Err(LiftError::EmptyDataset);
    }

    let clicks = selected
        .iter()
        .filter(|&&index| rows[index].outcome_click == 1)
        .count();
    Ok(clicks as f64 / selected.len() as f64)
}
