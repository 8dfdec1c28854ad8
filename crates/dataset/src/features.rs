//! Feature-matrix construction for click-model training and inference.

use ndarray::Array2;
use offerlift_core::types::{Interaction, FEATURE_COLUMNS};

/// One feature vector in [`FEATURE_COLUMNS`] order.
pub fn feature_row(row: &Interaction) -> [f32; FEATURE_COLUMNS.len()] {
    [
        row.recency_days,
        row.frequency_30d,
        row.frequency_90d,
        row.monetary_90d,
        row.avg_purchase_value,
        row.category_encoded,
        row.channel_encoded as f32,
        row.time_morning as f32,
        row.time_afternoon as f32,
        row.time_evening as f32,
        row.time_night as f32,
    ]
}

/// Build an n×11 feature matrix. Each row is one user-offer candidate,
/// columns in [`FEATURE_COLUMNS`] order.
pub fn feature_matrix(rows: &[Interaction]) -> Array2<f32> {
    let mut features = Array2::<f32>::zeros((rows.len(), FEATURE_COLUMNS.len()));
    for (i, interaction) in rows.iter().enumerate() {
        let mut out = features.row_mut(i);
        for (j, value) in feature_row(interaction).into_iter().enumerate() {
            out[j] = value;
        }
    }
    features
}
