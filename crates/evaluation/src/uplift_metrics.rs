//! Qini, AUUC, and the cumulative uplift-gain curve.
//!
//! All three rank the log by descending uplift score. Qini works in
//! equal-frequency buckets and reports the final cumulative
//! treated-minus-control click count; AUUC is the normalized area under
//! the per-row cumulative-gain series.

use crate::check_scores;
use offerlift_core::types::{CurvePoint, Interaction};
use offerlift_core::{LiftError, LiftResult};
use std::cmp::Ordering;
use std::path::Path;

/// Row indices in descending-uplift order. The sort is stable, so tied
/// scores keep log order.
fn descending_order(uplift: &[f32]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..uplift.len()).collect();
    order.sort_by(|&a, &b| {
        uplift[b]
            .partial_cmp(&uplift[a])
            .unwrap_or(Ordering::Equal)
    });
    order
}

/// Qini coefficient, cumulative form: bucket the descending-uplift
/// ranking into `n_bins` equal-frequency bins, accumulate
/// per-bin (treated clicks − control clicks), and report the final
/// cumulative value.
pub fn qini(rows: &[Interaction], uplift: &[f32], n_bins: usize) -> LiftResult<f64> {
    check_scores(rows.len(), uplift.len())?;
    if rows.is_empty() {
        return Err(LiftError::EmptyDataset);
    }

    let n_bins = n_bins.max(1);
    let order = descending_order(uplift);
    let n = order.len();

    let mut treated_clicks = vec![0_i64; n_bins];
    let mut control_clicks = vec![0_i64; n_bins];
    for (position, &index) in order.iter().enumerate() {
        let bucket = position * n_bins / n;
        let row = &rows[index];
        if row.outcome_click == 1 {
            if row.treatment == 1 {
                treated_clicks[bucket] += 1;
            } else {
                control_clicks[bucket] += 1;
            }
        }
    }

    let mut cumulative = 0_i64;
    for bucket in 0..n_bins {
        cumulative += treated_clicks[bucket] - control_clicks[bucket];
    }
    Ok(cumulative as f64)
}

/// Area under the uplift curve: per-row signed gain (`+outcome_click` if
/// treated, `-outcome_click` if control) in descending-uplift order,
/// cumulative-summed, normalized by the row count.
pub fn auuc(rows: &[Interaction], uplift: &[f32]) -> LiftResult<f64> {
    check_scores(rows.len(), uplift.len())?;
    if rows.is_empty() {
        return Err(LiftError::EmptyDataset);
    }

    let order = descending_order(uplift);
    let mut cumulative = 0.0_f64;
    let mut area = 0.0_f64;
    for &index in &order {
        cumulative += signed_gain(&rows[index]);
        area += cumulative;
    }
    Ok(area / order.len() as f64)
}

/// The cumulative-gain series behind AUUC, one point per row, for export
/// and visual inspection.
pub fn uplift_curve(rows: &[Interaction], uplift: &[f32]) -> LiftResult<Vec<CurvePoint>> {
    check_scores(rows.len(), uplift.len())?;
    if rows.is_empty() {
        return Err(LiftError::EmptyDataset);
    }

    let order = descending_order(uplift);
    let n = order.len();
    let mut cumulative = 0.0_f64;
    let mut points = Vec::with_capacity(n);
    for (position, &index) in order.iter().enumerate() {
        cumulative += signed_gain(&rows[index]);
        points.push(CurvePoint {
            rank: position + 1,
            fraction: (position + 1) as f64 / n as f64,
            cumulative_gain: cumulative,
        });
    }
    Ok(points)
}

/// Write curve points as CSV (`rank,fraction,cumulative_gain`).
pub fn write_curve(path: impl AsRef<Path>, points: &[CurvePoint]) -> LiftResult<()> {
    let mut writer = csv::Writer::from_path(path.as_ref())?;
    for point in points {
        writer.serialize(point)?;
    }
    writer.flush()?;
    Ok(())
}

fn signed_gain(row: &Interaction) -> f64 {
    if row.treatment == 1 {
        f64::from(row.outcome_click)
    } else {
        -f64::from(row.outcome_click)
    }
}
