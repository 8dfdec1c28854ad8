//! Rule-based heuristic scorer.
//!
//! A fixed-constant weighted sum of threshold indicators over recency,
//! frequency, monetary value, basket size, time of day, and contact
//! channel. No learned parameters.

use offerlift_core::types::Interaction;

/// Heuristic score for one user-offer candidate.
pub fn rule_score(row: &Interaction) -> f32 {
    let mut score = 0.0;

    // recent activity
    if row.recency_days <= 7.0 {
        score += 3.0;
    } else if row.recency_days <= 30.0 {
        score += 1.5;
    }

    // purchase frequency
    if row.frequency_30d >= 3.0 {
        score += 2.0;
    } else if row.frequency_30d >= 1.0 {
        score += 1.0;
    }

    // 90-day spend
    if row.monetary_90d >= 20_000.0 {
        score += 2.5;
    } else if row.monetary_90d >= 5_000.0 {
        score += 1.0;
    }

    // basket size
    if row.avg_purchase_value >= 5_000.0 {
        score += 1.0;
    }

    // time of day (one-hot flags)
    if row.time_evening == 1 {
        score += 0.7;
    } else if row.time_afternoon == 1 {
        score += 0.4;
    } else if row.time_night == 1 {
        score += 0.2;
    }

    // contact channel: 1 = mobile push, 2 = in-app
    match row.channel_encoded {
        1 => score += 1.0,
        2 => score += 0.5,
        _ => {}
    }

    score
}

/// Score every row of an interaction log.
pub fn rule_scores(rows: &[Interaction]) -> Vec<f32> {
    rows.iter().map(rule_score).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn baseline() -> Interaction {
        Interaction {
            recency_days: 100.0,
            ..Default::default()
        }
    }

    // 1. Known scores -------------------------------------------------------

    #[test]
    fn test_all_thresholds_hit_gives_maximum_score() {
        let row = Interaction {
            recency_days: 3.0,
            frequency_30d: 5.0,
            monetary_90d: 25_000.0,
            avg_purchase_value: 6_000.0,
            time_evening: 1,
            channel_encoded: 1,
            ..Default::default()
        };
        // 3.0 + 2.0 + 2.5 + 1.0 + 0.7 + 1.0
        assert!((rule_score(&row) - 10.2).abs() < 1e-6);
    }

    #[test]
    fn test_cold_row_scores_zero() {
        assert_eq!(rule_score(&baseline()), 0.0);
    }

    // 2. Monotonicity per threshold dimension -------------------------------

    #[test]
    fn test_monotonic_in_recency() {
        let mut far = baseline();
        far.recency_days = 60.0;
        let mut mid = baseline();
        mid.recency_days = 20.0;
        let mut near = baseline();
        near.recency_days = 2.0;
        assert!(rule_score(&far) <= rule_score(&mid));
        assert!(rule_score(&mid) <= rule_score(&near));
    }

    #[test]
    fn test_monotonic_in_frequency() {
        let scores: Vec<f32> = [0.0, 1.0, 2.0, 3.0, 10.0]
            .into_iter()
            .map(|frequency| {
                let mut row = baseline();
                row.frequency_30d = frequency;
                rule_score(&row)
            })
            .collect();
        assert!(scores.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn test_monotonic_in_monetary() {
        let scores: Vec<f32> = [0.0, 5_000.0, 19_999.0, 20_000.0, 50_000.0]
            .into_iter()
            .map(|monetary| {
                let mut row = baseline();
                row.monetary_90d = monetary;
                rule_score(&row)
            })
            .collect();
        assert!(scores.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn test_monotonic_in_basket_size() {
        let mut small = baseline();
        small.avg_purchase_value = 1_000.0;
        let mut large = baseline();
        large.avg_purchase_value = 5_000.0;
        assert!(rule_score(&small) <= rule_score(&large));
    }

    // 3. Batch pass ---------------------------------------------------------

    #[test]
    fn test_batch_matches_single_row_scoring() {
        let rows = vec![
            baseline(),
            Interaction {
                recency_days: 2.0,
                channel_encoded: 2,
                ..Default::default()
            },
        ];
        let scores = rule_scores(&rows);
        assert_eq!(scores.len(), 2);
        assert_eq!(scores[0], rule_score(&rows[0]));
        assert_eq!(scores[1], rule_score(&rows[1]));
    }
}
