//! Deterministic synthetic interaction logs for development and testing.
//!
//! The click propensity responds to recency, frequency, and the treatment
//! flag, so trained models have recoverable signal and the uplift models
//! see a real treatment effect.

use offerlift_core::types::Interaction;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

#[derive(Debug, Clone)]
pub struct SyntheticConfig {
    pub users: usize,
    pub offers_per_user: usize,
    pub treatment_fraction: f64,
    pub seed: u64,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            users: 1000,
            offers_per_user: 4,
            treatment_fraction: 0.5,
            seed: 42,
        }
    }
}

/// Generate `users × offers_per_user` interaction rows. Deterministic for
/// a fixed config.
pub fn generate_interactions(config: &SyntheticConfig) -> Vec<Interaction> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut rows = Vec::with_capacity(config.users * config.offers_per_user);

    for user in 0..config.users {
        let user_id = format!("user-{user:05}");

        // User-level context shared by all of the user's candidate offers.
        let recency_days = rng.gen_range(0.0_f32..120.0);
        let frequency_30d = rng.gen_range(0..6) as f32;
        let frequency_90d = frequency_30d + rng.gen_range(0..9) as f32;
        let monetary_90d = rng.gen_range(0.0_f32..40_000.0);
        let avg_purchase_value = rng.gen_range(100.0_f32..10_000.0);

        for offer in 0..config.offers_per_user {
            let category = rng.gen_range(0..8);
            let channel = rng.gen_range(0..4_u32);
            let slot = rng.gen_range(0..4_usize);
            let treatment = u8::from(rng.gen_bool(config.treatment_fraction));

            let mut propensity: f64 = 0.03;
            if recency_days <= 7.0 {
                propensity += 0.10;
            } else if recency_days <= 30.0 {
                propensity += 0.04;
            }
            if frequency_30d >= 3.0 {
                propensity += 0.05;
            }
            if slot == 2 {
                // evening
                propensity += 0.02;
            }
            if treatment == 1 {
                // the uplift the two-model estimator should recover
                propensity += 0.05;
                if frequency_30d >= 1.0 {
                    propensity += 0.03;
                }
            }

            let outcome_click = u8::from(rng.gen_bool(propensity.min(0.95)));

            rows.push(Interaction {
                user_id: user_id.clone(),
                offer_id: format!("offer-{category}-{offer}"),
                treatment,
                outcome_click,
                recency_days,
                frequency_30d,
                frequency_90d,
                monetary_90d,
                avg_purchase_value,
                category_encoded: category as f32,
                channel_encoded: channel,
                time_morning: u8::from(slot == 0),
                time_afternoon: u8::from(slot == 1),
                time_evening: u8::from(slot == 2),
                time_night: u8::from(slot == 3),
            });
        }
    }

    info!(
        users = config.users,
        rows = rows.len(),
        seed = config.seed,
        "Generated synthetic interaction log"
    );
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_is_deterministic() {
        let config = SyntheticConfig {
            users: 20,
            ..Default::default()
        };
        let first = generate_interactions(&config);
        let second = generate_interactions(&config);
        assert_eq!(first, second);
    }

    #[test]
    fn test_row_count_and_one_hot_slots() {
        let config = SyntheticConfig {
            users: 10,
            offers_per_user: 3,
            ..Default::default()
        };
        let rows = generate_interactions(&config);
        assert_eq!(rows.len(), 30);
        for row in &rows {
            let slots =
                row.time_morning + row.time_afternoon + row.time_evening + row.time_night;
            assert_eq!(slots, 1, "exactly one time-of-day flag per row");
            assert!(row.treatment <= 1);
            assert!(row.outcome_click <= 1);
        }
    }

    #[test]
    fn test_both_arms_are_populated() {
        let rows = generate_interactions(&SyntheticConfig {
            users: 200,
            ..Default::default()
        });
        assert!(rows.iter().any(|r| r.treatment == 1));
        assert!(rows.iter().any(|r| r.treatment == 0));
    }
}
