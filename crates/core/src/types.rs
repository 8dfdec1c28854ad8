use serde::{Deserialize, Serialize};

/// Canonical feature order shared by the rule scorer and all click models.
/// Training and inference must agree on this layout.
pub const FEATURE_COLUMNS: [&str; 11] = [
    "recency_days",
    "frequency_30d",
    "frequency_90d",
    "monetary_90d",
    "avg_purchase_value",
    "category_encoded",
    "channel_encoded",
    "time_morning",
    "time_afternoon",
    "time_evening",
    "time_night",
];

pub const USER_COLUMN: &str = "user_id";
pub const OFFER_COLUMN: &str = "offer_id";
pub const TREATMENT_COLUMN: &str = "treatment";
pub const OUTCOME_COLUMN: &str = "outcome_click";

/// One row of the historical interaction log: a user×offer candidate with
/// contextual features, the treatment flag, and the observed click outcome.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    pub user_id: String,
    pub offer_id: String,
    /// 1 if the offer was actually shown, 0 for the held-out control arm.
    pub treatment: u8,
    /// 1 if the user clicked.
    pub outcome_click: u8,
    pub recency_days: f32,
    pub frequency_30d: f32,
    pub frequency_90d: f32,
    pub monetary_90d: f32,
    pub avg_purchase_value: f32,
    pub category_encoded: f32,
    /// Contact channel code: 1 = mobile push, 2 = in-app.
    pub channel_encoded: u32,
    pub time_morning: u8,
    pub time_afternoon: u8,
    pub time_evening: u8,
    pub time_night: u8,
}

impl Interaction {
    pub fn is_treated(&self) -> bool {
        self.treatment == 1
    }

    pub fn clicked(&self) -> bool {
        self.outcome_click == 1
    }
}

/// Offer scoring strategy under offline evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    RuleBased,
    CtrModel,
    UpliftModel,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::RuleBased => "rule_based",
            Strategy::CtrModel => "ctr_model",
            Strategy::UpliftModel => "uplift_model",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-row uplift score columns, aligned with the row slice they were
/// computed from.
#[derive(Debug, Clone)]
pub struct UpliftScores {
    /// Predicted click probability under treatment.
    pub p_treatment: Vec<f32>,
    /// Predicted click probability under control.
    pub p_control: Vec<f32>,
    /// `p_treatment - p_control`.
    pub uplift: Vec<f32>,
}

/// One point of the cumulative uplift-gain curve (rows ordered by
/// descending uplift).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurvePoint {
    /// 1-based position in descending-uplift order.
    pub rank: usize,
    /// `rank / n`, the fraction of the population targeted so far.
    pub fraction: f64,
    pub cumulative_gain: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_names_are_snake_case() {
        assert_eq!(Strategy::RuleBased.to_string(), "rule_based");
        assert_eq!(Strategy::CtrModel.to_string(), "ctr_model");
        assert_eq!(Strategy::UpliftModel.to_string(), "uplift_model");
    }

    #[test]
    fn test_interaction_flags() {
        let row = Interaction {
            treatment: 1,
            outcome_click: 0,
            ..Default::default()
        };
        assert!(row.is_treated());
        assert!(!row.clicked());
    }
}
