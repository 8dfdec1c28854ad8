//! Offer scoring strategies: the rule-based heuristic, gradient-boosted
//! click models (CTR, treatment, control), and the two-model uplift score.

pub mod classifier;
pub mod model;
pub mod rule;
pub mod uplift;

pub use classifier::{ClickModel, GbdtClickModel};
pub use model::{load_model, predict_click_proba, train_model, ModelKind};
pub use rule::{rule_score, rule_scores};
pub use uplift::{add_uplift_scores, recommend_best_offer};
