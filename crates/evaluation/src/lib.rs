//! Offline evaluation: best-offer selection with CTR@1, uplift metrics
//! (Qini, AUUC, cumulative-gain curve), and the strategy comparison driver.

pub mod comparison;
pub mod selection;
pub mod uplift_metrics;

pub use comparison::{
    compare_all, evaluate_ctr_model, evaluate_rule_based, evaluate_uplift_model,
    ComparisonSummary, StrategyReport,
};
pub use selection::{best_row_per_user, ctr_at_1};
pub use uplift_metrics::{auuc, qini, uplift_curve, write_curve};

use offerlift_core::{LiftError, LiftResult};

/// Score columns are carried alongside the row slice; a length mismatch
/// means the caller never attached them.
pub(crate) fn check_scores(expected: usize, actual: usize) -> LiftResult<()> {
    if expected != actual {
        return Err(LiftError::MissingScores { expected, actual });
    }
    Ok(())
}
