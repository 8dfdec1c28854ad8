//! Strategy comparison driver.
//!
//! Runs the rule-based, CTR-model, and uplift-model evaluators over the
//! same log and collects one report per strategy. Only the uplift strategy
//! ranks by a causal score, so only it carries Qini and AUUC.

use crate::selection::ctr_at_1;
use crate::uplift_metrics::{auuc, qini};
use chrono::{DateTime, Utc};
use offerlift_core::config::AppConfig;
use offerlift_core::types::{Interaction, Strategy};
use offerlift_core::LiftResult;
use offerlift_scoring::{add_uplift_scores, load_model, predict_click_proba, rule_scores, ModelKind};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;
use uuid::Uuid;

/// Offline metrics for one scoring strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyReport {
    pub strategy: Strategy,
    pub ctr_at_1: f64,
    pub qini: Option<f64>,
    pub auuc: Option<f64>,
    pub evaluated_rows: usize,
}

/// Summary table over all strategies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonSummary {
    pub report_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub reports: Vec<StrategyReport>,
}

/// CTR@1 of the rule-based heuristic.
pub fn evaluate_rule_based(rows: &[Interaction]) -> LiftResult<StrategyReport> {
    let scores = rule_scores(rows);
    Ok(StrategyReport {
        strategy: Strategy::RuleBased,
        ctr_at_1: ctr_at_1(rows, &scores)?,
        qini: None,
        auuc: None,
        evaluated_rows: rows.len(),
    })
}

/// CTR@1 of the trained CTR model: predict `p_ctr` for every row, pick the
/// max-probability offer per user, measure the click rate.
pub fn evaluate_ctr_model(rows: &[Interaction], config: &AppConfig) -> LiftResult<StrategyReport> {
    let model = load_model(ModelKind::Ctr, config)?;
    let p_ctr = predict_click_proba(&model, rows)?;
    Ok(StrategyReport {
        strategy: Strategy::CtrModel,
        ctr_at_1: ctr_at_1(rows, &p_ctr)?,
        qini: None,
        auuc: None,
        evaluated_rows: rows.len(),
    })
}

/// Offline evaluation of the two-model uplift estimator: CTR@1 when
/// ranking by uplift, plus Qini and AUUC over the uplift column.
pub fn evaluate_uplift_model(
    rows: &[Interaction],
    config: &AppConfig,
) -> LiftResult<StrategyReport> {
    let scores = add_uplift_scores(rows, config)?;
    Ok(StrategyReport {
        strategy: Strategy::UpliftModel,
        ctr_at_1: ctr_at_1(rows, &scores.uplift)?,
        qini: Some(qini(rows, &scores.uplift, config.evaluation.qini_bins)?),
        auuc: Some(auuc(rows, &scores.uplift)?),
        evaluated_rows: rows.len(),
    })
}

/// Run all three evaluators and collect the summary.
pub fn compare_all(rows: &[Interaction], config: &AppConfig) -> LiftResult<ComparisonSummary> {
    info!(rows = rows.len(), "Comparing scoring strategies");

    let reports = vec![
        evaluate_rule_based(rows)?,
        evaluate_ctr_model(rows, config)?,
        evaluate_uplift_model(rows, config)?,
    ];

    for report in &reports {
        info!(
            strategy = report.strategy.as_str(),
            ctr_at_1 = report.ctr_at_1,
            "Strategy evaluated"
        );
    }

    Ok(ComparisonSummary {
        report_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        reports,
    })
}

impl ComparisonSummary {
    /// Aligned text table for terminal output.
    pub fn render_table(&self) -> String {
        let mut out = String::from("strategy        ctr@1     qini      auuc\n");
        for report in &self.reports {
            let qini = report
                .qini
                .map(|v| format!("{v:>8.4}"))
                .unwrap_or_else(|| format!("{:>8}", "-"));
            let auuc = report
                .auuc
                .map(|v| format!("{v:>8.4}"))
                .unwrap_or_else(|| format!("{:>8}", "-"));
            out.push_str(&format!(
                "{:<14}{:>8.4}  {qini}  {auuc}\n",
                report.strategy.as_str(),
                report.ctr_at_1
            ));
        }
        out
    }

    pub fn to_json(&self) -> LiftResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// One CSV line per strategy.
    pub fn write_csv(&self, path: impl AsRef<Path>) -> LiftResult<()> {
        let mut writer = csv::Writer::from_path(path.as_ref())?;
        for report in &self.reports {
            writer.serialize(report)?;
        }
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary_fixture() -> ComparisonSummary {
        ComparisonSummary {
            report_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            reports: vec![
                StrategyReport {
                    strategy: Strategy::RuleBased,
                    ctr_at_1: 0.21,
                    qini: None,
                    auuc: None,
                    evaluated_rows: 100,
                },
                StrategyReport {
                    strategy: Strategy::UpliftModel,
                    ctr_at_1: 0.27,
                    qini: Some(12.0),
                    auuc: Some(3.5),
                    evaluated_rows: 100,
                },
            ],
        }
    }

    #[test]
    fn test_rule_based_evaluator_on_tiny_log() {
        // The clicked offer carries the higher rule score for each user.
        let hot = Interaction {
            user_id: "u1".to_string(),
            offer_id: "hot".to_string(),
            outcome_click: 1,
            recency_days: 2.0,
            channel_encoded: 1,
            ..Default::default()
        };
        let cold = Interaction {
            user_id: "u1".to_string(),
            offer_id: "cold".to_string(),
            recency_days: 90.0,
            ..Default::default()
        };
        let mut hot2 = hot.clone();
        hot2.user_id = "u2".to_string();
        let mut cold2 = cold.clone();
        cold2.user_id = "u2".to_string();

        let report = evaluate_rule_based(&[hot, cold, hot2, cold2]).unwrap();
        assert_eq!(report.strategy, Strategy::RuleBased);
        assert!((report.ctr_at_1 - 1.0).abs() < 1e-12);
        assert!(report.qini.is_none());
    }

    #[test]
    fn test_table_renders_one_line_per_strategy() {
        let table = summary_fixture().render_table();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("rule_based"));
        assert!(lines[1].contains('-'));
        assert!(lines[2].starts_with("uplift_model"));
        assert!(lines[2].contains("12.0000"));
    }

    #[test]
    fn test_json_and_csv_exports() {
        let summary = summary_fixture();

        let json = summary.to_json().unwrap();
        assert!(json.contains("\"rule_based\""));
        assert!(json.contains("\"uplift_model\""));

        let file = tempfile::NamedTempFile::new().unwrap();
        summary.write_csv(file.path()).unwrap();
        let contents = std::fs::read_to_string(file.path()).unwrap();
        assert!(contents.starts_with("strategy,ctr_at_1,qini,auuc,evaluated_rows"));
        assert_eq!(contents.lines().count(), 3);
    }
}
