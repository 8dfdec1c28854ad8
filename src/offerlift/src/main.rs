//! OfferLift: offline next-best-offer scoring and evaluation toolkit.
//!
//! Scores user×offer interaction logs with a rule heuristic, a trained CTR
//! model, and a two-model uplift estimator, and evaluates all three with
//! CTR@1, Qini, and AUUC.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use offerlift_core::config::AppConfig;
use offerlift_core::types::Interaction;
use offerlift_dataset::{generate_interactions, load_interactions, write_interactions, SyntheticConfig};
use offerlift_evaluation::{
    compare_all, evaluate_ctr_model, evaluate_rule_based, evaluate_uplift_model, uplift_curve,
    write_curve, StrategyReport,
};
use offerlift_scoring::{
    add_uplift_scores, recommend_best_offer, rule_scores, train_model, ModelKind,
};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "offerlift")]
#[command(about = "Offline next-best-offer scoring and evaluation toolkit")]
#[command(version)]
struct Cli {
    /// Interaction log CSV (overrides config)
    #[arg(long, env = "OFFERLIFT__DATA__DATASET_PATH")]
    dataset: Option<String>,

    /// Model artifact directory (overrides config)
    #[arg(long, env = "OFFERLIFT__MODELS__DIR")]
    model_dir: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train the click models and write their artifacts
    Train {
        /// Restrict to one model: ctr, treatment, control
        #[arg(long)]
        model: Option<String>,
    },

    /// Offline-evaluate one strategy (CTR@1; plus Qini/AUUC for uplift)
    Evaluate {
        /// Scoring strategy: rule, ctr, uplift
        #[arg(long)]
        strategy: String,
    },

    /// Compare all three strategies and print or export the summary
    Compare {
        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Output format: table, json, csv
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Best offer for a single user
    Recommend {
        /// User identifier
        #[arg(long)]
        user: String,

        /// Scoring strategy: rule, uplift
        #[arg(long, default_value = "rule")]
        strategy: String,
    },

    /// Export the cumulative uplift-gain curve as CSV
    Curve {
        /// Output CSV path
        #[arg(short, long)]
        output: String,
    },

    /// Generate a synthetic interaction log for development
    GenerateData {
        /// Number of users
        #[arg(long, default_value_t = 1000)]
        users: usize,

        /// Candidate offers per user
        #[arg(long, default_value_t = 4)]
        offers_per_user: usize,

        /// Fraction of rows in the treatment arm
        #[arg(long, default_value_t = 0.5)]
        treatment_fraction: f64,

        /// RNG seed
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Output CSV path (default: the configured dataset path)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "offerlift=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        AppConfig::default()
    });
    if let Some(dataset) = cli.dataset {
        config.data.dataset_path = dataset;
    }
    if let Some(model_dir) = cli.model_dir {
        config.models.dir = model_dir;
    }

    match cli.command {
        Commands::Train { model } => cmd_train(&config, model.as_deref()),
        Commands::Evaluate { strategy } => cmd_evaluate(&config, &strategy),
        Commands::Compare { output, format } => cmd_compare(&config, output.as_deref(), &format),
        Commands::Recommend { user, strategy } => cmd_recommend(&config, &user, &strategy),
        Commands::Curve { output } => cmd_curve(&config, &output),
        Commands::GenerateData {
            users,
            offers_per_user,
            treatment_fraction,
            seed,
            output,
        } => cmd_generate_data(
            &config,
            users,
            offers_per_user,
            treatment_fraction,
            seed,
            output.as_deref(),
        ),
    }
}

fn load_dataset(config: &AppConfig) -> anyhow::Result<Vec<Interaction>> {
    load_interactions(&config.data.dataset_path)
        .with_context(|| format!("loading dataset from {}", config.data.dataset_path))
}

fn parse_model_kind(s: &str) -> anyhow::Result<ModelKind> {
    match s.to_lowercase().as_str() {
        "ctr" => Ok(ModelKind::Ctr),
        "treatment" => Ok(ModelKind::Treatment),
        "control" => Ok(ModelKind::Control),
        other => bail!("unknown model '{other}' (expected ctr, treatment, or control)"),
    }
}

fn cmd_train(config: &AppConfig, model: Option<&str>) -> anyhow::Result<()> {
    let rows = load_dataset(config)?;

    let kinds = match model {
        Some(name) => vec![parse_model_kind(name)?],
        None => vec![ModelKind::Ctr, ModelKind::Treatment, ModelKind::Control],
    };

    for kind in kinds {
        train_model(kind, &rows, config)?;
    }
    Ok(())
}

fn print_report(report: &StrategyReport) {
    println!("{} CTR@1: {:.4}", report.strategy, report.ctr_at_1);
    if let Some(qini) = report.qini {
        println!("{} Qini: {:.4}", report.strategy, qini);
    }
    if let Some(auuc) = report.auuc {
        println!("{} AUUC: {:.4}", report.strategy, auuc);
    }
}

fn cmd_evaluate(config: &AppConfig, strategy: &str) -> anyhow::Result<()> {
    let rows = load_dataset(config)?;

    let report = match strategy.to_lowercase().as_str() {
        "rule" => evaluate_rule_based(&rows)?,
        "ctr" => evaluate_ctr_model(&rows, config)?,
        "uplift" => evaluate_uplift_model(&rows, config)?,
        other => bail!("unknown strategy '{other}' (expected rule, ctr, or uplift)"),
    };

    print_report(&report);
    Ok(())
}

fn cmd_compare(config: &AppConfig, output: Option<&str>, format: &str) -> anyhow::Result<()> {
    let rows = load_dataset(config)?;
    let summary = compare_all(&rows, config)?;

    match format.to_lowercase().as_str() {
        "table" => print!("{}", summary.render_table()),
        "json" => {
            let json = summary.to_json()?;
            match output {
                Some(path) => std::fs::write(path, json)?,
                None => println!("{json}"),
            }
        }
        "csv" => {
            let path = output.context("--output is required for csv format")?;
            summary.write_csv(path)?;
            info!(path, "Wrote comparison summary");
        }
        other => bail!("unknown format '{other}' (expected table, json, or csv)"),
    }
    Ok(())
}

fn cmd_recommend(config: &AppConfig, user: &str, strategy: &str) -> anyhow::Result<()> {
    let rows = load_dataset(config)?;

    let scores = match strategy.to_lowercase().as_str() {
        "rule" => rule_scores(&rows),
        "uplift" => add_uplift_scores(&rows, config)?.uplift,
        other => bail!("unknown strategy '{other}' (expected rule or uplift)"),
    };

    match recommend_best_offer(&rows, &scores, user)? {
        Some((offer_id, score)) => {
            println!("best offer for {user}: {offer_id} (score {score:.4})")
        }
        None => println!("no candidate rows for user {user}"),
    }
    Ok(())
}

fn cmd_curve(config: &AppConfig, output: &str) -> anyhow::Result<()> {
    let rows = load_dataset(config)?;
    let scores = add_uplift_scores(&rows, config)?;
    let points = uplift_curve(&rows, &scores.uplift)?;
    write_curve(output, &points)?;
    info!(path = output, points = points.len(), "Wrote uplift curve");
    Ok(())
}

fn cmd_generate_data(
    config: &AppConfig,
    users: usize,
    offers_per_user: usize,
    treatment_fraction: f64,
    seed: u64,
    output: Option<&str>,
) -> anyhow::Result<()> {
    let rows = generate_interactions(&SyntheticConfig {
        users,
        offers_per_user,
        treatment_fraction,
        seed,
    });

    let path = output.unwrap_or(&config.data.dataset_path);
    if let Some(parent) = std::path::Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    write_interactions(path, &rows)?;
    Ok(())
}
