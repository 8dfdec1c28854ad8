//! Throughput probe for the rule scorer over a synthetic log.
//! Run with: cargo bench -p offerlift-scoring

use offerlift_dataset::{generate_interactions, SyntheticConfig};
use offerlift_scoring::rule_scores;
use std::time::Instant;

fn main() {
    let rows = generate_interactions(&SyntheticConfig {
        users: 50_000,
        offers_per_user: 4,
        ..Default::default()
    });

    let start = Instant::now();
    let scores = rule_scores(&rows);
    let elapsed = start.elapsed();

    println!(
        "scored {} rows in {:?} ({:.0} rows/ms), mean score {:.3}",
        rows.len(),
        elapsed,
        rows.len() as f64 / elapsed.as_millis().max(1) as f64,
        scores.iter().map(|s| *s as f64).sum::<f64>() / scores.len() as f64
    );
}
