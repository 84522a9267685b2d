use serde::Serialize;
use tracing::info;

use crate::{
    error::RfmError,
    model::{CustomerRecord, RankLabel, RankedRecord, RfmRanks},
    ranking::{BinningStrategy, ascending_labels, create_ranks, descending_labels},
};

/// Labels handed out per metric, in bin order (lowest values first).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingScheme {
    pub recency_labels: Vec<RankLabel>,
    pub frequency_labels: Vec<RankLabel>,
    pub monetary_labels: Vec<RankLabel>,
}

impl RankingScheme {
    /// Recent buyers, frequent buyers and big spenders all rank high.
    pub fn with_bins(bins: usize) -> Self {
        Self {
            recency_labels: descending_labels(bins),
            frequency_labels: ascending_labels(bins),
            monetary_labels: ascending_labels(bins),
        }
    }

    /// Largest composite score this scheme can produce.
    pub fn max_composite(&self) -> u32 {
        [
            &self.recency_labels,
            &self.frequency_labels,
            &self.monetary_labels,
        ]
        .iter()
        .map(|labels| labels.iter().copied().max().unwrap_or(0))
        .sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricStrategies {
    pub recency: BinningStrategy,
    pub frequency: BinningStrategy,
    pub monetary: BinningStrategy,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedTable {
    pub rows: Vec<RankedRecord>,
    pub strategies: MetricStrategies,
}

impl RankedTable {
    pub fn rfm_scores(&self) -> Vec<u32> {
        self.rows.iter().map(RankedRecord::rfm_score).collect()
    }
}

/// Ranks recency, frequency and monetary value independently and sums the
/// three labels into each customer's composite score.
pub fn rank_customers(
    customers: &[CustomerRecord],
    scheme: &RankingScheme,
) -> Result<RankedTable, RfmError> {
    let recency: Vec<f64> = customers.iter().map(|c| c.recency as f64).collect();
    let frequency: Vec<f64> = customers.iter().map(|c| c.frequency as f64).collect();
    let monetary: Vec<f64> = customers.iter().map(|c| c.monetary).collect();

    let r = create_ranks(&recency, &scheme.recency_labels)?;
    let f = create_ranks(&frequency, &scheme.frequency_labels)?;
    let m = create_ranks(&monetary, &scheme.monetary_labels)?;

    let strategies = MetricStrategies {
        recency: r.strategy,
        frequency: f.strategy,
        monetary: m.strategy,
    };
    info!(
        recency = %strategies.recency,
        frequency = %strategies.frequency,
        monetary = %strategies.monetary,
        "Ranked {} customers",
        customers.len()
    );

    let rows = customers
        .iter()
        .zip(r.labels)
        .zip(f.labels)
        .zip(m.labels)
        .map(|(((customer, r), f), m)| RankedRecord::new(customer.clone(), RfmRanks::new(r, f, m)))
        .collect();

    Ok(RankedTable { rows, strategies })
}
