//! Ordinal binning of a single metric.
//!
//! Values are first split into equal-population bins at linearly
//! interpolated quantiles. When the distribution has too many duplicates to
//! yield distinct quantile edges, the values are instead ranked (ties broken
//! by first occurrence) and the ranks are cut into equal-width bins. Either
//! way every row ends up with a label.

use serde::Serialize;
use strum_macros::Display as EnumDisplay;
use tracing::debug;

use crate::{error::RfmError, model::RankLabel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, EnumDisplay)]
pub enum BinningStrategy {
    Quantile,
    RankFallback,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Binned {
    pub labels: Vec<RankLabel>,
    pub strategy: BinningStrategy,
}

/// Labels `1..=bins`, lowest values get the lowest label.
pub fn ascending_labels(bins: usize) -> Vec<RankLabel> {
    (1..=bins as RankLabel).collect()
}

/// Labels `bins..=1`, lowest values get the highest label.
pub fn descending_labels(bins: usize) -> Vec<RankLabel> {
    (1..=bins as RankLabel).rev().collect()
}

/// Assigns `labels[i]` to every value falling in bin `i`.
///
/// The bin count is the number of labels.
pub fn create_ranks(values: &[f64], labels: &[RankLabel]) -> Result<Binned, RfmError> {
    if labels.is_empty() {
        return Err(RfmError::NoLabels);
    }
    if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(RfmError::NonFiniteValue { index, value });
    }

    let bins = labels.len();
    let (bin_ids, strategy) = match quantile_bins(values, bins) {
        Some(ids) => (ids, BinningStrategy::Quantile),
        None => {
            debug!(
                bins,
                rows = values.len(),
                "Too few distinct quantile edges, binning by rank instead"
            );
            (rank_bins(values, bins), BinningStrategy::RankFallback)
        }
    };

    Ok(Binned {
        labels: bin_ids.into_iter().map(|id| labels[id]).collect(),
        strategy,
    })
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    let diff = b - a;
    if t >= 0.5 {
        b - diff * (1.0 - t)
    } else {
        a + diff * t
    }
}

/// Linearly interpolated quantile of an already sorted, non-empty slice.
pub fn quantile(sorted: &[f64], q: f64) -> f64 {
    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = (lower + 1).min(sorted.len() - 1);
    lerp(sorted[lower], sorted[upper], position - lower as f64)
}

/// `count` evenly spaced points from `start` to `stop`, both included.
fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    let step = (stop - start) / (count - 1) as f64;
    let mut points: Vec<f64> = (0..count).map(|i| start + i as f64 * step).collect();
    points[count - 1] = stop;
    points
}

/// Bin index of every value for right-closed edges, the first bin also
/// closed on the left. Values outside the edges never occur here because the
/// edges always span the data.
fn assign_bins(values: &[f64], edges: &[f64]) -> Vec<usize> {
    let last = edges.len() - 2;
    values
        .iter()
        .map(|&value| {
            let upper = edges.partition_point(|&edge| edge < value);
            upper.saturating_sub(1).min(last)
        })
        .collect()
}

fn quantile_bins(values: &[f64], bins: usize) -> Option<Vec<usize>> {
    if values.is_empty() {
        return Some(Vec::new());
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mut edges: Vec<f64> = (0..=bins)
        .map(|i| quantile(&sorted, i as f64 / bins as f64))
        .collect();
    edges.dedup();

    if edges.len() < bins + 1 {
        return None;
    }
    Some(assign_bins(values, &edges))
}

/// 1-based ordinal rank of every value, ties broken by position.
pub fn rank_first(values: &[f64]) -> Vec<f64> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));

    let mut ranks = vec![0.0; values.len()];
    for (rank, idx) in order.into_iter().enumerate() {
        ranks[idx] = (rank + 1) as f64;
    }
    ranks
}

fn rank_bins(values: &[f64], bins: usize) -> Vec<usize> {
    if values.is_empty() {
        return Vec::new();
    }

    let ranks = rank_first(values);
    let min = ranks.iter().copied().fold(f64::INFINITY, f64::min);
    let max = ranks.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let edges = if min == max {
        // A single row: widen the degenerate range around its rank.
        let pad = 0.001 * min.abs();
        linspace(min - pad, max + pad, bins + 1)
    } else {
        let mut edges = linspace(min, max, bins + 1);
        edges[0] -= (max - min) * 0.001;
        edges
    };

    assign_bins(&ranks, &edges)
}
