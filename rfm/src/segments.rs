use serde::Serialize;
use std::collections::HashMap;
use strum_macros::{AsRefStr, Display as EnumDisplay, EnumIter, EnumString};

use crate::model::RankedRecord;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumDisplay, EnumString, AsRefStr, EnumIter,
)]
pub enum CustomerSegment {
    #[strum(serialize = "Best Customers")]
    #[serde(rename = "Best Customers")]
    BestCustomers,
    #[strum(serialize = "Loyal Customers")]
    #[serde(rename = "Loyal Customers")]
    LoyalCustomers,
    #[strum(serialize = "Potential Churners")]
    #[serde(rename = "Potential Churners")]
    PotentialChurners,
    #[strum(serialize = "Lost Customers")]
    #[serde(rename = "Lost Customers")]
    LostCustomers,
}

impl CustomerSegment {
    pub fn from_score(rfm_score: u32) -> Self {
        match rfm_score {
            13.. => CustomerSegment::BestCustomers,
            9..=12 => CustomerSegment::LoyalCustomers,
            5..=8 => CustomerSegment::PotentialChurners,
            _ => CustomerSegment::LostCustomers,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentCount {
    pub segment: CustomerSegment,
    pub customers: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentSummary {
    pub segment: CustomerSegment,
    pub customers: usize,
    pub mean_recency: f64,
    pub mean_frequency: f64,
    pub mean_monetary: f64,
}

pub fn classify(rows: &[RankedRecord]) -> Vec<CustomerSegment> {
    rows.iter()
        .map(|row| CustomerSegment::from_score(row.rfm_score()))
        .collect()
}

/// Customers per segment, largest segment first. Segments without members
/// are left out.
pub fn segment_counts(rows: &[RankedRecord]) -> Vec<SegmentCount> {
    let mut counts: HashMap<CustomerSegment, usize> = HashMap::new();
    for segment in classify(rows) {
        *counts.entry(segment).or_default() += 1;
    }

    let mut counts: Vec<SegmentCount> = counts
        .into_iter()
        .map(|(segment, customers)| SegmentCount { segment, customers })
        .collect();
    counts.sort_by(|a, b| {
        b.customers
            .cmp(&a.customers)
            .then_with(|| a.segment.as_ref().cmp(b.segment.as_ref()))
    });
    counts
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Mean recency, frequency and monetary value per segment, rounded to two
/// decimals and ordered by segment name.
pub fn segment_analysis(rows: &[RankedRecord]) -> Vec<SegmentSummary> {
    #[derive(Default)]
    struct Totals {
        customers: usize,
        recency: f64,
        frequency: f64,
        monetary: f64,
    }

    let mut totals: HashMap<CustomerSegment, Totals> = HashMap::new();
    for (row, segment) in rows.iter().zip(classify(rows)) {
        let entry = totals.entry(segment).or_default();
        entry.customers += 1;
        entry.recency += row.customer.recency as f64;
        entry.frequency += row.customer.frequency as f64;
        entry.monetary += row.customer.monetary;
    }

    let mut summaries: Vec<SegmentSummary> = totals
        .into_iter()
        .map(|(segment, t)| {
            let n = t.customers as f64;
            SegmentSummary {
                segment,
                customers: t.customers,
                mean_recency: round2(t.recency / n),
                mean_frequency: round2(t.frequency / n),
                mean_monetary: round2(t.monetary / n),
            }
        })
        .collect();
    summaries.sort_by(|a, b| a.segment.as_ref().cmp(b.segment.as_ref()));
    summaries
}
