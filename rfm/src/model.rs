use chrono::{DateTime, Utc};
use serde::Serialize;

pub type ModelId = i64;

/// Ordinal label handed out by the rank assigner.
pub type RankLabel = u32;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerRecord {
    pub customer_id: ModelId,
    pub last_purchase_at: DateTime<Utc>,
    /// Whole days between the reference date and the last purchase.
    pub recency: i64,
    pub frequency: i64,
    pub monetary: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RfmRanks {
    pub recency: RankLabel,
    pub frequency: RankLabel,
    pub monetary: RankLabel,
}

impl RfmRanks {
    pub fn new(recency: RankLabel, frequency: RankLabel, monetary: RankLabel) -> Self {
        Self {
            recency,
            frequency,
            monetary,
        }
    }

    pub fn composite(&self) -> u32 {
        self.recency + self.frequency + self.monetary
    }
}

/// A customer together with its three rank labels.
///
/// The composite score is fixed at construction from the ranks, so it can
/// never drift from their sum.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedRecord {
    pub customer: CustomerRecord,
    pub ranks: RfmRanks,
    rfm_score: u32,
}

impl RankedRecord {
    pub fn new(customer: CustomerRecord, ranks: RfmRanks) -> Self {
        Self {
            customer,
            rfm_score: ranks.composite(),
            ranks,
        }
    }

    pub fn rfm_score(&self) -> u32 {
        self.rfm_score
    }
}

/// One score per customer for a single product category, in customer order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryScores {
    pub category: String,
    pub scores: Vec<f64>,
}

impl CategoryScores {
    pub fn new(category: impl Into<String>, scores: Vec<f64>) -> Self {
        Self {
            category: category.into(),
            scores,
        }
    }
}
