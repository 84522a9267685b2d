use chrono::{DateTime, Utc};
use common::config::Config;
use serde::Serialize;
use tracing::{debug, info};

use crate::{
    error::RfmError,
    generator::{generate_customers, seeded_rng},
    model::CategoryScores,
    recommendation::{adjust_recommendations, top_categories},
    scorers::{BaseScorer, RandomBaseScorer},
    scoring::{RankedTable, RankingScheme, rank_customers},
    segments::{CustomerSegment, SegmentCount, SegmentSummary, classify, segment_analysis, segment_counts},
};

/// Every intermediate result of one run, in customer order where per-row.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineOutcome {
    pub table: RankedTable,
    pub base_scores: Vec<CategoryScores>,
    pub adjusted: Vec<CategoryScores>,
    pub top_recommendations: Vec<Vec<String>>,
    pub segments: Vec<CustomerSegment>,
    pub segment_counts: Vec<SegmentCount>,
    pub segment_analysis: Vec<SegmentSummary>,
}

pub struct Pipeline<S: BaseScorer = RandomBaseScorer> {
    config: Config,
    scorer: S,
    reference: DateTime<Utc>,
}

impl Pipeline<RandomBaseScorer> {
    /// Pipeline with placeholder predictions drawn from the configured seed.
    pub fn new(config: Config) -> Self {
        let scorer = RandomBaseScorer::new(config.generator.seed);
        Self::with_scorer(config, scorer)
    }
}

impl<S: BaseScorer> Pipeline<S> {
    pub fn with_scorer(config: Config, scorer: S) -> Self {
        Self {
            config,
            scorer,
            reference: Utc::now(),
        }
    }

    /// Date recency is measured against. Defaults to the time of construction.
    pub fn with_reference(mut self, reference: DateTime<Utc>) -> Self {
        self.reference = reference;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn run(&mut self) -> Result<PipelineOutcome, RfmError> {
        info!(
            project = %self.config.common.project_name,
            customers = self.config.generator.customers,
            bins = self.config.ranking.bins,
            "Starting RFM run"
        );

        let mut rng = seeded_rng(self.config.generator.seed);
        let customers = generate_customers(&self.config.generator, &mut rng, self.reference)?;

        let scheme = RankingScheme::with_bins(self.config.ranking.bins);
        let table = rank_customers(&customers, &scheme)?;
        let rfm_scores = table.rfm_scores();
        debug!(
            max_possible = scheme.max_composite(),
            max_observed = rfm_scores.iter().max().copied().unwrap_or(0),
            "Composite scores computed"
        );

        let base_scores = self
            .scorer
            .base_scores(&self.config.recommendation.categories, &customers);
        let adjusted = adjust_recommendations(&rfm_scores, &base_scores)?;

        let top_recommendations = if self.config.recommendation.top_n > 0 {
            top_categories(&adjusted, self.config.recommendation.top_n)?
        } else {
            vec![Vec::new(); customers.len()]
        };

        let segments = classify(&table.rows);
        let segment_counts = segment_counts(&table.rows);
        let segment_analysis = segment_analysis(&table.rows);

        info!(
            segments = segment_counts.len(),
            categories = adjusted.len(),
            "RFM run finished"
        );

        Ok(PipelineOutcome {
            table,
            base_scores,
            adjusted,
            top_recommendations,
            segments,
            segment_counts,
            segment_analysis,
        })
    }
}
