#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use mockall::mock;
use rfm::{
    model::{CategoryScores, CustomerRecord, ModelId, RankedRecord, RfmRanks},
    scorers::BaseScorer,
};

mock! {
    pub Scorer {}

    impl BaseScorer for Scorer {
        fn base_scores(
            &mut self,
            categories: &[String],
            customers: &[CustomerRecord],
        ) -> Vec<CategoryScores>;
    }
}

pub fn reference_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

pub fn customer(id: ModelId, recency: i64, frequency: i64, monetary: f64) -> CustomerRecord {
    CustomerRecord {
        customer_id: id,
        last_purchase_at: reference_date() - Duration::days(recency),
        recency,
        frequency,
        monetary,
    }
}

pub fn ranked(id: ModelId, ranks: (u32, u32, u32), recency: i64, frequency: i64, monetary: f64) -> RankedRecord {
    RankedRecord::new(
        customer(id, recency, frequency, monetary),
        RfmRanks::new(ranks.0, ranks.1, ranks.2),
    )
}

/// Scorer mock that hands every customer the same base score in every category.
pub fn constant_scorer(value: f64) -> MockScorer {
    let mut scorer = MockScorer::new();
    scorer
        .expect_base_scores()
        .times(1)
        .returning(move |categories, customers| {
            categories
                .iter()
                .map(|c| CategoryScores::new(c.clone(), vec![value; customers.len()]))
                .collect()
        });
    scorer
}
