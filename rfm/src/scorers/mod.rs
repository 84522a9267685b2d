pub mod random;

pub use random::*;

use crate::model::{CategoryScores, CustomerRecord};

/// Source of the unadjusted per-category recommendation scores.
pub trait BaseScorer {
    /// Returns one score vector per category, each aligned with `customers`.
    fn base_scores(
        &mut self,
        categories: &[String],
        customers: &[CustomerRecord],
    ) -> Vec<CategoryScores>;
}
