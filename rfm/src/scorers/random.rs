use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{
    model::{CategoryScores, CustomerRecord},
    scorers::BaseScorer,
};

const PLACEHOLDER_STREAM: u64 = 1;

/// Placeholder predictions drawn uniformly from `[0, 1)`.
pub struct RandomBaseScorer {
    rng: ChaCha8Rng,
}

impl RandomBaseScorer {
    /// Uses its own stream of the seed, so the predictions do not disturb
    /// the customer table generated from the same seed.
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        rng.set_stream(PLACEHOLDER_STREAM);
        Self { rng }
    }
}

impl BaseScorer for RandomBaseScorer {
    fn base_scores(
        &mut self,
        categories: &[String],
        customers: &[CustomerRecord],
    ) -> Vec<CategoryScores> {
        categories
            .iter()
            .map(|category| {
                let scores = customers
                    .iter()
                    .map(|_| self.rng.gen_range(0.0..1.0))
                    .collect();
                CategoryScores::new(category.clone(), scores)
            })
            .collect()
    }
}
