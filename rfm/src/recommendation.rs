use tracing::{debug, warn};

use crate::{error::RfmError, model::CategoryScores};

/// Each composite score divided by the highest one, so the best customers
/// keep their full weight and everyone else is damped linearly.
///
/// A maximum of zero yields all-zero factors.
pub fn scaling_factors(rfm_scores: &[u32]) -> Vec<f64> {
    let max = rfm_scores.iter().copied().max().unwrap_or(0);
    if max == 0 {
        if !rfm_scores.is_empty() {
            warn!("All composite scores are zero, recommendations are suppressed");
        }
        return vec![0.0; rfm_scores.len()];
    }
    rfm_scores
        .iter()
        .map(|&score| f64::from(score) / f64::from(max))
        .collect()
}

/// Multiplies every base score by its customer's scaling factor.
///
/// Base scores are passed through arithmetically, negative values included.
pub fn adjust_recommendations(
    rfm_scores: &[u32],
    base_scores: &[CategoryScores],
) -> Result<Vec<CategoryScores>, RfmError> {
    let factors = scaling_factors(rfm_scores);

    base_scores
        .iter()
        .map(|base| {
            if base.scores.len() != factors.len() {
                return Err(RfmError::LengthMismatch {
                    what: format!("base scores of '{}'", base.category),
                    expected: factors.len(),
                    actual: base.scores.len(),
                });
            }
            let scores = base
                .scores
                .iter()
                .zip(&factors)
                .map(|(score, factor)| score * factor)
                .collect();
            Ok(CategoryScores::new(base.category.clone(), scores))
        })
        .collect()
}

/// Names of the `n` best categories per customer, highest score first.
///
/// Equal scores keep the category order of `adjusted`.
pub fn top_categories(adjusted: &[CategoryScores], n: usize) -> Result<Vec<Vec<String>>, RfmError> {
    let customers = adjusted.first().map_or(0, |c| c.scores.len());
    if let Some(ragged) = adjusted.iter().find(|c| c.scores.len() != customers) {
        return Err(RfmError::LengthMismatch {
            what: format!("adjusted scores of '{}'", ragged.category),
            expected: customers,
            actual: ragged.scores.len(),
        });
    }

    debug!(categories = adjusted.len(), n, "Selecting top categories");

    let top = (0..customers)
        .map(|customer| {
            let mut ranked: Vec<&CategoryScores> = adjusted.iter().collect();
            ranked.sort_by(|a, b| b.scores[customer].total_cmp(&a.scores[customer]));
            ranked
                .into_iter()
                .take(n)
                .map(|c| c.category.clone())
                .collect()
        })
        .collect();

    Ok(top)
}
