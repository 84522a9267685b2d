use chrono::{DateTime, TimeDelta, Utc};
use common::config::{GeneratorConfig, RangeConfig};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::{
    error::RfmError,
    model::{CustomerRecord, ModelId},
};

/// Builds the generator stream for a seed. Stream 0 is reserved for the
/// customer table so other consumers of the same seed can pick another one.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

fn checked_range(field: &'static str, range: RangeConfig) -> Result<RangeConfig, RfmError> {
    if range.low >= range.high {
        return Err(RfmError::InvalidRange {
            field,
            low: range.low,
            high: range.high,
        });
    }
    Ok(range)
}

/// `None` when the timestamp falls outside what chrono can represent.
fn days_before(reference: DateTime<Utc>, days: i64) -> Option<DateTime<Utc>> {
    TimeDelta::try_days(days).and_then(|delta| reference.checked_sub_signed(delta))
}

fn draw_column<R: Rng>(rng: &mut R, range: RangeConfig, count: usize) -> Vec<i64> {
    (0..count).map(|_| rng.gen_range(range.low..range.high)).collect()
}

/// Generates `config.customers` synthetic customers with ids starting at 1.
///
/// Columns are drawn one after another (all days-since-purchase, then all
/// frequencies, then all monetary values).
pub fn generate_customers<R: Rng>(
    config: &GeneratorConfig,
    rng: &mut R,
    reference: DateTime<Utc>,
) -> Result<Vec<CustomerRecord>, RfmError> {
    let recency_days = checked_range("recency_days", config.recency_days)?;
    // Purchases cannot lie after the reference date.
    if recency_days.low < 0 {
        return Err(RfmError::InvalidRange {
            field: "recency_days",
            low: recency_days.low,
            high: recency_days.high,
        });
    }
    let frequency = checked_range("frequency", config.frequency)?;
    let monetary = checked_range("monetary", config.monetary)?;

    debug!(
        customers = config.customers,
        seed = config.seed,
        "Generating synthetic customer table"
    );

    let days_ago = draw_column(rng, recency_days, config.customers);
    let frequencies = draw_column(rng, frequency, config.customers);
    let spent = draw_column(rng, monetary, config.customers);

    let customers = days_ago
        .into_iter()
        .zip(frequencies)
        .zip(spent)
        .enumerate()
        .map(|(idx, ((days, frequency), monetary))| {
            let last_purchase_at = days_before(reference, days).ok_or(RfmError::InvalidRange {
                field: "recency_days",
                low: recency_days.low,
                high: recency_days.high,
            })?;
            Ok(CustomerRecord {
                customer_id: idx as ModelId + 1,
                last_purchase_at,
                recency: (reference - last_purchase_at).num_days(),
                frequency,
                monetary: monetary as f64,
            })
        })
        .collect::<Result<Vec<_>, RfmError>>()?;

    info!("Generated {} customers", customers.len());
    Ok(customers)
}
