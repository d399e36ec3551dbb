use tracing::info;

use crate::model::criteria::{Criterion, CriterionValues, Polarity};
use crate::model::errors::ModelError;
use crate::model::nutrients::Product;
use crate::model::profiles::{N_PROFILES, ProfileSet};

/// Scale applied to the observed minimum for the extreme low profile.
pub const LOW_MARGIN: f64 = 0.1;
/// Scale applied to the observed maximum for the extreme high profile.
pub const HIGH_MARGIN: f64 = 1.5;

const QUANTILES: [f64; 4] = [0.20, 0.40, 0.60, 0.80];

pub fn run_stage3(products: &[Product]) -> Result<ProfileSet, ModelError> {
    let rows = products.iter().map(Product::criteria).collect::<Vec<_>>();
    let profiles = build_profiles(&rows)?;
    info!(n_products = rows.len(), "built boundary profiles b1..b6");
    Ok(profiles)
}

/// Places b2..b5 on the 20/40/60/80th percentiles of each criterion and b1/b6
/// beyond the observed range, mirrored for criteria to maximise.
pub fn build_profiles(rows: &[CriterionValues]) -> Result<ProfileSet, ModelError> {
    if rows.is_empty() {
        return Err(ModelError::InsufficientData(
            "reference dataset is empty".to_string(),
        ));
    }

    let mut profiles = [CriterionValues::default(); N_PROFILES];

    for criterion in Criterion::ALL {
        let mut values = rows.iter().map(|r| r.get(criterion)).collect::<Vec<_>>();
        if values.iter().any(|v| !v.is_finite()) {
            return Err(ModelError::InsufficientData(format!(
                "non-finite value for criterion {criterion}"
            )));
        }
        values.sort_by(f64::total_cmp);

        let min = values[0];
        let max = values[values.len() - 1];
        let q = QUANTILES.map(|p| quantile_linear(&values, p));

        let column = match criterion.polarity() {
            Polarity::Minimize => [max * HIGH_MARGIN, q[3], q[2], q[1], q[0], min * LOW_MARGIN],
            Polarity::Maximize => [min * LOW_MARGIN, q[0], q[1], q[2], q[3], max * HIGH_MARGIN],
        };
        for (profile, value) in profiles.iter_mut().zip(column) {
            profile.set(criterion, value);
        }
    }

    ProfileSet::new(profiles)
}

/// Inclusive quantile with linear interpolation between closest ranks.
/// `sorted` must be ascending and non-empty.
pub fn quantile_linear(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let pos = (n - 1) as f64 * p.clamp(0.0, 1.0);
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_profiles.rs"]
mod tests;
