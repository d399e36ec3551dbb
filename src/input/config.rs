use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::info;

use crate::input::InputError;
use crate::model::criteria::CriterionValues;
use crate::model::profiles::ProfileSet;
use crate::model::weights::WeightVector;

/// Loads a `{criterion: weight}` JSON object. All eight criteria are required.
pub fn load_weights(path: &Path) -> Result<WeightVector, InputError> {
    let text = fs::read_to_string(path)?;
    let weights = parse_weights(&text)?;
    info!(path = %path.display(), "weights loaded");
    Ok(weights)
}

/// Loads a `{"b1": {criterion: value}, ..., "b6": {...}}` JSON object.
pub fn load_profiles(path: &Path) -> Result<ProfileSet, InputError> {
    let text = fs::read_to_string(path)?;
    let profiles = parse_profiles(&text)?;
    info!(path = %path.display(), "profiles loaded");
    Ok(profiles)
}

pub fn parse_weights(text: &str) -> Result<WeightVector, InputError> {
    let raw: BTreeMap<String, f64> = serde_json::from_str(text)?;
    Ok(WeightVector::from_named(&raw)?)
}

pub fn parse_profiles(text: &str) -> Result<ProfileSet, InputError> {
    let raw: BTreeMap<String, BTreeMap<String, f64>> = serde_json::from_str(text)?;
    let mut named = BTreeMap::new();
    for (profile, values) in raw {
        named.insert(profile, CriterionValues::from_named(&values)?);
    }
    Ok(ProfileSet::from_named(&named)?)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/config.rs"]
mod tests;
