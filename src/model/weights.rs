use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::criteria::{Criterion, CriterionValues};
use crate::model::errors::ModelError;

/// Non-negative weight per criterion. Weights need not sum to one; the
/// classifier divides by [`WeightVector::total`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, f64>", into = "BTreeMap<String, f64>")]
pub struct WeightVector {
    values: CriterionValues,
}

impl WeightVector {
    pub fn new(values: CriterionValues) -> Result<Self, ModelError> {
        for (criterion, value) in values.iter() {
            if !value.is_finite() || value < 0.0 {
                return Err(ModelError::InvalidWeight {
                    criterion: criterion.name().to_string(),
                    value,
                });
            }
        }
        let weights = Self { values };
        if weights.total() <= 0.0 {
            return Err(ModelError::InvalidWeight {
                criterion: "total".to_string(),
                value: weights.total(),
            });
        }
        Ok(weights)
    }

    pub fn from_named(map: &BTreeMap<String, f64>) -> Result<Self, ModelError> {
        Self::new(CriterionValues::from_named(map)?)
    }

    pub fn default_v1() -> Self {
        let mut values = CriterionValues::default();
        values.set(Criterion::EnergyKj, 0.15);
        values.set(Criterion::SaturatedFatG, 0.10);
        values.set(Criterion::SugarsG, 0.15);
        values.set(Criterion::SodiumMg, 0.15);
        values.set(Criterion::ProteinG, 0.10);
        values.set(Criterion::FiberG, 0.10);
        values.set(Criterion::FruitVegPct, 0.15);
        values.set(Criterion::Additives, 0.10);
        Self { values }
    }

    pub fn get(&self, criterion: Criterion) -> f64 {
        self.values.get(criterion)
    }

    pub fn total(&self) -> f64 {
        self.values.iter().map(|(_, w)| w).sum()
    }

    pub fn normalized(&self) -> CriterionValues {
        let total = self.total();
        let mut out = self.values;
        for criterion in Criterion::ALL {
            out.set(criterion, self.values.get(criterion) / total);
        }
        out
    }
}

impl Default for WeightVector {
    fn default() -> Self {
        Self::default_v1()
    }
}

impl TryFrom<BTreeMap<String, f64>> for WeightVector {
    type Error = ModelError;

    fn try_from(map: BTreeMap<String, f64>) -> Result<Self, Self::Error> {
        Self::from_named(&map)
    }
}

impl From<WeightVector> for BTreeMap<String, f64> {
    fn from(weights: WeightVector) -> Self {
        weights.values.to_named()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/weights.rs"]
mod tests;
