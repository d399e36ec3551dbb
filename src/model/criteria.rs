use std::collections::BTreeMap;
use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::model::errors::ModelError;

pub const N_CRITERIA: usize = 8;

/// The fixed criterion set of the outranking classifier: the seven nutrient
/// attributes plus the additive count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Criterion {
    EnergyKj,
    SaturatedFatG,
    SugarsG,
    SodiumMg,
    ProteinG,
    FiberG,
    FruitVegPct,
    Additives,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Maximize,
    Minimize,
}

impl Criterion {
    pub const ALL: [Criterion; N_CRITERIA] = [
        Criterion::EnergyKj,
        Criterion::SaturatedFatG,
        Criterion::SugarsG,
        Criterion::SodiumMg,
        Criterion::ProteinG,
        Criterion::FiberG,
        Criterion::FruitVegPct,
        Criterion::Additives,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Criterion::EnergyKj => "energy_kj",
            Criterion::SaturatedFatG => "saturated_fat_g",
            Criterion::SugarsG => "sugars_g",
            Criterion::SodiumMg => "sodium_mg",
            Criterion::ProteinG => "protein_g",
            Criterion::FiberG => "fiber_g",
            Criterion::FruitVegPct => "fruit_veg_pct",
            Criterion::Additives => "additives",
        }
    }

    /// Column name used by the reference beverage dataset.
    pub fn source_name(self) -> &'static str {
        match self {
            Criterion::EnergyKj => "Energie_kJ",
            Criterion::SaturatedFatG => "Acides_Gras_Satures_g",
            Criterion::SugarsG => "Sucres_g",
            Criterion::SodiumMg => "Sodium_mg",
            Criterion::ProteinG => "Proteines_g",
            Criterion::FiberG => "Fibres_g",
            Criterion::FruitVegPct => "Fruits_Legumes_Pct",
            Criterion::Additives => "Nombre_Additifs",
        }
    }

    pub fn polarity(self) -> Polarity {
        match self {
            Criterion::ProteinG | Criterion::FiberG | Criterion::FruitVegPct => Polarity::Maximize,
            Criterion::EnergyKj
            | Criterion::SaturatedFatG
            | Criterion::SugarsG
            | Criterion::SodiumMg
            | Criterion::Additives => Polarity::Minimize,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let needle = name.trim();
        Self::ALL.into_iter().find(|c| {
            c.name().eq_ignore_ascii_case(needle) || c.source_name().eq_ignore_ascii_case(needle)
        })
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Polarity {
    /// Whether `a` is at least as good as `b` in this direction.
    pub fn at_least_as_good(self, a: f64, b: f64) -> bool {
        match self {
            Polarity::Maximize => a >= b,
            Polarity::Minimize => a <= b,
        }
    }
}

/// One value per criterion, indexed by [`Criterion`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, f64>",
    into = "BTreeMap<String, f64>"
)]
pub struct CriterionValues([f64; N_CRITERIA]);

impl CriterionValues {
    pub fn new(values: [f64; N_CRITERIA]) -> Self {
        Self(values)
    }

    pub fn get(&self, criterion: Criterion) -> f64 {
        self.0[criterion.index()]
    }

    pub fn set(&mut self, criterion: Criterion, value: f64) {
        self.0[criterion.index()] = value;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Criterion, f64)> + '_ {
        Criterion::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    /// Builds a vector from a name-keyed map. Names outside the criterion set
    /// are rejected before missing ones are reported; a criterion named twice
    /// (under either spelling) is an error.
    pub fn from_named(map: &BTreeMap<String, f64>) -> Result<Self, ModelError> {
        let mut out = Self::default();
        let mut seen = [false; N_CRITERIA];
        for (name, &value) in map {
            let criterion = Criterion::from_name(name)
                .ok_or_else(|| ModelError::UnknownCriterion(name.clone()))?;
            if std::mem::replace(&mut seen[criterion.index()], true) {
                return Err(ModelError::DuplicateCriterion(criterion.name().to_string()));
            }
            out.set(criterion, value);
        }
        if let Some(missing) = Criterion::ALL.into_iter().find(|c| !seen[c.index()]) {
            return Err(ModelError::MissingCriterion(missing.name().to_string()));
        }
        Ok(out)
    }

    pub fn to_named(&self) -> BTreeMap<String, f64> {
        self.iter().map(|(c, v)| (c.name().to_string(), v)).collect()
    }
}

impl Index<Criterion> for CriterionValues {
    type Output = f64;

    fn index(&self, criterion: Criterion) -> &f64 {
        &self.0[criterion.index()]
    }
}

impl TryFrom<BTreeMap<String, f64>> for CriterionValues {
    type Error = ModelError;

    fn try_from(map: BTreeMap<String, f64>) -> Result<Self, Self::Error> {
        Self::from_named(&map)
    }
}

impl From<CriterionValues> for BTreeMap<String, f64> {
    fn from(values: CriterionValues) -> Self {
        values.to_named()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/criteria.rs"]
mod tests;
