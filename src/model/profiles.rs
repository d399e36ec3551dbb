use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::criteria::{Criterion, CriterionValues};
use crate::model::errors::ModelError;

pub const N_PROFILES: usize = 6;

/// Boundary profile position, b1 (worst) through b6 (best).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProfileIndex {
    B1,
    B2,
    B3,
    B4,
    B5,
    B6,
}

impl ProfileIndex {
    /// Worst to best.
    pub const ALL: [ProfileIndex; N_PROFILES] = [
        ProfileIndex::B1,
        ProfileIndex::B2,
        ProfileIndex::B3,
        ProfileIndex::B4,
        ProfileIndex::B5,
        ProfileIndex::B6,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ProfileIndex::B1 => "b1",
            ProfileIndex::B2 => "b2",
            ProfileIndex::B3 => "b3",
            ProfileIndex::B4 => "b4",
            ProfileIndex::B5 => "b5",
            ProfileIndex::B6 => "b6",
        }
    }

    pub fn position(self) -> usize {
        self as usize
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let needle = name.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(needle))
    }
}

/// Six ordered boundary profiles. Construction always validates that every
/// profile is weakly preferred to the one below it on every criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, CriterionValues>",
    into = "BTreeMap<String, CriterionValues>"
)]
pub struct ProfileSet {
    profiles: [CriterionValues; N_PROFILES],
}

impl ProfileSet {
    pub fn new(profiles: [CriterionValues; N_PROFILES]) -> Result<Self, ModelError> {
        let set = Self { profiles };
        set.validate_order()?;
        Ok(set)
    }

    pub fn profile(&self, index: ProfileIndex) -> &CriterionValues {
        &self.profiles[index.position()]
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (ProfileIndex, &CriterionValues)> + '_ {
        ProfileIndex::ALL
            .into_iter()
            .map(|index| (index, self.profile(index)))
    }

    pub fn validate_order(&self) -> Result<(), ModelError> {
        for pair in ProfileIndex::ALL.windows(2) {
            let (lower, upper) = (pair[0], pair[1]);
            for criterion in Criterion::ALL {
                let lo = self.profile(lower).get(criterion);
                let hi = self.profile(upper).get(criterion);
                if !criterion.polarity().at_least_as_good(hi, lo) {
                    return Err(ModelError::InvalidProfileOrder {
                        lower: lower.name(),
                        upper: upper.name(),
                        criterion: criterion.name(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn from_named(map: &BTreeMap<String, CriterionValues>) -> Result<Self, ModelError> {
        let mut slots: [Option<CriterionValues>; N_PROFILES] = [None; N_PROFILES];
        for (name, values) in map {
            let index = ProfileIndex::from_name(name)
                .ok_or_else(|| ModelError::UnknownProfile(name.clone()))?;
            if slots[index.position()].replace(*values).is_some() {
                return Err(ModelError::DuplicateProfile(index.name().to_string()));
            }
        }
        let mut profiles = [CriterionValues::default(); N_PROFILES];
        for index in ProfileIndex::ALL {
            profiles[index.position()] = slots[index.position()]
                .ok_or_else(|| ModelError::MissingProfile(index.name().to_string()))?;
        }
        Self::new(profiles)
    }

    pub fn to_named(&self) -> BTreeMap<String, CriterionValues> {
        self.iter()
            .map(|(index, values)| (index.name().to_string(), *values))
            .collect()
    }
}

impl TryFrom<BTreeMap<String, CriterionValues>> for ProfileSet {
    type Error = ModelError;

    fn try_from(map: BTreeMap<String, CriterionValues>) -> Result<Self, Self::Error> {
        Self::from_named(&map)
    }
}

impl From<ProfileSet> for BTreeMap<String, CriterionValues> {
    fn from(set: ProfileSet) -> Self {
        set.to_named()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/profiles.rs"]
mod tests;
