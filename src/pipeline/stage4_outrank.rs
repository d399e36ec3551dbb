use crate::model::criteria::{Criterion, CriterionValues};
use crate::model::errors::ModelError;
use crate::model::labels::Category;
use crate::model::profiles::{ProfileIndex, ProfileSet};
use crate::model::thresholds::{ClassifierParams, Procedure, validate_lambda};

/// Global concordance indices C(item, profile) and C(profile, item).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Concordance {
    pub item_profile: f64,
    pub profile_item: f64,
}

/// Both directions may hold at once; there is no incomparability state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outranking {
    pub item_outranks_profile: bool,
    pub profile_outranks_item: bool,
}

/// Condition a scan step must satisfy to stop the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopCondition {
    ItemOutranksProfile,
    ProfileStrictlyPreferred,
}

/// Ordered (profile, category) scan. The first step whose relation meets
/// `stop` decides the category; `fallback` applies when none does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignmentRule {
    pub scan: [(ProfileIndex, Category); 6],
    pub stop: StopCondition,
    pub fallback: Category,
}

pub const PESSIMISTIC_RULE: AssignmentRule = AssignmentRule {
    scan: [
        (ProfileIndex::B6, Category::APrime),
        (ProfileIndex::B5, Category::BPrime),
        (ProfileIndex::B4, Category::CPrime),
        (ProfileIndex::B3, Category::DPrime),
        (ProfileIndex::B2, Category::EPrime),
        (ProfileIndex::B1, Category::EPrime),
    ],
    stop: StopCondition::ItemOutranksProfile,
    fallback: Category::EPrime,
};

pub const OPTIMISTIC_RULE: AssignmentRule = AssignmentRule {
    scan: [
        (ProfileIndex::B1, Category::EPrime),
        (ProfileIndex::B2, Category::DPrime),
        (ProfileIndex::B3, Category::CPrime),
        (ProfileIndex::B4, Category::BPrime),
        (ProfileIndex::B5, Category::APrime),
        (ProfileIndex::B6, Category::APrime),
    ],
    stop: StopCondition::ProfileStrictlyPreferred,
    fallback: Category::APrime,
};

impl Procedure {
    pub fn rule(self) -> &'static AssignmentRule {
        match self {
            Procedure::Pessimistic => &PESSIMISTIC_RULE,
            Procedure::Optimistic => &OPTIMISTIC_RULE,
        }
    }
}

impl Outranking {
    pub fn satisfies(self, stop: StopCondition) -> bool {
        match stop {
            StopCondition::ItemOutranksProfile => self.item_outranks_profile,
            StopCondition::ProfileStrictlyPreferred => {
                self.profile_outranks_item && !self.item_outranks_profile
            }
        }
    }
}

/// ELECTRE TRI sorting with binary partial concordance and no veto.
/// Configuration is fixed at construction; classification keeps no state.
#[derive(Debug, Clone)]
pub struct OutrankingClassifier {
    params: ClassifierParams,
    profiles: ProfileSet,
    weight_total: f64,
}

impl OutrankingClassifier {
    pub fn new(params: ClassifierParams, profiles: ProfileSet) -> Result<Self, ModelError> {
        validate_lambda(params.lambda)?;
        profiles.validate_order()?;
        let weight_total = params.weights.total();
        Ok(Self {
            params,
            profiles,
            weight_total,
        })
    }

    pub fn params(&self) -> &ClassifierParams {
        &self.params
    }

    /// Returns (c(item, profile), c(profile, item)), each 0 or 1.
    pub fn partial_concordance(
        item: &CriterionValues,
        profile: &CriterionValues,
        criterion: Criterion,
    ) -> (f64, f64) {
        let polarity = criterion.polarity();
        let a = item.get(criterion);
        let b = profile.get(criterion);
        let c_ab = if polarity.at_least_as_good(a, b) { 1.0 } else { 0.0 };
        let c_ba = if polarity.at_least_as_good(b, a) { 1.0 } else { 0.0 };
        (c_ab, c_ba)
    }

    pub fn global_concordance(
        &self,
        item: &CriterionValues,
        profile: &CriterionValues,
    ) -> Concordance {
        let mut item_profile = 0.0;
        let mut profile_item = 0.0;
        // Same summation order as WeightVector::total, so full agreement is exactly 1.0.
        for criterion in Criterion::ALL {
            let weight = self.params.weights.get(criterion);
            let (c_ab, c_ba) = Self::partial_concordance(item, profile, criterion);
            item_profile += weight * c_ab;
            profile_item += weight * c_ba;
        }
        Concordance {
            item_profile: item_profile / self.weight_total,
            profile_item: profile_item / self.weight_total,
        }
    }

    pub fn outranks(&self, item: &CriterionValues, profile: &CriterionValues) -> Outranking {
        let c = self.global_concordance(item, profile);
        Outranking {
            item_outranks_profile: c.item_profile >= self.params.lambda,
            profile_outranks_item: c.profile_item >= self.params.lambda,
        }
    }

    pub fn assign_with(&self, item: &CriterionValues, rule: &AssignmentRule) -> Category {
        rule.scan
            .iter()
            .find(|(index, _)| {
                self.outranks(item, self.profiles.profile(*index))
                    .satisfies(rule.stop)
            })
            .map(|(_, category)| *category)
            .unwrap_or(rule.fallback)
    }

    pub fn assign(&self, item: &CriterionValues, procedure: Procedure) -> Category {
        self.assign_with(item, procedure.rule())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_outrank.rs"]
mod tests;
