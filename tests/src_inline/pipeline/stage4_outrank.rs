use super::*;
use crate::model::criteria::{N_CRITERIA, Polarity};
use crate::model::profiles::N_PROFILES;
use crate::model::weights::WeightVector;
use crate::pipeline::stage3_profiles::build_profiles;
use proptest::prelude::*;

fn equal_weights() -> WeightVector {
    WeightVector::new(CriterionValues::new([1.0; N_CRITERIA])).unwrap()
}

fn params(lambda: f64) -> ClassifierParams {
    ClassifierParams::new(equal_weights(), lambda).unwrap()
}

/// Every criterion is `level` steps from the worst end, so level 0 is b1
/// and level 5 is b6.
fn at_level(level: f64) -> CriterionValues {
    let mut values = CriterionValues::default();
    for criterion in Criterion::ALL {
        let v = match criterion.polarity() {
            Polarity::Minimize => 60.0 - 10.0 * level,
            Polarity::Maximize => 10.0 * level,
        };
        values.set(criterion, v);
    }
    values
}

fn ladder() -> ProfileSet {
    let mut profiles = [CriterionValues::default(); N_PROFILES];
    for (i, profile) in profiles.iter_mut().enumerate() {
        *profile = at_level(i as f64);
    }
    ProfileSet::new(profiles).unwrap()
}

fn classifier(lambda: f64) -> OutrankingClassifier {
    OutrankingClassifier::new(params(lambda), ladder()).unwrap()
}

#[test]
fn test_partial_concordance_respects_polarity() {
    let mut a = CriterionValues::default();
    let mut b = CriterionValues::default();
    a.set(Criterion::SugarsG, 5.0);
    b.set(Criterion::SugarsG, 8.0);
    a.set(Criterion::FiberG, 5.0);
    b.set(Criterion::FiberG, 8.0);
    assert_eq!(
        OutrankingClassifier::partial_concordance(&a, &b, Criterion::SugarsG),
        (1.0, 0.0)
    );
    assert_eq!(
        OutrankingClassifier::partial_concordance(&a, &b, Criterion::FiberG),
        (0.0, 1.0)
    );
    assert_eq!(
        OutrankingClassifier::partial_concordance(&a, &b, Criterion::SodiumMg),
        (1.0, 1.0)
    );
}

#[test]
fn test_self_comparison_is_full_concordance() {
    let weights = WeightVector::default_v1();
    let c = OutrankingClassifier::new(ClassifierParams::new(weights, 1.0).unwrap(), ladder())
        .unwrap();
    for (_, profile) in ladder().iter() {
        let conc = c.global_concordance(profile, profile);
        assert_eq!(conc.item_profile, 1.0);
        assert_eq!(conc.profile_item, 1.0);
        let rel = c.outranks(profile, profile);
        assert!(rel.item_outranks_profile && rel.profile_outranks_item);
    }
}

#[test]
fn test_concordance_is_weighted_share() {
    let mut w = CriterionValues::default();
    w.set(Criterion::EnergyKj, 3.0);
    w.set(Criterion::SugarsG, 1.0);
    let params = ClassifierParams::new(WeightVector::new(w).unwrap(), 0.6).unwrap();
    let c = OutrankingClassifier::new(params, ladder()).unwrap();

    let mut item = at_level(2.0);
    item.set(Criterion::SugarsG, 100.0);
    let conc = c.global_concordance(&item, ladder().profile(ProfileIndex::B3));
    assert!((conc.item_profile - 0.75).abs() < 1e-12);
    assert_eq!(conc.profile_item, 1.0);
}

#[test]
fn test_item_better_than_every_profile() {
    let c = classifier(0.6);
    let item = at_level(6.0);
    assert_eq!(c.assign(&item, Procedure::Pessimistic), Category::APrime);
    assert_eq!(c.assign(&item, Procedure::Optimistic), Category::APrime);
}

#[test]
fn test_item_worse_than_every_profile() {
    let c = classifier(0.6);
    let item = at_level(-1.0);
    assert_eq!(c.assign(&item, Procedure::Pessimistic), Category::EPrime);
    assert_eq!(c.assign(&item, Procedure::Optimistic), Category::EPrime);
}

#[test]
fn test_item_equal_to_profile() {
    let c = classifier(0.6);
    let item = at_level(3.0);
    // Outranks b4 and is outranked by it; b5 is the first strictly better profile.
    assert_eq!(c.assign(&item, Procedure::Pessimistic), Category::CPrime);
    assert_eq!(c.assign(&item, Procedure::Optimistic), Category::BPrime);
}

#[test]
fn test_item_between_profiles() {
    let c = classifier(0.6);
    let item = at_level(2.5);
    assert_eq!(c.assign(&item, Procedure::Pessimistic), Category::DPrime);
    assert_eq!(c.assign(&item, Procedure::Optimistic), Category::BPrime);
}

#[test]
fn test_scan_rules_cover_every_profile() {
    for rule in [&PESSIMISTIC_RULE, &OPTIMISTIC_RULE] {
        let mut seen = rule.scan.map(|(p, _)| p);
        seen.sort();
        assert_eq!(seen, ProfileIndex::ALL);
    }
    assert_eq!(PESSIMISTIC_RULE.scan[0].0, ProfileIndex::B6);
    assert_eq!(OPTIMISTIC_RULE.scan[0].0, ProfileIndex::B1);
}

#[test]
fn test_invalid_lambda_rejected() {
    assert_eq!(
        ClassifierParams::new(equal_weights(), 0.0).unwrap_err(),
        ModelError::InvalidLambda(0.0)
    );
    assert!(ClassifierParams::new(equal_weights(), 1.2).is_err());
    let bad = ClassifierParams {
        weights: equal_weights(),
        lambda: f64::NAN,
    };
    assert!(OutrankingClassifier::new(bad, ladder()).is_err());
}

#[test]
fn test_optimistic_can_improve_with_stricter_threshold() {
    // Three weighted minimised criteria. b2..b6 beat the item on sugars and
    // sodium but lose on energy, so concordance is 2/3 in their favour.
    let mut w = CriterionValues::default();
    for c in [Criterion::EnergyKj, Criterion::SugarsG, Criterion::SodiumMg] {
        w.set(c, 1.0);
    }
    let weights = WeightVector::new(w).unwrap();

    let energy = [100.0, 90.0, 80.0, 70.0, 60.0, 55.0];
    let other = [100.0, 40.0, 30.0, 20.0, 10.0, 5.0];
    let mut profiles = [CriterionValues::default(); N_PROFILES];
    for (i, p) in profiles.iter_mut().enumerate() {
        p.set(Criterion::EnergyKj, energy[i]);
        p.set(Criterion::SugarsG, other[i]);
        p.set(Criterion::SodiumMg, other[i]);
    }
    let profiles = ProfileSet::new(profiles).unwrap();

    let mut item = CriterionValues::default();
    item.set(Criterion::EnergyKj, 50.0);
    item.set(Criterion::SugarsG, 50.0);
    item.set(Criterion::SodiumMg, 50.0);

    let loose = OutrankingClassifier::new(
        ClassifierParams::new(weights.clone(), 0.6).unwrap(),
        profiles.clone(),
    )
    .unwrap();
    let strict =
        OutrankingClassifier::new(ClassifierParams::new(weights, 0.7).unwrap(), profiles).unwrap();

    assert_eq!(loose.assign(&item, Procedure::Optimistic), Category::DPrime);
    assert_eq!(strict.assign(&item, Procedure::Optimistic), Category::APrime);
    assert_eq!(loose.assign(&item, Procedure::Pessimistic), Category::EPrime);
    assert_eq!(strict.assign(&item, Procedure::Pessimistic), Category::EPrime);
}

fn arb_case() -> impl Strategy<Value = (Vec<[f64; N_CRITERIA]>, [f64; N_CRITERIA], [f64; N_CRITERIA])>
{
    (
        prop::collection::vec(prop::array::uniform8(0.0..100.0f64), 1..30),
        prop::array::uniform8(0.0..120.0f64),
        prop::array::uniform8(0.01..1.0f64),
    )
}

proptest! {
    #[test]
    fn prop_pessimistic_never_above_optimistic(
        (rows, item, w) in arb_case(),
        lambda in 0.5..=1.0f64,
    ) {
        let rows = rows.into_iter().map(CriterionValues::new).collect::<Vec<_>>();
        let profiles = build_profiles(&rows).unwrap();
        let weights = WeightVector::new(CriterionValues::new(w)).unwrap();
        let c = OutrankingClassifier::new(ClassifierParams::new(weights, lambda).unwrap(), profiles)
            .unwrap();
        let item = CriterionValues::new(item);
        let pessimistic = c.assign(&item, Procedure::Pessimistic);
        let optimistic = c.assign(&item, Procedure::Optimistic);
        prop_assert!(pessimistic.rank() <= optimistic.rank());
    }

    #[test]
    fn prop_pessimistic_monotone_in_lambda(
        (rows, item, w) in arb_case(),
        low in 0.05..=1.0f64,
        bump in 0.0..=1.0f64,
    ) {
        let high = (low + (1.0 - low) * bump).min(1.0);
        let rows = rows.into_iter().map(CriterionValues::new).collect::<Vec<_>>();
        let profiles = build_profiles(&rows).unwrap();
        let weights = WeightVector::new(CriterionValues::new(w)).unwrap();
        let loose = OutrankingClassifier::new(
            ClassifierParams::new(weights.clone(), low).unwrap(),
            profiles.clone(),
        )
        .unwrap();
        let strict =
            OutrankingClassifier::new(ClassifierParams::new(weights, high).unwrap(), profiles)
                .unwrap();
        let item = CriterionValues::new(item);
        let strict_rank = strict.assign(&item, Procedure::Pessimistic).rank();
        let loose_rank = loose.assign(&item, Procedure::Pessimistic).rank();
        prop_assert!(strict_rank <= loose_rank);
    }
}
