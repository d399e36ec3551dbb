use super::*;
use crate::model::criteria::N_CRITERIA;
use crate::model::profiles::ProfileIndex;
use proptest::prelude::*;

fn row(value: f64) -> CriterionValues {
    CriterionValues::new([value; N_CRITERIA])
}

#[test]
fn test_quantile_linear() {
    let sorted = [1.0, 2.0, 3.0, 4.0, 5.0];
    assert_eq!(quantile_linear(&sorted, 0.0), 1.0);
    assert_eq!(quantile_linear(&sorted, 0.5), 3.0);
    assert_eq!(quantile_linear(&sorted, 1.0), 5.0);
    assert!((quantile_linear(&sorted, 0.2) - 1.8).abs() < 1e-12);
    assert!((quantile_linear(&sorted, 0.8) - 4.2).abs() < 1e-12);
    assert_eq!(quantile_linear(&[7.0], 0.4), 7.0);
}

#[test]
fn test_profiles_from_one_to_five() {
    let rows = (1..=5).map(|v| row(v as f64)).collect::<Vec<_>>();
    let set = build_profiles(&rows).unwrap();

    let sugars = ProfileIndex::ALL.map(|p| set.profile(p).get(Criterion::SugarsG));
    let expected_min = [7.5, 4.2, 3.4, 2.6, 1.8, 0.1];
    for (got, want) in sugars.iter().zip(expected_min) {
        assert!((got - want).abs() < 1e-9, "{got} vs {want}");
    }

    let fiber = ProfileIndex::ALL.map(|p| set.profile(p).get(Criterion::FiberG));
    let expected_max = [0.1, 1.8, 2.6, 3.4, 4.2, 7.5];
    for (got, want) in fiber.iter().zip(expected_max) {
        assert!((got - want).abs() < 1e-9, "{got} vs {want}");
    }
}

#[test]
fn test_empty_dataset_is_insufficient() {
    let err = build_profiles(&[]).unwrap_err();
    assert!(matches!(err, ModelError::InsufficientData(_)));
}

#[test]
fn test_non_finite_value_is_insufficient() {
    let mut bad = row(1.0);
    bad.set(Criterion::SodiumMg, f64::NAN);
    let err = build_profiles(&[row(1.0), bad]).unwrap_err();
    assert!(matches!(err, ModelError::InsufficientData(_)));
}

#[test]
fn test_identical_values_still_ordered() {
    let rows = vec![row(2.0); 4];
    let set = build_profiles(&rows).unwrap();
    let energy = ProfileIndex::ALL.map(|p| set.profile(p).get(Criterion::EnergyKj));
    assert!((energy[0] - 3.0).abs() < 1e-12);
    assert!((energy[5] - 0.2).abs() < 1e-12);
    for p in 1..5 {
        assert_eq!(energy[p], 2.0);
    }
}

#[test]
fn test_single_row_and_zero_column() {
    let set = build_profiles(&[row(0.0)]).unwrap();
    for (_, values) in set.iter() {
        for (_, v) in values.iter() {
            assert_eq!(v, 0.0);
        }
    }
}

#[test]
fn test_run_stage3_reads_product_criteria() {
    let products = (0..3)
        .map(|i| {
            let mut p = Product::default();
            p.id = i;
            p.additives = i as u32;
            p
        })
        .collect::<Vec<_>>();
    let set = run_stage3(&products).unwrap();
    assert!((set.profile(ProfileIndex::B1).get(Criterion::Additives) - 3.0).abs() < 1e-12);
    assert_eq!(set.profile(ProfileIndex::B6).get(Criterion::Additives), 0.0);
}

proptest! {
    #[test]
    fn prop_profiles_always_monotone(
        rows in prop::collection::vec(prop::array::uniform8(0.0..1000.0f64), 1..40)
    ) {
        let rows = rows.into_iter().map(CriterionValues::new).collect::<Vec<_>>();
        let set = build_profiles(&rows).unwrap();
        prop_assert!(set.validate_order().is_ok());
    }
}
