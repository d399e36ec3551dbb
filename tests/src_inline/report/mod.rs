use super::*;

#[test]
fn test_counts_ordered_best_to_worst() {
    let values = [
        Category::EPrime,
        Category::APrime,
        Category::EPrime,
        Category::CPrime,
    ];
    assert_eq!(category_counts(&values), [1, 0, 1, 0, 2]);
    assert_eq!(
        label_counts(&[NutriLabel::B, NutriLabel::B, NutriLabel::D]),
        [0, 2, 0, 1, 0]
    );
}

#[test]
fn test_distribution_lists_every_class() {
    let dist = category_distribution(&[Category::BPrime]);
    assert_eq!(dist.len(), 5);
    assert_eq!(dist["B'"], 1);
    assert_eq!(dist["A'"], 0);

    let labels = label_distribution(&[]);
    assert_eq!(labels.values().sum::<usize>(), 0);
    assert!(labels.contains_key("E"));
}

#[test]
fn test_fraction_and_format() {
    assert_eq!(fraction(1, 4), 0.25);
    assert_eq!(fraction(3, 0), 0.0);
    assert_eq!(format_f64_6(0.25), "0.250000");
}
