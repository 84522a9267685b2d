use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rfm::{
    RfmError,
    ranking::{BinningStrategy, ascending_labels, create_ranks, descending_labels},
};

fn one_to(n: u32) -> Vec<f64> {
    (1..=n).map(f64::from).collect()
}

#[test]
fn test_distinct_values_use_quantile_bins() {
    let binned = create_ranks(&one_to(9), &ascending_labels(3)).unwrap();

    assert_eq!(binned.strategy, BinningStrategy::Quantile);
    assert_eq!(binned.labels, vec![1, 1, 1, 2, 2, 2, 3, 3, 3]);
}

#[test]
fn test_descending_labels_reverse_the_order() {
    let binned = create_ranks(&one_to(9), &descending_labels(3)).unwrap();

    assert_eq!(binned.labels, vec![3, 3, 3, 2, 2, 2, 1, 1, 1]);
}

#[test]
fn test_quantile_bins_hold_equal_populations() {
    let binned = create_ranks(&one_to(1000), &ascending_labels(5)).unwrap();

    assert_eq!(binned.strategy, BinningStrategy::Quantile);
    for label in 1..=5 {
        let members = binned.labels.iter().filter(|&&l| l == label).count();
        assert_eq!(members, 200, "label {label}");
    }
}

#[test]
fn test_values_keep_input_order() {
    let values = vec![9.0, 1.0, 5.0, 3.0, 7.0, 2.0, 8.0, 4.0, 6.0];
    let binned = create_ranks(&values, &ascending_labels(3)).unwrap();

    assert_eq!(binned.labels, vec![3, 1, 2, 1, 3, 1, 3, 2, 2]);
}

#[test]
fn test_duplicate_heavy_values_fall_back_to_rank_bins() {
    let values = vec![1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 3.0, 4.0];
    let binned = create_ranks(&values, &ascending_labels(3)).unwrap();

    assert_eq!(binned.strategy, BinningStrategy::RankFallback);
    // Ties are split by position once ranked.
    assert_eq!(binned.labels, vec![1, 1, 1, 2, 2, 2, 3, 3, 3]);
}

#[test]
fn test_identical_values_still_get_labels() {
    let values = vec![5.0; 10];
    let binned = create_ranks(&values, &ascending_labels(3)).unwrap();

    assert_eq!(binned.strategy, BinningStrategy::RankFallback);
    assert_eq!(binned.labels, vec![1, 1, 1, 1, 2, 2, 2, 3, 3, 3]);
}

#[test]
fn test_single_value_lands_in_middle_bin() {
    let binned = create_ranks(&[42.0], &ascending_labels(3)).unwrap();
    assert_eq!(binned.labels, vec![2]);

    let binned = create_ranks(&[42.0], &ascending_labels(1)).unwrap();
    assert_eq!(binned.labels, vec![1]);
}

#[test]
fn test_empty_input_yields_empty_labels() {
    let binned = create_ranks(&[], &ascending_labels(3)).unwrap();
    assert!(binned.labels.is_empty());
}

#[test]
fn test_empty_label_list_is_rejected() {
    let err = create_ranks(&one_to(3), &[]).unwrap_err();
    assert!(matches!(err, RfmError::NoLabels));
}

#[test]
fn test_non_finite_value_is_rejected() {
    let err = create_ranks(&[1.0, f64::NAN, 3.0], &ascending_labels(3)).unwrap_err();
    assert!(matches!(err, RfmError::NonFiniteValue { index: 1, .. }));
}

#[test]
fn test_every_row_is_labelled_monotonically_for_any_distribution() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    for round in 0..200 {
        let rows = rng.gen_range(1..300);
        // Narrow value ranges force plenty of duplicates.
        let spread = rng.gen_range(1..50);
        let bins = if round % 2 == 0 { 3 } else { 5 };
        let values: Vec<f64> = (0..rows).map(|_| rng.gen_range(0..spread) as f64).collect();
        let labels = ascending_labels(bins);

        let binned = create_ranks(&values, &labels).unwrap();

        assert_eq!(binned.labels.len(), values.len());
        assert!(binned.labels.iter().all(|l| labels.contains(l)));

        let mut order: Vec<usize> = (0..values.len()).collect();
        order.sort_by(|&a, &b| values[a].total_cmp(&values[b]).then(a.cmp(&b)));
        for pair in order.windows(2) {
            assert!(
                binned.labels[pair[0]] <= binned.labels[pair[1]],
                "labels must not decrease with value (round {round})"
            );
        }
    }
}
