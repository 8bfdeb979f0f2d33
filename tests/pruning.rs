use minitree::prelude::*;

use rand::prelude::*;
use rand::rngs::StdRng;


/// Draws rows of a small schema whose label is `x == A11`,
/// flipped with probability `noise`.
/// The noise makes a fully grown tree overfit.
fn noisy_rows(n_rows: usize, noise: f64, seed: u64) -> DataSet {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n_rows)
        .map(|_| {
            let x = format!("A1{}", rng.gen_range(1..=3));
            let y = format!("A2{}", rng.gen_range(1..=2));
            let z = rng.gen_range(0..100).to_string();
            let mut positive = x == "A11";
            if rng.gen_bool(noise) {
                positive = !positive;
            }
            let label = if positive { "1" } else { "2" };
            Instance::new(vec![x, y, z], label)
        })
        .collect()
}


fn schema() -> Schema {
    Schema::new(vec![
        AttributeDescriptor::categorical("x", 3, 1),
        AttributeDescriptor::categorical("y", 2, 1),
        AttributeDescriptor::numeric("z"),
    ])
}


#[test]
fn pruning_never_decreases_tuning_accuracy() {
    for seed in 0..10 {
        let data = noisy_rows(300, 0.2, seed);
        let (train, tune) = data.split_tuning(0.3, seed);
        assert_eq!(tune.len(), 90);
        assert_eq!(train.len(), 210);

        let mut f = DecisionTreeBuilder::new(schema())
            .build()
            .fit(&train)
            .unwrap();
        assert!(f.root().is_well_formed());

        let before = f.accuracy(&tune).unwrap();
        let internal_nodes = f.internal_nodes();

        let report = f.prune(&tune).unwrap();
        let after = f.accuracy(&tune).unwrap();

        assert!(f.root().is_well_formed());
        assert!(after >= before, "seed {seed}: {before} -> {after}");
        assert_eq!(report.initial_accuracy, before);
        assert_eq!(report.final_accuracy, after);
        assert_eq!(report.initial_internal_nodes, internal_nodes);
        assert_eq!(report.final_internal_nodes, f.internal_nodes());
        assert!(report.rounds <= internal_nodes);
    }
}


#[test]
fn pruning_twice_changes_nothing() {
    let data = noisy_rows(200, 0.25, 42);
    let (train, tune) = data.split_tuning(0.25, 42);

    let tree = DecisionTreeBuilder::new(schema()).build();
    let (mut f, _) = tree.fit_with_tuning(&train, &tune).unwrap();
    let pruned = f.clone();

    let report = f.prune(&tune).unwrap();
    assert_eq!(report.rounds, 0);
    assert_eq!(f, pruned);
}


#[test]
fn fit_with_tuning_matches_fit_then_prune() {
    let data = noisy_rows(250, 0.15, 3);
    let (train, tune) = data.split_tuning(0.2, 3);

    let tree = DecisionTreeBuilder::new(schema()).build();
    let (f, report) = tree.fit_with_tuning(&train, &tune).unwrap();

    let mut g = tree.fit(&train).unwrap();
    let other = g.prune(&tune).unwrap();

    assert_eq!(f, g);
    assert_eq!(report, other);
    assert!(f.internal_nodes() <= report.initial_internal_nodes);
}


#[test]
fn noise_free_tree_survives_pruning() {
    // Without noise the root split on `x` is exact,
    // so pruning keeps an accuracy of 1.
    let data = noisy_rows(120, 0.0, 11);
    let (train, tune) = data.split_tuning(0.5, 11);

    let tree = DecisionTreeBuilder::new(schema()).build();
    let (f, report) = tree.fit_with_tuning(&train, &tune).unwrap();

    assert_eq!(report.final_accuracy, 1f64);
    assert!(f.root().is_well_formed());
    assert_eq!(f.root().test().map(|t| t.name()), Some("x"));
}


#[test]
fn tuning_set_with_unknown_label() {
    let data = noisy_rows(50, 0.1, 8);
    let mut f = DecisionTreeBuilder::new(schema())
        .build()
        .fit(&data)
        .unwrap();

    let tune = DataSet::new(vec![
        Instance::new(vec!["A11", "A21", "10"], "yes"),
    ]);
    let result = f.prune(&tune);
    assert!(matches!(result, Err(TreeError::UnknownLabel { .. })));
}
