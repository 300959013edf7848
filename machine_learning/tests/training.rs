use std::thread;

use machine_learning::{Dataset, GradientDescentRegressor, Observation};
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

/// y = 5 + 2x
fn line_rows() -> Vec<Observation> {
    vec![
        Observation::from(([1.0], 7.0)),
        Observation::from(([2.0], 9.0)),
        Observation::from(([3.0], 11.0)),
        Observation::from(([4.0], 13.0)),
    ]
}

/// y = 1 + 2a - 3b over a 4x4 grid.
fn plane_rows() -> Vec<Observation> {
    let mut rows = Vec::new();

    for a in 0..4 {
        for b in 0..4 {
            let (a, b) = (a as f64, b as f64);
            rows.push(Observation::new(vec![a, b], 1.0 + 2.0 * a - 3.0 * b));
        }
    }

    rows
}

fn train(rows: Vec<Observation>, iterations: usize, learning_rate: f64) -> Vec<f64> {
    let dataset = Dataset::load(rows).unwrap();
    let mut model = GradientDescentRegressor::new(dataset.feature_count());
    model.fit(&dataset, iterations, learning_rate).unwrap();
    model.weights()
}

#[test]
fn converges_on_an_exact_line() {
    let dataset = Dataset::load(line_rows()).unwrap();
    let mut model = GradientDescentRegressor::new(1);

    let losses = model.fit(&dataset, 5000, 0.01).unwrap();

    let weights = model.weights();
    assert!((weights[0] - 5.0).abs() < 1e-3, "intercept: {}", weights[0]);
    assert!((weights[1] - 2.0).abs() < 1e-3, "slope: {}", weights[1]);

    assert!(losses.last().unwrap() < &1e-6);
    assert!((model.predict(&[10.0]).unwrap() - 25.0).abs() < 1e-2);
}

#[test]
fn recovers_several_features() {
    let weights = train(plane_rows(), 20_000, 0.005);

    for (got, expected) in weights.iter().zip([1.0, 2.0, -3.0]) {
        assert!((got - expected).abs() < 1e-6, "weights: {weights:?}");
    }
}

#[test]
fn diverges_with_a_huge_learning_rate() {
    let dataset = Dataset::load(line_rows()).unwrap();
    let mut model = GradientDescentRegressor::new(1);

    let losses = model.fit(&dataset, 200, 10.0).unwrap();

    assert!(losses[1] > losses[0]);
    assert!(
        model
            .weights()
            .iter()
            .any(|w| !w.is_finite() || w.abs() > 1e12),
        "weights: {:?}",
        model.weights()
    );

    let y = model.predict(&[1.0]).unwrap();
    assert!(!y.is_finite() || y.abs() > 1e12, "prediction: {y}");
}

#[test]
fn training_is_deterministic() {
    let first = train(plane_rows(), 300, 0.005);
    let second = train(plane_rows(), 300, 0.005);

    let first: Vec<u64> = first.iter().map(|w| w.to_bits()).collect();
    let second: Vec<u64> = second.iter().map(|w| w.to_bits()).collect();
    assert_eq!(first, second);
}

#[test]
fn row_order_does_not_change_the_result() {
    let baseline = train(plane_rows(), 1000, 0.005);

    let mut reversed = plane_rows();
    reversed.reverse();

    let mut shuffled = plane_rows();
    shuffled.shuffle(&mut StdRng::seed_from_u64(7));

    for rows in [reversed, shuffled] {
        let weights = train(rows, 1000, 0.005);

        for (a, b) in weights.iter().zip(&baseline) {
            assert!((a - b).abs() < 1e-9, "{weights:?} vs {baseline:?}");
        }
    }
}

#[test]
fn predict_is_pure() {
    let dataset = Dataset::load(line_rows()).unwrap();
    let mut model = GradientDescentRegressor::new(1);
    model.fit(&dataset, 100, 0.01).unwrap();

    let weights = model.weights();
    let first = model.predict(&[2.5]).unwrap();
    let second = model.predict(&[2.5]).unwrap();

    assert_eq!(first.to_bits(), second.to_bits());
    assert_eq!(model.weights(), weights);
}

#[test]
fn regressors_share_a_dataset_across_threads() {
    let dataset = Dataset::load(plane_rows()).unwrap();

    let (a, b) = thread::scope(|s| {
        let fit = || {
            let mut model = GradientDescentRegressor::new(dataset.feature_count());
            model.fit(&dataset, 500, 0.005).unwrap();
            model.weights()
        };

        let a = s.spawn(fit);
        let b = s.spawn(fit);
        (a.join().unwrap(), b.join().unwrap())
    });

    assert_eq!(a, b);
    assert_eq!(a, train(plane_rows(), 500, 0.005));
}

#[test]
fn inconsistent_rows_are_rejected() {
    let mut rows = plane_rows();
    rows.insert(3, Observation::new(vec![1.0, 2.0, 3.0], 0.0));

    let err = Dataset::load(rows).unwrap_err();
    assert!(err.is_shape());
}
