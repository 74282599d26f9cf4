#![cfg(test)]

use std::num::NonZeroUsize;

use ndarray::{Array1, Array2, Axis, concatenate};
use ndarray_rand::{
    RandomExt,
    rand::{SeedableRng, rngs::StdRng},
    rand_distr::Normal,
};

use crate::{Hyperparameters, LogisticRegression, Model};

/// Two unit-variance gaussian blobs centered at (-3, -3), labeled 0, and (3, 3), labeled 1.
fn blobs(per_class: usize, seed: u64) -> (Array2<f64>, Array1<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0., 1.).unwrap();

    let neg = Array2::random_using((per_class, 2), noise, &mut rng) - 3.;
    let pos = Array2::random_using((per_class, 2), noise, &mut rng) + 3.;

    let x = concatenate(Axis(0), &[neg.view(), pos.view()]).unwrap();
    let y = Array1::from_shape_fn(2 * per_class, |i| if i < per_class { 0. } else { 1. });
    (x, y)
}

fn seeded_model(seed: u64) -> LogisticRegression {
    let _ = env_logger::builder().is_test(true).try_init();

    LogisticRegression::from_config(Hyperparameters {
        seed: Some(seed),
        ..Hyperparameters::default()
    })
}

#[test]
fn test_fit_converges_on_separable_blobs() {
    let (x, y) = blobs(100, 1);
    let mut model = seeded_model(0);

    model.fit(x.view(), y.view(), Some(0.1), Some(500));

    let accuracy = *model.score_history().last().unwrap();
    assert!(accuracy > 0.9, "got: {}% accuracy", accuracy * 100.);

    let (first, last) = (model.loss_history()[0], model.loss_history()[499]);
    assert!(last < first, "loss went from {first} to {last}");
}

#[test]
fn test_fit_is_deterministic() {
    let (x, y) = blobs(50, 2);
    let mut a = LogisticRegression::new(0.1, 100);
    let mut b = LogisticRegression::new(0.1, 100);

    a.fit(x.view(), y.view(), None, None);
    b.fit(x.view(), y.view(), None, None);

    assert_eq!(a.weights(), b.weights());
    assert_eq!(a.bias(), b.bias());
    assert_eq!(a.loss_history(), b.loss_history());
    assert_eq!(a.score_history(), b.score_history());
}

#[test]
fn test_fit_stochastic_full_batch_converges() {
    let (x, y) = blobs(100, 3);
    let mut model = seeded_model(1);
    let batch_size = NonZeroUsize::new(x.nrows());

    model.fit_stochastic(x.view(), y.view(), Some(0.1), Some(200), batch_size, false);

    let accuracy = *model.score_history().last().unwrap();
    assert!(accuracy > 0.85, "got: {}% accuracy", accuracy * 100.);
    assert_eq!(model.bias(), 0.);
}

#[test]
fn test_fit_stochastic_with_momentum_converges() {
    let (x, y) = blobs(100, 4);
    let mut model = seeded_model(2);
    let batch_size = NonZeroUsize::new(16);

    model.fit_stochastic(x.view(), y.view(), Some(0.1), Some(200), batch_size, true);

    let accuracy = *model.score_history().last().unwrap();
    assert!(accuracy > 0.85, "got: {}% accuracy", accuracy * 100.);
}

#[test]
fn test_trained_model_generalizes() {
    let (x_train, y_train) = blobs(100, 5);
    let (x_test, y_test) = blobs(25, 6);
    let mut model = seeded_model(3);

    model.fit(x_train.view(), y_train.view(), None, Some(200));

    let y_pred = model.predict(x_test.view());
    assert_eq!(y_pred.len(), x_test.nrows());
    assert!(y_pred.iter().all(|&p| p <= 1));

    let accuracy = model.score(x_test.view(), y_test.view());
    assert!((0. ..=1.).contains(&accuracy));
    assert!(accuracy > 0.9, "got: {}% accuracy", accuracy * 100.);
}

#[test]
fn test_every_recorded_accuracy_is_a_fraction() {
    let (x, y) = blobs(20, 7);
    let mut model = seeded_model(4);
    let batch_size = NonZeroUsize::new(3);

    model.fit_stochastic(x.view(), y.view(), None, Some(50), batch_size, false);

    let history = model.score_history();
    assert!(history.iter().all(|a| (0. ..=1.).contains(a)));
}
