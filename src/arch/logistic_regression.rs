use ndarray::{Array1, ArrayView2};
use rand::{Rng, SeedableRng, rngs::StdRng};

use super::{
    Model,
    activations::{Sigmoid, Step},
};
use crate::{config::Hyperparameters, dataset::pad, training::History};

/// A binary classifier fitting a linear decision boundary passed through a sigmoid link.
///
/// Parameters and history are rebuilt from scratch by every call to `fit` or `fit_stochastic`,
/// the two are alternative ways of training the same state.
pub struct LogisticRegression<R: Rng = StdRng> {
    pub(crate) w: Array1<f64>,
    pub(crate) bias: f64,
    pub(crate) config: Hyperparameters,
    pub(crate) history: History,
    pub(crate) rng: R,
}

impl Default for LogisticRegression<StdRng> {
    fn default() -> Self {
        Self::from_config(Hyperparameters::default())
    }
}

impl LogisticRegression<StdRng> {
    /// Returns a new unseeded `LogisticRegression`.
    ///
    /// # Arguments
    /// * `alpha` - The default learning rate.
    /// * `max_epochs` - The default amount of epochs per fit.
    pub fn new(alpha: f64, max_epochs: usize) -> Self {
        Self::from_config(Hyperparameters::new(alpha, max_epochs))
    }

    /// Returns a new `LogisticRegression` whose shuffling is seeded from `config.seed`, or from
    /// the operating system if there's no seed.
    pub fn from_config(config: Hyperparameters) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self::with_rng(config, rng)
    }
}

impl<R: Rng> LogisticRegression<R> {
    /// Returns a new `LogisticRegression` that shuffles with the given random source.
    pub fn with_rng(config: Hyperparameters, rng: R) -> Self {
        Self {
            w: Array1::zeros(0),
            bias: 0.,
            config,
            history: History::default(),
            rng,
        }
    }

    pub fn weights(&self) -> &Array1<f64> {
        &self.w
    }

    /// The learned bias. Only `fit` updates it, it stays at 0 after `fit_stochastic`.
    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn alpha(&self) -> f64 {
        self.config.alpha
    }

    pub fn max_epochs(&self) -> usize {
        self.config.max_epochs
    }

    pub fn config(&self) -> &Hyperparameters {
        &self.config
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn loss_history(&self) -> &[f64] {
        self.history.loss()
    }

    pub fn score_history(&self) -> &[f64] {
        self.history.score()
    }
}

impl<R: Rng> Model for LogisticRegression<R> {
    /// Weights one longer than the feature count are taken to carry an implicit bias, in which
    /// case every sample gets a trailing 1. The separate `bias` scalar is never used here.
    fn predict_proba(&self, x: ArrayView2<f64>) -> Array1<f64> {
        let z = if self.w.len() == x.ncols() + 1 {
            pad(x).dot(&self.w)
        } else {
            x.dot(&self.w)
        };

        Sigmoid.forward(z.view())
    }

    fn predict(&self, x: ArrayView2<f64>) -> Array1<u8> {
        let step = Step::default();
        self.predict_proba(x).mapv(|p| step.label(p))
    }
}
