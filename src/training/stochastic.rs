use std::num::NonZeroUsize;

use log::{info, trace};
use ndarray::{Array1, ArrayView1, ArrayView2};
use rand::Rng;

use crate::{
    arch::{
        LogisticRegression, Model,
        activations::Sigmoid,
        loss::{BinaryCrossEntropy, LossFn},
    },
    dataset::Dataset,
    optimization::{GradientDescent, GradientDescentWithMomentum, Optimizer},
};

/// Decay of the velocity when training with momentum.
pub const MOMENTUM: f64 = 0.8;

impl<R: Rng> LogisticRegression<R> {
    /// Trains with mini-batch stochastic gradient descent for exactly `max_epochs` epochs,
    /// starting from zero weights. Every epoch visits the samples in a fresh random order.
    ///
    /// The bias is neither used nor updated, it stays at 0. Batch gradients are normalized by
    /// the total amount of samples rather than by the batch length.
    ///
    /// # Arguments
    /// * `x` - The samples, one per row.
    /// * `y` - The label of each sample, 0 or 1.
    /// * `alpha` - Overrides the stored learning rate, for this and later calls.
    /// * `max_epochs` - Overrides the stored amount of epochs, for this and later calls.
    /// * `batch_size` - Defaults to the amount of samples.
    /// * `momentum` - Whether to accumulate a velocity across batches.
    ///
    /// # Panics
    /// If the shapes of `x` and `y` don't agree, or if there are no samples, no `batch_size`
    /// and at least one epoch to run.
    pub fn fit_stochastic(
        &mut self,
        x: ArrayView2<f64>,
        y: ArrayView1<f64>,
        alpha: Option<f64>,
        max_epochs: Option<usize>,
        batch_size: Option<NonZeroUsize>,
        momentum: bool,
    ) {
        self.config.apply_overrides(alpha, max_epochs);
        let alpha = self.config.alpha;
        let batch_size = batch_size.map_or(x.nrows(), NonZeroUsize::get);

        info!(
            samples = x.nrows(),
            features = x.ncols(),
            alpha = alpha,
            epochs = self.config.max_epochs,
            batch_size = batch_size,
            momentum = momentum;
            "starting stochastic fit"
        );

        if momentum {
            let optimizer = GradientDescentWithMomentum::new(x.ncols(), alpha, MOMENTUM);
            self.run_epochs(x, y, batch_size, optimizer);
        } else {
            self.run_epochs(x, y, batch_size, GradientDescent::new(alpha));
        }

        if let Some((loss, accuracy)) = self.history.last() {
            info!(loss = loss, accuracy = accuracy; "stochastic fit finished");
        }
    }

    fn run_epochs<O: Optimizer>(
        &mut self,
        x: ArrayView2<f64>,
        y: ArrayView1<f64>,
        batch_size: usize,
        mut optimizer: O,
    ) {
        let (n_samples, n_features) = x.dim();
        let n = n_samples as f64;

        self.w = Array1::zeros(n_features);
        self.bias = 0.;
        self.history.clear();

        let loss_fn = BinaryCrossEntropy::new();
        let mut dataset = Dataset::new(x, y);

        for epoch in 0..self.config.max_epochs {
            dataset.shuffle(&mut self.rng);

            for (x_batch, y_batch) in dataset.batches(batch_size) {
                trace!(epoch = epoch, len = y_batch.len(); "batch");

                let y_hat = Sigmoid.forward(x_batch.dot(&self.w).view());
                let d = loss_fn.loss_prime(y_hat.view(), y_batch.view());
                let grad = x_batch.t().dot(&d) / n;

                optimizer.update_params(self.w.view_mut(), grad.view());
            }

            let y_hat = Sigmoid.forward(x.dot(&self.w).view());
            let loss = loss_fn.loss(y_hat.view(), y);
            let accuracy = self.score(x, y);
            self.history.record(epoch, loss, accuracy);
        }
    }
}
