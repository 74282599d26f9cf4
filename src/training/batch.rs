use std::slice;

use log::info;
use ndarray::{Array1, ArrayView1, ArrayView2, ArrayViewMut1};
use rand::Rng;

use crate::{
    arch::{
        LogisticRegression, Model,
        activations::Sigmoid,
        loss::{BinaryCrossEntropy, LossFn},
    },
    config::Hyperparameters,
    optimization::{GradientDescent, Optimizer},
};

impl<R: Rng> LogisticRegression<R> {
    /// Trains with full-batch gradient descent for exactly `max_epochs` epochs, starting from
    /// zero weights and bias. Each epoch records the loss of the activations the step was taken
    /// from, and the accuracy of the parameters after the step.
    ///
    /// # Arguments
    /// * `x` - The samples, one per row.
    /// * `y` - The label of each sample, 0 or 1.
    /// * `alpha` - Overrides the stored learning rate, for this and later calls.
    /// * `max_epochs` - Overrides the stored amount of epochs, for this and later calls.
    ///
    /// Without samples nothing panics: every gradient is a division by zero, so the weights, the
    /// bias and the recorded history all come out NaN.
    ///
    /// # Panics
    /// If the shapes of `x` and `y` don't agree.
    pub fn fit(
        &mut self,
        x: ArrayView2<f64>,
        y: ArrayView1<f64>,
        alpha: Option<f64>,
        max_epochs: Option<usize>,
    ) {
        self.config.apply_overrides(alpha, max_epochs);
        let Hyperparameters {
            alpha,
            max_epochs,
            ..
        } = self.config;

        let (n_samples, n_features) = x.dim();
        let n = n_samples as f64;

        self.w = Array1::zeros(n_features);
        self.bias = 0.;
        self.history.clear();

        info!(
            samples = n_samples,
            features = n_features,
            alpha = alpha,
            epochs = max_epochs;
            "starting batch fit"
        );

        let loss_fn = BinaryCrossEntropy::new();
        let mut w_optimizer = GradientDescent::new(alpha);
        let mut b_optimizer = GradientDescent::new(alpha);

        for epoch in 0..max_epochs {
            let z = x.dot(&self.w) + self.bias;
            let y_hat = Sigmoid.forward(z.view());

            let d = loss_fn.loss_prime(y_hat.view(), y);
            let grad_w = x.t().dot(&d) / n;
            let grad_b = d.sum() / n;

            w_optimizer.update_params(self.w.view_mut(), grad_w.view());
            b_optimizer.update_params(
                ArrayViewMut1::from(slice::from_mut(&mut self.bias)),
                ArrayView1::from(&[grad_b]),
            );

            let loss = loss_fn.loss(y_hat.view(), y);
            let accuracy = self.score(x, y);
            self.history.record(epoch, loss, accuracy);
        }

        if let Some((loss, accuracy)) = self.history.last() {
            info!(loss = loss, accuracy = accuracy; "batch fit finished");
        }
    }
}
