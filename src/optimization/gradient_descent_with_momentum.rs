use ndarray::{Array1, ArrayView1, ArrayViewMut1, Zip};

use super::Optimizer;

#[derive(Debug, Clone)]
pub struct GradientDescentWithMomentum {
    learning_rate: f64,
    momentum: f64,
    velocity: Array1<f64>,
}

impl GradientDescentWithMomentum {
    /// Creates a new `GradientDescentWithMomentum` optimizer.
    ///
    /// # Arguments
    /// * `len` - The amount of parameters this instance should hold.
    /// * `learning_rate` - The small coefficient that modulates the amount of training per update.
    /// * `momentum` - The decay applied to the velocity on every update.
    ///
    /// # Returns
    /// A new `GradientDescentWithMomentum` instance with zero velocity.
    pub fn new(len: usize, learning_rate: f64, momentum: f64) -> Self {
        Self {
            learning_rate,
            momentum,
            velocity: Array1::zeros(len),
        }
    }

    pub fn velocity(&self) -> ArrayView1<'_, f64> {
        self.velocity.view()
    }
}

impl Optimizer for GradientDescentWithMomentum {
    /// Accumulates the scaled gradient into the velocity and steps the parameters by it.
    fn update_params(&mut self, params: ArrayViewMut1<f64>, grad: ArrayView1<f64>) {
        let lr = self.learning_rate;
        let mu = self.momentum;

        Zip::from(params)
            .and(grad)
            .and(&mut self.velocity)
            .for_each(|p, &g, v| {
                *v = (mu * *v) + lr * g;
                *p -= *v;
            });
    }
}
