use ndarray::{Array1, ArrayView1};

/// The logistic function. Not clamped: large enough inputs saturate to exactly 0 or 1.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sigmoid;

impl Sigmoid {
    pub fn f(&self, z: f64) -> f64 {
        1. / (1. + (-z).exp())
    }

    /// Applies the sigmoid element-wise.
    pub fn forward(&self, z: ArrayView1<f64>) -> Array1<f64> {
        z.mapv(|z| self.f(z))
    }
}
